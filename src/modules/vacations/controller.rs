use axum::Json;
use tracing::instrument;

use staffdesk_core::AppError;
use staffdesk_models::VacationRequest;
use staffdesk_workflow::{available_review_action, evaluate_approval_steps};

use crate::middleware::auth::RequireViewVacations;
use crate::modules::access::controller::ErrorResponse;
use crate::modules::vacations::model::WorkflowResponse;
use crate::validator::ValidatedJson;

/// Evaluate the approval progress of a vacation request
#[utoipa::path(
    post,
    path = "/api/vacations/workflow",
    request_body = VacationRequest,
    responses(
        (status = 200, description = "Workflow steps, progress and status message", body = WorkflowResponse),
        (status = 400, description = "Bad request - malformed request record", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - VIEW_VACATIONS required", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Vacations"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id(), status = %request.status))]
pub async fn evaluate_workflow(
    RequireViewVacations(auth_user): RequireViewVacations,
    ValidatedJson(request): ValidatedJson<VacationRequest>,
) -> Result<Json<WorkflowResponse>, AppError> {
    let view = evaluate_approval_steps(&request);
    let action = available_review_action(auth_user.role(), &request);

    Ok(Json(WorkflowResponse::new(view, action)))
}
