use serde::Serialize;
use utoipa::ToSchema;

use staffdesk_workflow::{ReviewAction, WorkflowView};

/// Approval progress of a vacation request, as shown to the caller.
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkflowResponse {
    #[serde(flatten)]
    pub view: WorkflowView,
    /// Human-readable form of `status_message`.
    pub message: String,
    /// The review the caller may perform now, if any.
    pub available_action: Option<ReviewAction>,
}

impl WorkflowResponse {
    pub fn new(view: WorkflowView, available_action: Option<ReviewAction>) -> Self {
        Self {
            message: view.message().to_string(),
            view,
            available_action,
        }
    }
}
