//! Dashboard route guard.
//!
//! Answers navigation requests for dashboard pages using the route table:
//! the caller's role must hold the permission registered for the exact path.
//! Paths missing from the table are refused for every role.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use staffdesk_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Middleware that lets the request through only if the caller may open the
/// requested dashboard path.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let dashboard = Router::new()
///     .route("/dashboard/{*page}", get(probe))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_route_access));
/// ```
pub async fn require_route_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match check_route_access(&state, req).await {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

async fn check_route_access(state: &AppState, req: Request) -> Result<Request, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, state).await?;
    let path = parts.uri.path();

    if !auth_user.can_access_route(path) {
        tracing::debug!(
            user_id = %auth_user.user_id(),
            role = %auth_user.0.role,
            path = %path,
            "Route access denied"
        );
        return Err(AppError::forbidden(format!(
            "Access denied. Role '{}' may not open {}",
            auth_user.0.role, path
        )));
    }

    Ok(Request::from_parts(parts, body))
}
