use crate::modules::access::controller::{
    check_permissions, check_route, get_access_profile, get_roles_with_permission,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn init_access_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_access_profile))
        .route("/routes", get(check_route))
        .route("/check", post(check_permissions))
        .route("/permissions/{permission}/roles", get(get_roles_with_permission))
}
