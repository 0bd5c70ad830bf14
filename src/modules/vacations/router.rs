use crate::modules::vacations::controller::evaluate_workflow;
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn init_vacations_router() -> Router<AppState> {
    Router::new().route("/workflow", post(evaluate_workflow))
}
