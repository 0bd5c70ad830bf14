use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::route_guard::require_route_access;
use crate::modules::access::router::init_access_router;
use crate::modules::vacations::router::init_vacations_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn dashboard_probe() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn init_dashboard_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard_probe))
        .route("/dashboard/{*page}", get(dashboard_probe))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_route_access,
        ))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest(
            "/api",
            Router::new()
                .route("/health", get(health))
                .nest("/access", init_access_router())
                .nest("/vacations", init_vacations_router()),
        )
        .merge(init_dashboard_router(&state))
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
