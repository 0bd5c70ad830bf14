use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use staffdesk::router::init_router;
use staffdesk::state::AppState;
use staffdesk_auth::create_session_token;
use staffdesk_config::{CorsConfig, JwtConfig};
use staffdesk_core::Role;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::with_secret(TEST_SECRET)
}

pub fn setup_test_app() -> axum::Router {
    let state = AppState {
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig::from_origins("http://localhost:5173"),
    };
    init_router(state)
}

/// Signs a session token carrying `role` verbatim, so unknown slugs can be tested.
pub fn token_for_slug(role: &str) -> String {
    create_session_token("user-1", "Test User", role, &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn token_for(role: Role) -> String {
    token_for_slug(role.as_str())
}

#[allow(dead_code)]
pub async fn get(uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    setup_test_app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn post_json(uri: &str, token: Option<&str>, body: serde_json::Value) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    setup_test_app()
        .oneshot(
            builder
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
