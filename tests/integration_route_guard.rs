mod common;

use axum::http::StatusCode;
use common::{get, token_for, token_for_slug};
use staffdesk_core::Role;

#[tokio::test]
async fn test_dashboard_requires_token() {
    let response = get("/dashboard", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_every_role_opens_dashboard_home() {
    for role in Role::ALL {
        let token = token_for(role);
        let response = get("/dashboard", Some(&token)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "{role}");
    }
}

#[tokio::test]
async fn test_unknown_role_is_refused() {
    let token = token_for_slug("janitor");
    let response = get("/dashboard", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_chief_review_page() {
    let chief = token_for(Role::ChiefInstructor);
    let principal = token_for(Role::Principal);

    let allowed = get("/dashboard/vacations/chief-review", Some(&chief)).await;
    let denied = get("/dashboard/vacations/chief-review", Some(&principal)).await;

    assert_eq!(allowed.status(), StatusCode::NO_CONTENT);
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_settings_users_is_super_admin_only() {
    let admin = token_for(Role::SuperAdmin);
    let shakha = token_for(Role::GeneralShakha);

    assert_eq!(
        get("/dashboard/settings/users", Some(&admin)).await.status(),
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        get("/dashboard/settings/users", Some(&shakha)).await.status(),
        StatusCode::FORBIDDEN
    );
}

#[tokio::test]
async fn test_unregistered_page_refused_for_super_admin() {
    let token = token_for(Role::SuperAdmin);
    let response = get("/dashboard/reports", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_nested_page_does_not_inherit_parent_permission() {
    let token = token_for(Role::SuperAdmin);
    let response = get("/dashboard/loans/42", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
