mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, token_for, token_for_slug};
use serde_json::json;
use staffdesk_core::Role;

const WORKFLOW: &str = "/api/vacations/workflow";

#[tokio::test]
async fn test_workflow_requires_token() {
    let response = post_json(WORKFLOW, None, json!({ "status": "pending" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_workflow_forbidden_for_unknown_role() {
    let token = token_for_slug("visitor");
    let response = post_json(WORKFLOW, Some(&token), json!({ "status": "pending" })).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Access denied. Missing required permission: VIEW_VACATIONS"
    );
}

#[tokio::test]
async fn test_pending_request_for_chief_instructor() {
    let token = token_for(Role::ChiefInstructor);
    let response = post_json(WORKFLOW, Some(&token), json!({ "status": "pending" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["stage"], "submitted");
    assert_eq!(steps[1]["stage"], "chief_review");
    assert_eq!(steps[1]["active"], true);
    assert_eq!(steps[2]["label"], "Principal Approval");
    assert_eq!(body["status_message"], "awaiting_chief_review");
    assert_eq!(body["message"], "waiting for Chief Instructor review");
    assert_eq!(body["available_action"], "chief_review");
    assert!(body["anomaly"].is_null());
}

#[tokio::test]
async fn test_pending_request_without_chief_step() {
    let token = token_for(Role::Principal);
    let response = post_json(
        WORKFLOW,
        Some(&token),
        json!({ "status": "pending", "isChiefRequired": false }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1]["stage"], "principal_approval");
    assert_eq!(steps[1]["active"], true);
    assert_eq!(body["message"], "waiting for Principal approval");
    assert_eq!(body["available_action"], "principal_approval");
}

#[tokio::test]
async fn test_fully_approved_request() {
    let token = token_for(Role::Instructor);
    let response = post_json(
        WORKFLOW,
        Some(&token),
        json!({
            "status": "approved",
            "reviewedByChief": { "name": "Karim", "reviewedAt": "2024-03-02T09:00:00Z" },
            "reviewedByPrincipal": { "name": "Nasreen", "reviewedAt": "2024-03-03T09:00:00Z" },
            "principalReviewComment": "Enjoy"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["progress"], 1.0);
    assert_eq!(body["message"], "fully approved");
    assert_eq!(body["steps"][2]["reviewer_name"], "Nasreen");
    assert_eq!(body["steps"][2]["comment"], "Enjoy");
    assert!(body["available_action"].is_null());
}

#[tokio::test]
async fn test_rejected_by_principal() {
    let token = token_for(Role::SuperAdmin);
    let response = post_json(
        WORKFLOW,
        Some(&token),
        json!({
            "status": "rejected",
            "reviewedByChief": { "name": "Karim", "reviewedAt": "2024-03-02T09:00:00Z" },
            "reviewedByPrincipal": { "name": "Nasreen", "reviewedAt": "2024-03-03T09:00:00Z" }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["steps"][1]["rejected"], false);
    assert_eq!(body["steps"][2]["rejected"], true);
    assert_eq!(body["message"], "rejected");
}

#[tokio::test]
async fn test_unattributed_rejection_is_reported() {
    let token = token_for(Role::Principal);
    let response = post_json(WORKFLOW, Some(&token), json!({ "status": "rejected" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["anomaly"], "unattributed_rejection");
    assert_eq!(body["steps"][1]["rejected"], true);
    assert_eq!(body["steps"][2]["rejected"], false);
}

#[tokio::test]
async fn test_unknown_status_is_bad_request() {
    let token = token_for(Role::Principal);
    let response = post_json(WORKFLOW, Some(&token), json!({ "status": "archived" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_status_is_bad_request() {
    let token = token_for(Role::Principal);
    let response = post_json(WORKFLOW, Some(&token), json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "status is required");
}

#[tokio::test]
async fn test_blank_reviewer_name_is_unprocessable() {
    let token = token_for(Role::Principal);
    let response = post_json(
        WORKFLOW,
        Some(&token),
        json!({
            "status": "approved_by_chief",
            "reviewedByChief": { "name": "", "reviewedAt": "2024-03-02T09:00:00Z" }
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Reviewer name must be between 1 and 200 characters"
    );
}
