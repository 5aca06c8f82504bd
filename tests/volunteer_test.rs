//! Integration tests for volunteer onboarding.
//!
//! These tests need a running PostgreSQL instance (see config/test.toml)
//! and are ignored by default.

mod common;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

async fn file_application(app: &common::TestApp, user_id: Uuid) -> Uuid {
    let response = app
        .request(
            "POST",
            "/volunteer-applications",
            Some(json!({
                "user_id": user_id,
                "description": "I want to help with flood relief",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    common::parse_id(&response.body["data"]["id"])
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_approval_promotes_the_applicant() {
    let app = common::TestApp::new().await;
    let user_id = app.create_user("kumar", "password123", None).await;
    assert_eq!(app.user_role(user_id).await, "citizen");

    let application_id = file_application(&app, user_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/volunteer-applications/{application_id}/accept"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], json!("APPROVED"));
    assert_eq!(app.user_role(user_id).await, "volunteer");

    // Decisions are final.
    let response = app
        .request(
            "PUT",
            &format!("/volunteer-applications/{application_id}/reject"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_rejection_leaves_the_role_untouched() {
    let app = common::TestApp::new().await;
    let user_id = app.create_user("raju", "password123", None).await;
    let application_id = file_application(&app, user_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/volunteer-applications/{application_id}/reject"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], json!("REJECTED"));
    assert_eq!(app.user_role(user_id).await, "citizen");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_application_listing_includes_applicant_details() {
    let app = common::TestApp::new().await;
    let user_id = app.create_user("shree", "password123", None).await;
    let application_id = file_application(&app, user_id).await;

    let response = app
        .request(
            "GET",
            &format!("/volunteer-applications/{application_id}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["applicant_name"], json!("shree"));
    assert_eq!(response.body["data"]["applicant_location"], json!("Kochi"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_application_for_unknown_user_is_rejected() {
    let app = common::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/volunteer-applications",
            Some(json!({
                "user_id": Uuid::new_v4(),
                "description": "I want to help",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
