//! Integration tests for registration and login.
//!
//! These tests need a running PostgreSQL instance (see config/test.toml)
//! and are ignored by default.

mod common;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_login_success_returns_profile_fields() {
    let app = common::TestApp::new().await;
    let (user_id, email) = app
        .create_user_with_email("asha", "password123", None)
        .await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "email": email, "password": "password123" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(common::parse_id(&response.body["userid"]), user_id);
    assert_eq!(response.body["role"], json!("citizen"));
    assert_eq!(response.body["name"], json!("asha"));
    assert_eq!(response.body["userStatus"], json!("active"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_login_wrong_password_is_unauthorized() {
    let app = common::TestApp::new().await;
    let (_, email) = app
        .create_user_with_email("manu", "password123", None)
        .await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "email": email, "password": "wrongpassword" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "email": "nobody@example.org", "password": "whatever1" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_login_blocked_user_is_forbidden_with_status() {
    let app = common::TestApp::new().await;
    let (user_id, email) = app
        .create_user_with_email("banu", "password123", None)
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{user_id}"),
            Some(json!({ "status": "blocked" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({ "email": email, "password": "password123" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["success"], json!(false));
    assert_eq!(response.body["userStatus"], json!("blocked"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_duplicate_email_conflicts() {
    let app = common::TestApp::new().await;
    let (_, email) = app
        .create_user_with_email("tara", "password123", None)
        .await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "name": "tara-again",
                "email": email,
                "password": "password123",
                "phone_number": "555-0101",
                "location": "Kochi",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}
