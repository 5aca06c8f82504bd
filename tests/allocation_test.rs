//! Integration tests for the resource allocation flow.
//!
//! These tests need a running PostgreSQL instance (see config/test.toml)
//! and are ignored by default.

mod common;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_allocate_exact_stock_then_decline_next_request() {
    let app = common::TestApp::new().await;
    let user_id = app.create_user("ravi", "password123", None).await;
    let resource_id = app.create_resource("Water cans", 5).await;

    // First request takes the entire stock.
    let response = app
        .request(
            "POST",
            "/api/resource-requests/request",
            Some(json!({
                "user_id": user_id,
                "resource_id": resource_id,
                "location": "Ward 12",
                "requested_quantity": 5,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let first_request = common::parse_id(&response.body["data"]["id"]);

    let response = app
        .request(
            "PUT",
            &format!("/api/resource-requests/accept-allocate/{first_request}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["allocated"], json!(true));
    assert_eq!(response.body["request"]["status"], json!("ALLOCATED"));
    assert_eq!(app.resource_quantity(resource_id).await, 0);

    // A second request for one more unit is declined with no mutation.
    let response = app
        .request(
            "POST",
            "/api/resource-requests/request",
            Some(json!({
                "user_id": user_id,
                "resource_id": resource_id,
                "location": "Ward 12",
                "requested_quantity": 1,
            })),
        )
        .await;
    let second_request = common::parse_id(&response.body["data"]["id"]);

    let response = app
        .request(
            "PUT",
            &format!("/api/resource-requests/accept-allocate/{second_request}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["allocated"], json!(false));
    assert_eq!(app.resource_quantity(resource_id).await, 0);

    // The declined request is still pending.
    let response = app
        .request(
            "GET",
            &format!("/api/resource-requests/user/{user_id}"),
            None,
        )
        .await;
    let requests = response.body["data"].as_array().expect("array").clone();
    let declined = requests
        .iter()
        .find(|r| common::parse_id(&r["id"]) == second_request)
        .expect("request present");
    assert_eq!(declined["status"], json!("PENDING"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_quantity_conservation_across_replenish_and_allocate() {
    let app = common::TestApp::new().await;
    let user_id = app.create_user("meena", "password123", None).await;
    let resource_id = app.create_resource("Blankets", 10).await;

    // Replenish +7, allocate 4: 10 + 7 - 4 = 13.
    let response = app
        .request(
            "PUT",
            &format!("/api/resource-requests/replenish/{resource_id}"),
            Some(json!({ "amount": 7 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/resource-requests/request",
            Some(json!({
                "user_id": user_id,
                "resource_id": resource_id,
                "location": "Shelter 3",
                "requested_quantity": 4,
            })),
        )
        .await;
    let request_id = common::parse_id(&response.body["data"]["id"]);

    let response = app
        .request(
            "PUT",
            &format!("/api/resource-requests/accept-allocate/{request_id}"),
            None,
        )
        .await;
    assert_eq!(response.body["allocated"], json!(true));

    assert_eq!(app.resource_quantity(resource_id).await, 13);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_reject_has_no_quantity_side_effect() {
    let app = common::TestApp::new().await;
    let user_id = app.create_user("arjun", "password123", None).await;
    let resource_id = app.create_resource("Tents", 3).await;

    let response = app
        .request(
            "POST",
            "/api/resource-requests/request",
            Some(json!({
                "user_id": user_id,
                "resource_id": resource_id,
                "location": "Camp A",
                "requested_quantity": 2,
            })),
        )
        .await;
    let request_id = common::parse_id(&response.body["data"]["id"]);

    let response = app
        .request(
            "PUT",
            &format!("/api/resource-requests/reject/{request_id}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], json!("REJECTED"));
    assert_eq!(app.resource_quantity(resource_id).await, 3);

    // A decided request cannot be re-opened.
    let response = app
        .request(
            "PUT",
            &format!("/api/resource-requests/accept-allocate/{request_id}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_request_for_unknown_user_or_resource() {
    let app = common::TestApp::new().await;
    let user_id = app.create_user("nila", "password123", None).await;
    let resource_id = app.create_resource("Ropes", 5).await;

    let response = app
        .request(
            "POST",
            "/api/resource-requests/request",
            Some(json!({
                "user_id": uuid::Uuid::new_v4(),
                "resource_id": resource_id,
                "location": "Dock",
                "requested_quantity": 1,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            "/api/resource-requests/request",
            Some(json!({
                "user_id": user_id,
                "resource_id": uuid::Uuid::new_v4(),
                "location": "Dock",
                "requested_quantity": 1,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
