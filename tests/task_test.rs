//! Integration tests for the task lifecycle.
//!
//! These tests need a running PostgreSQL instance (see config/test.toml)
//! and are ignored by default.

mod common;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

async fn file_task_request(app: &common::TestApp, user_id: Uuid) -> Uuid {
    let response = app
        .request(
            "POST",
            "/api/task-requests",
            Some(json!({
                "user_id": user_id,
                "title": "Clear debris",
                "description": "Fallen tree blocking the relief route",
                "location": "MG Road",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    common::parse_id(&response.body["data"]["id"])
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_approving_a_request_creates_exactly_one_task() {
    let app = common::TestApp::new().await;
    let user_id = app.create_user("devi", "password123", None).await;
    let request_id = file_task_request(&app, user_id).await;

    let response = app
        .request(
            "POST",
            &format!("/api/task-requests/{request_id}/approve"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["status"], json!("PENDING"));
    assert_eq!(
        common::parse_id(&response.body["data"]["task_request_id"]),
        request_id
    );
    assert!(response.body["data"]["deadline"].is_string());

    // A second decision on the same request is rejected.
    let response = app
        .request(
            "POST",
            &format!("/api/task-requests/{request_id}/approve"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request(
            "POST",
            &format!("/api/task-requests/{request_id}/reject"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_task_acceptance_guards() {
    let app = common::TestApp::new().await;
    let requester = app.create_user("sita", "password123", None).await;
    let volunteer = app.create_user("hari", "password123", Some("volunteer")).await;
    let citizen = app.create_user("anu", "password123", None).await;

    let request_id = file_task_request(&app, requester).await;
    let response = app
        .request(
            "POST",
            &format!("/api/task-requests/{request_id}/approve"),
            None,
        )
        .await;
    let task_id = common::parse_id(&response.body["data"]["id"]);

    // A citizen may not accept tasks.
    let response = app
        .request(
            "POST",
            &format!("/api/tasks/{task_id}/accept?volunteerId={citizen}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // A volunteer may.
    let response = app
        .request(
            "POST",
            &format!("/api/tasks/{task_id}/accept?volunteerId={volunteer}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], json!("IN_PROGRESS"));

    // The task is now assigned; a second accept conflicts.
    let other = app.create_user("lata", "password123", Some("volunteer")).await;
    let response = app
        .request(
            "POST",
            &format!("/api/tasks/{task_id}/accept?volunteerId={other}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // And it no longer shows as available.
    let response = app.request("GET", "/api/tasks/available", None).await;
    let available = response.body["data"].as_array().expect("array").clone();
    assert!(
        available
            .iter()
            .all(|t| common::parse_id(&t["id"]) != task_id)
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_remarks_accumulate_in_order() {
    let app = common::TestApp::new().await;
    let requester = app.create_user("gopi", "password123", None).await;
    let volunteer = app.create_user("venu", "password123", Some("volunteer")).await;

    let request_id = file_task_request(&app, requester).await;
    let response = app
        .request(
            "POST",
            &format!("/api/task-requests/{request_id}/approve"),
            None,
        )
        .await;
    let task_id = common::parse_id(&response.body["data"]["id"]);

    // Volunteer remarks require an assignee.
    let response = app
        .request(
            "POST",
            &format!("/api/tasks/{task_id}/volunteer-remarks"),
            Some(json!({ "remarks": "Reached the site" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    app.request(
        "POST",
        &format!("/api/tasks/{task_id}/accept?volunteerId={volunteer}"),
        None,
    )
    .await;

    for remark in ["Reached the site", "Debris cleared"] {
        let response = app
            .request(
                "POST",
                &format!("/api/tasks/{task_id}/volunteer-remarks"),
                Some(json!({ "remarks": remark })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request("GET", &format!("/api/tasks/{task_id}/remarks"), None)
        .await;
    let log = response.body["data"]["volunteer_remarks"]
        .as_str()
        .expect("log")
        .to_string();

    let first = log.find("Reached the site").expect("first entry");
    let second = log.find("Debris cleared").expect("second entry");
    assert!(first < second, "entries out of order: {log}");
    assert_eq!(log.lines().count(), 2);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_status_updates_are_unrestricted() {
    let app = common::TestApp::new().await;
    let requester = app.create_user("babu", "password123", None).await;

    let request_id = file_task_request(&app, requester).await;
    let response = app
        .request(
            "POST",
            &format!("/api/task-requests/{request_id}/approve"),
            None,
        )
        .await;
    let task_id = common::parse_id(&response.body["data"]["id"]);

    // Any status can follow any other, including COMPLETED back to PENDING.
    for status in ["COMPLETED", "PENDING", "CANCELLED"] {
        let response = app
            .request(
                "PUT",
                &format!("/api/tasks/{task_id}/status"),
                Some(json!({ "status": status })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["data"]["status"], json!(status));
    }
}
