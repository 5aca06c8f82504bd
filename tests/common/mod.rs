//! Shared helpers for the Postgres-backed integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Database pool for direct assertions.
    pub db_pool: PgPool,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// JSON body (null for empty bodies).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application against the test database.
    ///
    /// Reads `config/default.toml` + `config/test.toml`; the database URL
    /// can be overridden with `RELIEFHUB_TEST_DATABASE_URL`.
    pub async fn new() -> Self {
        let mut config =
            reliefhub_core::config::AppConfig::load("test").expect("Failed to load test config");

        if let Ok(url) = std::env::var("RELIEFHUB_TEST_DATABASE_URL") {
            config.database.url = url;
        }

        let db_pool = reliefhub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        reliefhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = reliefhub_api::app::build_state(config, db_pool.clone())
            .expect("Failed to build app state");
        let router = reliefhub_api::router::build_router(state);

        Self { router, db_pool }
    }

    /// Issue a request against the in-process router.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        let request = match body {
            Some(body) => {
                builder = builder.header("content-type", "application/json");
                builder
                    .body(Body::from(body.to_string()))
                    .expect("Failed to build request")
            }
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response was not JSON")
        };

        TestResponse { status, body }
    }

    /// Register a user and return its ID. The email is made unique so
    /// tests can share a database.
    pub async fn create_user(&self, name: &str, password: &str, role: Option<&str>) -> Uuid {
        let email = format!("{}-{}@example.org", name, Uuid::new_v4());
        let mut body = json!({
            "name": name,
            "email": email,
            "password": password,
            "phone_number": "555-0100",
            "location": "Kochi",
        });
        if let Some(role) = role {
            body["role"] = json!(role);
        }

        let response = self.request("POST", "/api/users", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        parse_id(&response.body["data"]["id"])
    }

    /// Register a user and return (id, email).
    pub async fn create_user_with_email(
        &self,
        name: &str,
        password: &str,
        role: Option<&str>,
    ) -> (Uuid, String) {
        let email = format!("{}-{}@example.org", name, Uuid::new_v4());
        let mut body = json!({
            "name": name,
            "email": email,
            "password": password,
            "phone_number": "555-0100",
            "location": "Kochi",
        });
        if let Some(role) = role {
            body["role"] = json!(role);
        }

        let response = self.request("POST", "/api/users", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        (parse_id(&response.body["data"]["id"]), email)
    }

    /// Register a resource and return its ID.
    pub async fn create_resource(&self, name: &str, quantity: i32) -> Uuid {
        let response = self
            .request(
                "POST",
                "/api/resource-requests/resources",
                Some(json!({
                    "name": name,
                    "resource_type": "equipment",
                    "available_quantity": quantity,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        parse_id(&response.body["data"]["id"])
    }

    /// Read a resource's current stock straight from the database.
    pub async fn resource_quantity(&self, id: Uuid) -> i32 {
        sqlx::query_scalar("SELECT available_quantity FROM resources WHERE id = $1")
            .bind(id)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to read resource quantity")
    }

    /// Read a user's role straight from the database.
    pub async fn user_role(&self, id: Uuid) -> String {
        sqlx::query_scalar("SELECT role::TEXT FROM users WHERE id = $1")
            .bind(id)
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to read user role")
    }
}

/// Parse a UUID out of a JSON value.
pub fn parse_id(value: &Value) -> Uuid {
    value
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(|| panic!("Expected a UUID, got {value:?}"))
}
