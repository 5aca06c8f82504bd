//! Route definitions for the ReliefHub HTTP API.
//!
//! Routes are organized by domain. Most are mounted under `/api`; the
//! volunteer-application and auth scopes keep their historical unprefixed
//! paths for client compatibility.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(disaster_routes())
        .merge(resource_request_routes())
        .merge(task_routes())
        .merge(user_routes())
        .merge(notification_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .merge(volunteer_application_routes())
        .merge(auth_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Disaster CRUD and filters.
fn disaster_routes() -> Router<AppState> {
    Router::new()
        .route("/disasters", post(handlers::disaster::create))
        .route("/disasters", get(handlers::disaster::list))
        .route("/disasters/{id}", get(handlers::disaster::get))
        .route("/disasters/{id}", put(handlers::disaster::update))
        .route("/disasters/{id}", delete(handlers::disaster::delete))
        .route("/disasters/type/{t}", get(handlers::disaster::by_type))
        .route(
            "/disasters/severity/{s}",
            get(handlers::disaster::by_severity),
        )
        .route("/disasters/status/{s}", get(handlers::disaster::by_status))
}

/// Resource requests, allocation, and resource CRUD.
fn resource_request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/resource-requests/request",
            post(handlers::resource_request::create),
        )
        .route(
            "/resource-requests/accept-allocate/{id}",
            put(handlers::resource_request::accept_allocate),
        )
        .route(
            "/resource-requests/reject/{id}",
            put(handlers::resource_request::reject),
        )
        .route(
            "/resource-requests/user/{user_id}",
            get(handlers::resource_request::by_user),
        )
        .route(
            "/resource-requests/admin",
            get(handlers::resource_request::list_all),
        )
        .route(
            "/resource-requests/replenish/{resource_id}",
            put(handlers::resource_request::replenish),
        )
        .route(
            "/resource-requests/resources",
            get(handlers::resource_request::list_resources),
        )
        .route(
            "/resource-requests/resources",
            post(handlers::resource_request::add_resource),
        )
        .route(
            "/resource-requests/resources/{id}",
            delete(handlers::resource_request::delete_resource),
        )
}

/// Task requests and tasks.
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/task-requests", post(handlers::task::create_request))
        .route("/task-requests", get(handlers::task::list_requests))
        .route(
            "/task-requests/user/{user_id}",
            get(handlers::task::requests_by_user),
        )
        .route(
            "/task-requests/status/{status}",
            get(handlers::task::requests_by_status),
        )
        .route(
            "/task-requests/{id}/approve",
            post(handlers::task::approve_request),
        )
        .route(
            "/task-requests/{id}/reject",
            post(handlers::task::reject_request),
        )
        .route("/task-requests/{id}", delete(handlers::task::delete_request))
        .route("/tasks/available", get(handlers::task::available))
        .route(
            "/tasks/volunteer/{volunteer_id}",
            get(handlers::task::by_volunteer),
        )
        .route("/tasks/{id}/accept", post(handlers::task::accept))
        .route("/tasks/{id}/status", put(handlers::task::update_status))
        .route(
            "/tasks/{id}/volunteer-remarks",
            post(handlers::task::add_volunteer_remarks),
        )
        .route(
            "/tasks/{id}/admin-remarks",
            post(handlers::task::add_admin_remarks),
        )
        .route("/tasks/{id}/remarks", get(handlers::task::remarks))
}

/// User CRUD and login.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list))
        .route("/users", post(handlers::user::register))
        .route("/users/{id}", get(handlers::user::get))
        .route("/users/{id}", put(handlers::user::update))
        .route("/users/{id}", delete(handlers::user::delete))
        .route("/login", post(handlers::user::login))
}

/// Role-targeted notifications.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", post(handlers::notification::create))
        .route(
            "/notifications/user/{role}",
            get(handlers::notification::for_role),
        )
        .route("/notifications/{id}", put(handlers::notification::update))
        .route(
            "/notifications/{id}",
            delete(handlers::notification::delete),
        )
}

/// Volunteer applications (unprefixed, historical paths).
fn volunteer_application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/volunteer-applications",
            get(handlers::volunteer_application::list),
        )
        .route(
            "/volunteer-applications",
            post(handlers::volunteer_application::create),
        )
        .route(
            "/volunteer-applications/{id}",
            get(handlers::volunteer_application::get),
        )
        .route(
            "/volunteer-applications/{id}",
            put(handlers::volunteer_application::update),
        )
        .route(
            "/volunteer-applications/{id}",
            delete(handlers::volunteer_application::delete),
        )
        .route(
            "/volunteer-applications/{id}/accept",
            put(handlers::volunteer_application::accept),
        )
        .route(
            "/volunteer-applications/{id}/reject",
            put(handlers::volunteer_application::reject),
        )
}

/// Password reset endpoints.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/auth/forgot-password",
            post(handlers::password_reset::forgot_password),
        )
        .route(
            "/auth/reset-password",
            post(handlers::password_reset::reset_password),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> tower_http::cors::CorsLayer {
    use http::Method;
    use tower_http::cors::{Any, CorsLayer};

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
