//! Notification handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use reliefhub_entity::notification::{CreateNotification, Notification, UpdateNotification};

use crate::dto::request::NotificationBody;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/notifications
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NotificationBody>,
) -> Result<(StatusCode, Json<ApiResponse<Notification>>), ApiError> {
    validate(&req)?;

    let notification = state
        .notification_service
        .create(CreateNotification {
            title: req.title,
            message: req.message,
            notification_type: req.notification_type,
            target_role: req.target_role,
            scheduled_for: req.scheduled_for,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(notification))))
}

/// GET /api/notifications/user/{role}
pub async fn for_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Result<Json<ApiResponse<Vec<Notification>>>, ApiError> {
    let notifications = state.notification_service.for_role(&role).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// PUT /api/notifications/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NotificationBody>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    validate(&req)?;

    let notification = state
        .notification_service
        .update(
            id,
            UpdateNotification {
                title: req.title,
                message: req.message,
                notification_type: req.notification_type,
                target_role: req.target_role,
                scheduled_for: req.scheduled_for,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(notification)))
}

/// DELETE /api/notifications/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.notification_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Notification deleted successfully".to_string(),
    })))
}
