//! Volunteer application handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use reliefhub_entity::volunteer::{
    ApplicationSummary, CreateVolunteerApplication, VolunteerApplication,
};

use crate::dto::request::{UpdateApplicationRequest, VolunteerApplicationBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /volunteer-applications
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ApplicationSummary>>>, ApiError> {
    let applications = state.volunteer_service.all_applications().await?;
    Ok(Json(ApiResponse::ok(applications)))
}

/// GET /volunteer-applications/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ApplicationSummary>>, ApiError> {
    let application = state.volunteer_service.application(id).await?;
    Ok(Json(ApiResponse::ok(application)))
}

/// POST /volunteer-applications
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<VolunteerApplicationBody>,
) -> Result<(StatusCode, Json<ApiResponse<VolunteerApplication>>), ApiError> {
    validate(&req)?;

    let application = state
        .volunteer_service
        .create(CreateVolunteerApplication {
            user_id: req.user_id,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(application))))
}

/// PUT /volunteer-applications/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateApplicationRequest>,
) -> Result<Json<ApiResponse<VolunteerApplication>>, ApiError> {
    validate(&req)?;
    let application = state.volunteer_service.update(id, &req.description).await?;
    Ok(Json(ApiResponse::ok(application)))
}

/// DELETE /volunteer-applications/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.volunteer_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Volunteer application deleted successfully".to_string(),
    })))
}

/// PUT /volunteer-applications/{id}/accept
pub async fn accept(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VolunteerApplication>>, ApiError> {
    let application = state.volunteer_service.approve(id).await?;
    Ok(Json(ApiResponse::ok(application)))
}

/// PUT /volunteer-applications/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<VolunteerApplication>>, ApiError> {
    let application = state.volunteer_service.reject(id).await?;
    Ok(Json(ApiResponse::ok(application)))
}
