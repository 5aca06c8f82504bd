//! Disaster handlers — admin CRUD plus type/severity/status filters.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use reliefhub_entity::disaster::{
    CreateDisaster, Disaster, DisasterStatus, DisasterType, Severity, UpdateDisaster,
};

use crate::dto::request::DisasterRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/disasters
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<DisasterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Disaster>>), ApiError> {
    validate(&req)?;

    let disaster = state
        .disaster_service
        .create(CreateDisaster {
            name: req.name,
            description: req.description,
            location: req.location,
            disaster_type: req.disaster_type.parse::<DisasterType>()?,
            severity: req.severity.parse::<Severity>()?,
            status: req.status.parse::<DisasterStatus>()?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(disaster))))
}

/// GET /api/disasters
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Disaster>>>, ApiError> {
    let disasters = state.disaster_service.all().await?;
    Ok(Json(ApiResponse::ok(disasters)))
}

/// GET /api/disasters/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Disaster>>, ApiError> {
    let disaster = state.disaster_service.get(id).await?;
    Ok(Json(ApiResponse::ok(disaster)))
}

/// PUT /api/disasters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DisasterRequest>,
) -> Result<Json<ApiResponse<Disaster>>, ApiError> {
    validate(&req)?;

    let disaster = state
        .disaster_service
        .update(
            id,
            UpdateDisaster {
                name: req.name,
                description: req.description,
                location: req.location,
                disaster_type: req.disaster_type.parse::<DisasterType>()?,
                severity: req.severity.parse::<Severity>()?,
                status: req.status.parse::<DisasterStatus>()?,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(disaster)))
}

/// DELETE /api/disasters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.disaster_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Disaster deleted successfully".to_string(),
    })))
}

/// GET /api/disasters/type/{disaster_type}
pub async fn by_type(
    State(state): State<AppState>,
    Path(disaster_type): Path<String>,
) -> Result<Json<ApiResponse<Vec<Disaster>>>, ApiError> {
    let disasters = state
        .disaster_service
        .by_type(disaster_type.parse::<DisasterType>()?)
        .await?;
    Ok(Json(ApiResponse::ok(disasters)))
}

/// GET /api/disasters/severity/{severity}
pub async fn by_severity(
    State(state): State<AppState>,
    Path(severity): Path<String>,
) -> Result<Json<ApiResponse<Vec<Disaster>>>, ApiError> {
    let disasters = state
        .disaster_service
        .by_severity(severity.parse::<Severity>()?)
        .await?;
    Ok(Json(ApiResponse::ok(disasters)))
}

/// GET /api/disasters/status/{status}
pub async fn by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<ApiResponse<Vec<Disaster>>>, ApiError> {
    let disasters = state
        .disaster_service
        .by_status(status.parse::<DisasterStatus>()?)
        .await?;
    Ok(Json(ApiResponse::ok(disasters)))
}
