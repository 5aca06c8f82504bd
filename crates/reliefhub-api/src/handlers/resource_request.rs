//! Resource request and resource handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use reliefhub_entity::resource::{CreateResource, CreateResourceRequest, Resource, ResourceRequest};
use reliefhub_service::allocation::AllocationOutcome;

use crate::dto::request::{CreateResourceBody, ReplenishRequest, ResourceRequestBody};
use crate::dto::response::{AllocationResponse, ApiResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/resource-requests/request
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<ResourceRequestBody>,
) -> Result<(StatusCode, Json<ApiResponse<ResourceRequest>>), ApiError> {
    validate(&req)?;

    let request = state
        .allocation_service
        .create_request(CreateResourceRequest {
            user_id: req.user_id,
            resource_id: req.resource_id,
            location: req.location,
            requested_quantity: req.requested_quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request))))
}

/// PUT /api/resource-requests/accept-allocate/{id}
pub async fn accept_allocate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AllocationResponse>, ApiError> {
    let response = match state.allocation_service.accept_and_allocate(id).await? {
        AllocationOutcome::Allocated(request) => AllocationResponse {
            allocated: true,
            message: "Resource request accepted and allocated".to_string(),
            request: Some(request),
        },
        AllocationOutcome::Declined { message } => AllocationResponse {
            allocated: false,
            message,
            request: None,
        },
    };

    Ok(Json(response))
}

/// PUT /api/resource-requests/reject/{id}
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ResourceRequest>>, ApiError> {
    let request = state.allocation_service.reject(id).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// GET /api/resource-requests/user/{user_id}
pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ResourceRequest>>>, ApiError> {
    let requests = state.allocation_service.requests_by_user(user_id).await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// GET /api/resource-requests/admin
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ResourceRequest>>>, ApiError> {
    let requests = state.allocation_service.all_requests().await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// PUT /api/resource-requests/replenish/{resource_id}
pub async fn replenish(
    State(state): State<AppState>,
    Path(resource_id): Path<Uuid>,
    Json(req): Json<ReplenishRequest>,
) -> Result<Json<ApiResponse<Resource>>, ApiError> {
    let resource = state
        .allocation_service
        .replenish(resource_id, req.amount)
        .await?;
    Ok(Json(ApiResponse::ok(resource)))
}

/// GET /api/resource-requests/resources
pub async fn list_resources(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Resource>>>, ApiError> {
    let resources = state.allocation_service.resources().await?;
    Ok(Json(ApiResponse::ok(resources)))
}

/// POST /api/resource-requests/resources
pub async fn add_resource(
    State(state): State<AppState>,
    Json(req): Json<CreateResourceBody>,
) -> Result<(StatusCode, Json<ApiResponse<Resource>>), ApiError> {
    validate(&req)?;

    let resource = state
        .allocation_service
        .add_resource(CreateResource {
            name: req.name,
            resource_type: req.resource_type,
            available_quantity: req.available_quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(resource))))
}

/// DELETE /api/resource-requests/resources/{id}
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.allocation_service.delete_resource(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Resource deleted successfully".to_string(),
    })))
}
