//! Task request and task handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use reliefhub_entity::task::{CreateTaskRequest, Task, TaskRequest, TaskRequestStatus};

use crate::dto::request::{
    AcceptTaskParams, RemarksRequest, TaskRequestBody, UpdateTaskStatusRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse, RemarksResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::state::AppState;

// ── Task requests ────────────────────────────────────────────

/// POST /api/task-requests
pub async fn create_request(
    State(state): State<AppState>,
    Json(req): Json<TaskRequestBody>,
) -> Result<(StatusCode, Json<ApiResponse<TaskRequest>>), ApiError> {
    validate(&req)?;

    let request = state
        .task_service
        .create_request(CreateTaskRequest {
            user_id: req.user_id,
            title: req.title,
            description: req.description,
            location: req.location,
            photo: req.photo,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request))))
}

/// GET /api/task-requests
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TaskRequest>>>, ApiError> {
    let requests = state.task_service.all_requests().await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// GET /api/task-requests/user/{user_id}
pub async fn requests_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<TaskRequest>>>, ApiError> {
    let requests = state.task_service.requests_by_user(user_id).await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// GET /api/task-requests/status/{status}
pub async fn requests_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<ApiResponse<Vec<TaskRequest>>>, ApiError> {
    let status = status.parse::<TaskRequestStatus>()?;
    let requests = state.task_service.requests_by_status(status).await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// POST /api/task-requests/{id}/approve
pub async fn approve_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<Task>>), ApiError> {
    let task = state.task_service.approve_request(id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(task))))
}

/// POST /api/task-requests/{id}/reject
pub async fn reject_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TaskRequest>>, ApiError> {
    let request = state.task_service.reject_request(id).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// DELETE /api/task-requests/{id}
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.task_service.delete_request(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Task request deleted successfully".to_string(),
    })))
}

// ── Tasks ────────────────────────────────────────────────────

/// GET /api/tasks/available
pub async fn available(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Task>>>, ApiError> {
    let tasks = state.task_service.available_tasks().await?;
    Ok(Json(ApiResponse::ok(tasks)))
}

/// GET /api/tasks/volunteer/{volunteer_id}
pub async fn by_volunteer(
    State(state): State<AppState>,
    Path(volunteer_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Task>>>, ApiError> {
    let tasks = state.task_service.tasks_by_volunteer(volunteer_id).await?;
    Ok(Json(ApiResponse::ok(tasks)))
}

/// POST /api/tasks/{id}/accept?volunteerId={uuid}
pub async fn accept(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<AcceptTaskParams>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let task = state
        .task_service
        .accept_task(id, params.volunteer_id)
        .await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// PUT /api/tasks/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskStatusRequest>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let task = state.task_service.update_status(id, req.status).await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// POST /api/tasks/{id}/volunteer-remarks
pub async fn add_volunteer_remarks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RemarksRequest>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    validate(&req)?;
    let task = state
        .task_service
        .add_volunteer_remarks(id, &req.remarks)
        .await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// POST /api/tasks/{id}/admin-remarks
pub async fn add_admin_remarks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RemarksRequest>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    validate(&req)?;
    let task = state
        .task_service
        .add_admin_remarks(id, &req.remarks)
        .await?;
    Ok(Json(ApiResponse::ok(task)))
}

/// GET /api/tasks/{id}/remarks
pub async fn remarks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RemarksResponse>>, ApiError> {
    let (volunteer_remarks, admin_remarks) = state.task_service.remarks(id).await?;
    Ok(Json(ApiResponse::ok(RemarksResponse {
        volunteer_remarks,
        admin_remarks,
    })))
}
