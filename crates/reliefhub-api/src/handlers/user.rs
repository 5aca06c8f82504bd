//! User handlers — CRUD and login.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use reliefhub_entity::user::User;
use reliefhub_entity::user::model::UpdateUser;
use reliefhub_service::account::{LoginOutcome, Registration};

use crate::dto::request::{LoginRequest, RegisterUserRequest, UpdateUserRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.account_service.all_users().await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.account_service.user(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    validate(&req)?;

    let user = state
        .account_service
        .register(Registration {
            name: req.name,
            email: req.email,
            password: req.password,
            phone_number: req.phone_number,
            location: req.location,
            role: req.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state
        .account_service
        .update_user(UpdateUser {
            id,
            name: req.name,
            phone_number: req.phone_number,
            location: req.location,
            status: req.status,
        })
        .await?;

    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.account_service.delete_user(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted successfully".to_string(),
    })))
}

/// POST /api/login
///
/// Valid credentials on an active account answer 200; a blocked account
/// answers 403 with its status; bad credentials answer 401 through the
/// error mapping.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    validate(&req)?;

    match state
        .account_service
        .login(&req.email, &req.password)
        .await?
    {
        LoginOutcome::Success(user) => Ok(Json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            userid: Some(user.id),
            role: Some(user.role.to_string()),
            name: Some(user.name),
            user_status: Some(user.status.to_string()),
        })
        .into_response()),
        LoginOutcome::Blocked(user) => Ok((
            StatusCode::FORBIDDEN,
            Json(LoginResponse {
                success: false,
                message: "This user is blocked. Please contact support.".to_string(),
                userid: None,
                role: None,
                name: None,
                user_status: Some(user.status.to_string()),
            }),
        )
            .into_response()),
    }
}
