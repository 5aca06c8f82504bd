//! Password reset handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{ForgotPasswordRequest, ResetPasswordRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate(&req)?;
    state.password_reset_service.forgot_password(&req.email).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password reset token has been sent to your email".to_string(),
    })))
}

/// POST /auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate(&req)?;
    state
        .password_reset_service
        .reset_password(&req.token, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password successfully reset".to_string(),
    })))
}
