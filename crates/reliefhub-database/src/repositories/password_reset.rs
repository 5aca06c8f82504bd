//! Password-reset token repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_entity::reset::PasswordResetToken;

/// Repository for single-use password-reset tokens.
#[derive(Debug, Clone)]
pub struct PasswordResetTokenRepository {
    pool: PgPool,
}

impl PasswordResetTokenRepository {
    /// Create a new password-reset token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a freshly generated token.
    pub async fn create(
        &self,
        token: &str,
        user_id: Uuid,
        expiry_date: DateTime<Utc>,
    ) -> AppResult<PasswordResetToken> {
        sqlx::query_as::<_, PasswordResetToken>(
            "INSERT INTO password_reset_tokens (token, user_id, expiry_date) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(token)
        .bind(user_id)
        .bind(expiry_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store reset token", e))
    }

    /// Look up a token by its string.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<PasswordResetToken>> {
        sqlx::query_as::<_, PasswordResetToken>(
            "SELECT * FROM password_reset_tokens WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find reset token", e))
    }

    /// Delete a token (after redemption or on expiry).
    pub async fn delete(&self, token: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM password_reset_tokens WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reset token", e)
            })?;
        Ok(())
    }
}
