//! Password reset — token issue and redemption.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use reliefhub_auth::password::hasher::PasswordHasher;
use reliefhub_auth::password::validator::PasswordValidator;
use reliefhub_auth::reset::ResetTokenGenerator;
use reliefhub_core::AppError;
use reliefhub_database::repositories::password_reset::PasswordResetTokenRepository;
use reliefhub_database::repositories::user::UserRepository;

use crate::mail::Mailer;

/// Handles forgot-password and reset-password flows.
#[derive(Debug, Clone)]
pub struct PasswordResetService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Reset-token repository.
    token_repo: Arc<PasswordResetTokenRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Token generator.
    generator: ResetTokenGenerator,
    /// Outbound mailer.
    mailer: Arc<Mailer>,
}

impl PasswordResetService {
    /// Creates a new password reset service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        token_repo: Arc<PasswordResetTokenRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        generator: ResetTokenGenerator,
        mailer: Arc<Mailer>,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            hasher,
            validator,
            generator,
            mailer,
        }
    }

    /// Issues a reset token for the account behind `email` and mails it.
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let (token, expiry) = self.generator.generate();
        self.token_repo.create(&token, user.id, expiry).await?;

        self.mailer.send_password_reset(&user.email, &token).await?;

        info!(user_id = %user.id, "Password reset token issued");
        Ok(())
    }

    /// Redeems a reset token, setting a new password.
    ///
    /// Expired tokens are deleted when presented; every token is
    /// single-use and consumed on success.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AppError> {
        let reset_token = self
            .token_repo
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Invalid token"))?;

        if reset_token.is_expired(Utc::now()) {
            self.token_repo.delete(token).await?;
            return Err(AppError::validation("Token expired"));
        }

        self.validator.validate(new_password)?;
        let password_hash = self.hasher.hash_password(new_password)?;

        self.user_repo
            .update_password(reset_token.user_id, &password_hash)
            .await?;

        self.token_repo.delete(token).await?;

        info!(user_id = %reset_token.user_id, "Password reset completed");
        Ok(())
    }
}
