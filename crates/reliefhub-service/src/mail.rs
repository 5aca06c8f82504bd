//! Outbound email over SMTP.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use reliefhub_core::AppError;
use reliefhub_core::config::mail::MailConfig;

/// Sends transactional mail through the configured SMTP relay.
///
/// When mail is disabled (the development default) outgoing messages are
/// logged instead of delivered, so the reset flow stays exercisable
/// without an SMTP server.
#[derive(Clone)]
pub struct Mailer {
    from: Mailbox,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl Mailer {
    /// Builds a mailer from the mail configuration.
    pub fn new(config: &MailConfig) -> Result<Self, AppError> {
        let from: Mailbox = config
            .from_address
            .parse()
            .map_err(|e| AppError::configuration(format!("Invalid from address: {e}")))?;

        let transport = if config.enabled {
            let mut builder =
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                    .map_err(|e| {
                        AppError::configuration(format!("Invalid SMTP configuration: {e}"))
                    })?
                    .port(config.smtp_port);

            if let (Some(username), Some(password)) = (&config.username, &config.password) {
                builder = builder.credentials(Credentials::new(
                    username.clone(),
                    password.clone(),
                ));
            }

            Some(builder.build())
        } else {
            None
        };

        Ok(Self { from, transport })
    }

    /// Sends a password-reset token to a user.
    pub async fn send_password_reset(&self, to: &str, token: &str) -> Result<(), AppError> {
        let Some(transport) = &self.transport else {
            info!(to = %to, token = %token, "Mail disabled; logging password reset token");
            return Ok(());
        };

        let to: Mailbox = to
            .parse()
            .map_err(|e| AppError::validation(format!("Invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to.clone())
            .subject("Password Reset Request")
            .body(format!(
                "Use this token to reset your password: {token}\n\n\
                 The token is valid for a short time and can be used once.\n\
                 If you didn't request this, you can safely ignore this email."
            ))
            .map_err(|e| AppError::internal(format!("Failed to build email: {e}")))?;

        transport
            .send(message)
            .await
            .map_err(|e| AppError::internal(format!("Failed to send email: {e}")))?;

        info!(to = %to, "Password reset email sent");
        Ok(())
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("from", &self.from)
            .field("enabled", &self.transport.is_some())
            .finish()
    }
}
