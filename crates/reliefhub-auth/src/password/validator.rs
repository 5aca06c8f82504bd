//! Password policy validation.

use reliefhub_core::AppError;
use reliefhub_core::config::auth::AuthConfig;

/// Enforces the configured password policy on new passwords.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a validator from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.min_password_length,
        }
    }

    /// Validates a candidate password against the policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.trim().is_empty() {
            return Err(AppError::validation("Password cannot be empty"));
        }
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_rejects_short_passwords() {
        assert!(validator().validate("short").is_err());
        assert!(validator().validate("").is_err());
    }

    #[test]
    fn test_accepts_policy_conforming_passwords() {
        assert!(validator().validate("long enough password").is_ok());
    }
}
