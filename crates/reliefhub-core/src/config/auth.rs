//! Password policy and reset-token configuration.

use serde::{Deserialize, Serialize};

/// Authentication-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Minimum accepted password length.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    /// Lifetime of a password-reset token in minutes.
    #[serde(default = "default_reset_token_ttl")]
    pub reset_token_ttl_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: default_min_password_length(),
            reset_token_ttl_minutes: default_reset_token_ttl(),
        }
    }
}

fn default_min_password_length() -> usize {
    8
}

fn default_reset_token_ttl() -> i64 {
    15
}
