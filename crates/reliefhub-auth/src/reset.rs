//! Password-reset token generation.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use reliefhub_core::config::auth::AuthConfig;

/// Generates opaque single-use reset tokens with a configured lifetime.
#[derive(Debug, Clone)]
pub struct ResetTokenGenerator {
    ttl_minutes: i64,
}

impl ResetTokenGenerator {
    /// Creates a generator from the auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            ttl_minutes: config.reset_token_ttl_minutes,
        }
    }

    /// Produce a fresh token string and its expiry time.
    pub fn generate(&self) -> (String, DateTime<Utc>) {
        let token = Uuid::new_v4().to_string();
        let expiry = Utc::now() + Duration::minutes(self.ttl_minutes);
        (token, expiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_and_expire_in_the_future() {
        let generator = ResetTokenGenerator::new(&AuthConfig::default());
        let (a, expiry_a) = generator.generate();
        let (b, _) = generator.generate();

        assert_ne!(a, b);
        assert!(expiry_a > Utc::now());
        assert!(expiry_a <= Utc::now() + Duration::minutes(15));
    }
}
