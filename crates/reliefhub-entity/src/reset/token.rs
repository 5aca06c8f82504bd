//! Password-reset token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single-use password-reset token. Consumed on redemption; stale
/// tokens are deleted when presented after expiry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PasswordResetToken {
    /// The opaque token string handed to the user.
    pub token: String,
    /// The account the token resets.
    pub user_id: Uuid,
    /// When the token stops being redeemable.
    pub expiry_date: DateTime<Utc>,
}

impl PasswordResetToken {
    /// Whether the token has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry() {
        let token = PasswordResetToken {
            token: "t".to_string(),
            user_id: Uuid::new_v4(),
            expiry_date: Utc::now() + Duration::minutes(15),
        };
        assert!(!token.is_expired(Utc::now()));
        assert!(token.is_expired(Utc::now() + Duration::minutes(16)));
    }
}
