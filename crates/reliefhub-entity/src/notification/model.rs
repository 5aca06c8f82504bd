//! Notification entity model.
//!
//! Notifications are role-targeted announcements created by admins: each
//! one names a target role (or `"All"`) and a scheduled time, and is
//! visible to matching users once that time has passed. Deletion is a
//! soft delete via the `active` flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Target-role wildcard matching every user.
pub const TARGET_ROLE_ALL: &str = "All";

/// A role-targeted, scheduled announcement.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Title line.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Free-text category (e.g. "alert", "update").
    pub notification_type: String,
    /// Role the notification targets, or `"All"`.
    pub target_role: String,
    /// When the notification becomes visible.
    pub scheduled_for: DateTime<Utc>,
    /// Soft-delete flag; inactive notifications are never served.
    pub active: bool,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Whether this notification targets the given role.
    pub fn targets_role(&self, role: &str) -> bool {
        self.target_role == TARGET_ROLE_ALL || self.target_role.eq_ignore_ascii_case(role)
    }
}

/// Data required to create a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// Title line.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Free-text category.
    pub notification_type: String,
    /// Role the notification targets, or `"All"`.
    pub target_role: String,
    /// When the notification becomes visible.
    pub scheduled_for: DateTime<Utc>,
}

/// Data for updating an existing notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNotification {
    /// Title line.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Free-text category.
    pub notification_type: String,
    /// Role the notification targets, or `"All"`.
    pub target_role: String,
    /// When the notification becomes visible.
    pub scheduled_for: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(target_role: &str) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            title: "Cyclone warning".to_string(),
            message: "Evacuate coastal areas".to_string(),
            notification_type: "alert".to_string(),
            target_role: target_role.to_string(),
            scheduled_for: Utc::now(),
            active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_targets_role() {
        assert!(notification("All").targets_role("volunteer"));
        assert!(notification("volunteer").targets_role("Volunteer"));
        assert!(!notification("admin").targets_role("volunteer"));
    }
}
