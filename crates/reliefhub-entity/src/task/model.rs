//! Task entity model and the acceptance guard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use reliefhub_core::AppError;

use crate::user::User;

/// Number of days a volunteer has to complete a newly created task.
pub const TASK_DEADLINE_DAYS: i64 = 7;

/// Placeholder photo path assigned to tasks created from an approved
/// request before any photo is uploaded.
pub const DEFAULT_TASK_PHOTO: &str = "default_path.jpg";

/// Status of a task.
///
/// Only the volunteer-accept transition (pending → in_progress) is
/// guarded; status updates are otherwise free-form, matching the admin
/// tooling this API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TaskStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(AppError::validation(format!(
                "Invalid task status: '{s}'. Expected one of: pending, in_progress, completed, cancelled"
            ))),
        }
    }
}

/// A concrete task derived 1:1 from an approved task request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// The originating task request (unique per task).
    pub task_request_id: Uuid,
    /// The volunteer assigned to the task, if any.
    pub volunteer_id: Option<Uuid>,
    /// Path to the task photo.
    pub photo: String,
    /// Current task status.
    pub status: TaskStatus,
    /// Append-only log of volunteer remarks.
    pub volunteer_remarks: Option<String>,
    /// Append-only log of admin remarks.
    pub admin_remarks: Option<String>,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// Completion deadline.
    pub deadline: Option<DateTime<Utc>>,
}

impl Task {
    /// Validate that `user` may accept this task.
    ///
    /// A task can be accepted iff it is pending, unassigned, and the
    /// acting user holds the volunteer role. The repository re-checks the
    /// first two conditions in its guarded update; this method produces
    /// the precise error for callers.
    pub fn check_acceptance(&self, user: &User) -> Result<(), AppError> {
        if self.volunteer_id.is_some() {
            return Err(AppError::conflict(
                "Task is already assigned to another volunteer",
            ));
        }
        if self.status != TaskStatus::Pending {
            return Err(AppError::conflict(format!(
                "Task is not in a state that can be accepted. Current status: {}",
                self.status
            )));
        }
        if !user.is_volunteer() {
            return Err(AppError::forbidden(format!(
                "User is not authorized to accept tasks. Current role: {}",
                user.role
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{UserRole, UserStatus};

    fn task(status: TaskStatus, volunteer_id: Option<Uuid>) -> Task {
        Task {
            id: Uuid::new_v4(),
            task_request_id: Uuid::new_v4(),
            volunteer_id,
            photo: DEFAULT_TASK_PHOTO.to_string(),
            status,
            volunteer_remarks: None,
            admin_remarks: None,
            created_at: Utc::now(),
            deadline: Some(Utc::now() + chrono::Duration::days(TASK_DEADLINE_DAYS)),
        }
    }

    fn user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: "asha@example.org".to_string(),
            password_hash: "x".to_string(),
            phone_number: "555-0100".to_string(),
            role,
            status: UserStatus::Active,
            location: "Kochi".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_volunteer_can_accept_pending_unassigned() {
        let task = task(TaskStatus::Pending, None);
        assert!(task.check_acceptance(&user(UserRole::Volunteer)).is_ok());
    }

    #[test]
    fn test_assigned_task_conflicts() {
        let task = task(TaskStatus::Pending, Some(Uuid::new_v4()));
        let err = task
            .check_acceptance(&user(UserRole::Volunteer))
            .unwrap_err();
        assert_eq!(err.kind, reliefhub_core::ErrorKind::Conflict);
    }

    #[test]
    fn test_non_pending_task_conflicts() {
        let task = task(TaskStatus::InProgress, None);
        let err = task
            .check_acceptance(&user(UserRole::Volunteer))
            .unwrap_err();
        assert_eq!(err.kind, reliefhub_core::ErrorKind::Conflict);
    }

    #[test]
    fn test_non_volunteer_is_forbidden() {
        let task = task(TaskStatus::Pending, None);
        let err = task.check_acceptance(&user(UserRole::Citizen)).unwrap_err();
        assert_eq!(err.kind, reliefhub_core::ErrorKind::Forbidden);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            "in_progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(TaskStatus::InProgress.to_string(), "in_progress");
        assert!("done".parse::<TaskStatus>().is_err());
    }
}
