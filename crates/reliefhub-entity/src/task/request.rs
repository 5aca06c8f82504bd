//! Task request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Status of a task request. A request is decided at most once; approval
/// derives exactly one task from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_request_status", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl TaskRequestStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TaskRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskRequestStatus {
    type Err = reliefhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(reliefhub_core::AppError::validation(format!(
                "Invalid task request status: '{s}'. Expected one of: pending, approved, rejected"
            ))),
        }
    }
}

/// A user's request for volunteer help with a task.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The user who filed the request.
    pub user_id: Uuid,
    /// Title of the requested task.
    pub title: String,
    /// Description of the work needed.
    pub description: String,
    /// Where the task is to be carried out.
    pub location: String,
    /// Optional photo path.
    pub photo: Option<String>,
    /// Current decision status.
    pub status: TaskRequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to file a new task request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    /// The user filing the request.
    pub user_id: Uuid,
    /// Title of the requested task.
    pub title: String,
    /// Description of the work needed.
    pub description: String,
    /// Where the task is to be carried out.
    pub location: String,
    /// Optional photo path.
    pub photo: Option<String>,
}
