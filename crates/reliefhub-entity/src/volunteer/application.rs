//! Volunteer application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Status of a volunteer application. Decided at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Whether the application has already been decided.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user's application to become a volunteer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VolunteerApplication {
    /// Unique application identifier.
    pub id: Uuid,
    /// The applying user.
    pub user_id: Uuid,
    /// Why the user wants to volunteer.
    pub description: String,
    /// Current decision status.
    pub status: ApplicationStatus,
    /// When the application was filed.
    pub application_date: DateTime<Utc>,
}

/// Data required to file a new volunteer application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVolunteerApplication {
    /// The applying user.
    pub user_id: Uuid,
    /// Why the user wants to volunteer.
    pub description: String,
}

/// An application joined with its applicant's contact details, as shown
/// in the admin review list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationSummary {
    /// Unique application identifier.
    pub id: Uuid,
    /// The applying user.
    pub user_id: Uuid,
    /// Why the user wants to volunteer.
    pub description: String,
    /// Current decision status.
    pub status: ApplicationStatus,
    /// When the application was filed.
    pub application_date: DateTime<Utc>,
    /// Applicant's name.
    pub applicant_name: String,
    /// Applicant's email.
    pub applicant_email: String,
    /// Applicant's phone number.
    pub applicant_phone: String,
    /// Applicant's location.
    pub applicant_location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_decided() {
        assert!(!ApplicationStatus::Pending.is_decided());
        assert!(ApplicationStatus::Approved.is_decided());
        assert!(ApplicationStatus::Rejected.is_decided());
    }
}
