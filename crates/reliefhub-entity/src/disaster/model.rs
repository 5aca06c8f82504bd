//! Disaster entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::DisasterType;
use super::severity::Severity;
use super::status::DisasterStatus;

/// A reported disaster event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Disaster {
    /// Unique disaster identifier.
    pub id: Uuid,
    /// Short name of the event.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Affected location.
    pub location: String,
    /// Category of the disaster.
    pub disaster_type: DisasterType,
    /// Severity classification.
    pub severity: Severity,
    /// Lifecycle status.
    pub status: DisasterStatus,
    /// When the disaster was reported. Set at creation, never updated.
    pub reported_at: DateTime<Utc>,
}

/// Data required to report a new disaster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDisaster {
    /// Short name of the event.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Affected location.
    pub location: String,
    /// Category of the disaster.
    pub disaster_type: DisasterType,
    /// Severity classification.
    pub severity: Severity,
    /// Initial lifecycle status.
    pub status: DisasterStatus,
}

/// Data for updating an existing disaster. `reported_at` is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDisaster {
    /// Short name of the event.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Affected location.
    pub location: String,
    /// Category of the disaster.
    pub disaster_type: DisasterType,
    /// Severity classification.
    pub severity: Severity,
    /// Lifecycle status.
    pub status: DisasterStatus,
}
