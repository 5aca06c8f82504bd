//! Resource request entity and the allocation decision rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Status of a resource request. Transitions are one-directional: a
/// decided request is never re-opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "resource_request_status", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceRequestStatus {
    /// Awaiting an admin decision.
    Pending,
    /// Accepted, allocation in progress.
    Accepted,
    /// Declined by an admin.
    Rejected,
    /// Stock has been deducted and handed over.
    Allocated,
}

impl ResourceRequestStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Allocated => "allocated",
        }
    }
}

impl fmt::Display for ResourceRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user's request for a quantity of a resource.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResourceRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The requesting user.
    pub user_id: Uuid,
    /// The requested resource. Nulled if the resource record is deleted
    /// while the request is still on file.
    pub resource_id: Option<Uuid>,
    /// Delivery location given by the requester.
    pub location: String,
    /// Current request status.
    pub status: ResourceRequestStatus,
    /// Units requested.
    pub requested_quantity: i32,
    /// When the request was filed.
    pub request_date: DateTime<Utc>,
}

/// Data required to file a new resource request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    /// The requesting user.
    pub user_id: Uuid,
    /// The requested resource.
    pub resource_id: Uuid,
    /// Delivery location.
    pub location: String,
    /// Units requested. Not validated against stock at creation time;
    /// availability is checked at allocation.
    pub requested_quantity: i32,
}

/// Outcome of comparing available stock against a requested quantity.
///
/// This is the single decision rule of the allocation engine; the
/// repository re-evaluates it inside the allocation transaction while
/// holding the resource row lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationDecision {
    /// Stock covers the request; allocation may proceed.
    Sufficient,
    /// Stock does not cover the request; nothing may be mutated.
    Insufficient,
}

impl AllocationDecision {
    /// Decide whether `available` units can satisfy `requested` units.
    pub fn decide(available: i32, requested: i32) -> Self {
        if available < requested {
            Self::Insufficient
        } else {
            Self::Sufficient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_boundaries() {
        assert_eq!(AllocationDecision::decide(5, 5), AllocationDecision::Sufficient);
        assert_eq!(AllocationDecision::decide(5, 6), AllocationDecision::Insufficient);
        assert_eq!(AllocationDecision::decide(0, 1), AllocationDecision::Insufficient);
        assert_eq!(AllocationDecision::decide(0, 0), AllocationDecision::Sufficient);
    }
}
