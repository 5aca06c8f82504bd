//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reliefhub_entity::resource::ResourceRequest;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Login response, mirroring the fields the web client reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Whether the login succeeded.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
    /// The logged-in user's ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<Uuid>,
    /// The user's role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// The user's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The account status.
    #[serde(rename = "userStatus", skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,
}

/// Outcome of an accept-and-allocate call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResponse {
    /// Whether stock was allocated.
    pub allocated: bool,
    /// Human-readable outcome.
    pub message: String,
    /// The allocated request, when allocation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<ResourceRequest>,
}

/// Both remark logs of a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemarksResponse {
    /// Volunteer remark log.
    pub volunteer_remarks: Option<String>,
    /// Admin remark log.
    pub admin_remarks: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
