//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use reliefhub_entity::task::TaskStatus;
use reliefhub_entity::user::{UserRole, UserStatus};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// Full name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Email address.
    #[validate(email)]
    pub email: String,
    /// Password.
    #[validate(length(min = 8))]
    pub password: String,
    /// Contact phone number.
    #[validate(length(min = 1, max = 30))]
    pub phone_number: String,
    /// Home location.
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    /// Requested role; defaults to citizen.
    pub role: Option<UserRole>,
}

/// Update user request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New name.
    pub name: Option<String>,
    /// New phone number.
    pub phone_number: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New account status.
    pub status: Option<UserStatus>,
}

/// Create disaster request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DisasterRequest {
    /// Short name of the event.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Free-text description.
    #[validate(length(min = 1))]
    pub description: String,
    /// Affected location.
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    /// Category, e.g. `"FLOOD"`.
    pub disaster_type: String,
    /// Severity, e.g. `"HIGH"`.
    pub severity: String,
    /// Status, e.g. `"ACTIVE"`.
    pub status: String,
}

/// Create resource request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResourceRequestBody {
    /// The requesting user.
    pub user_id: Uuid,
    /// The requested resource.
    pub resource_id: Uuid,
    /// Delivery location.
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    /// Units requested.
    #[validate(range(min = 1, message = "Requested quantity must be positive"))]
    pub requested_quantity: i32,
}

/// Replenish request body. The amount is intentionally unvalidated: a
/// negative value is an admin stock correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplenishRequest {
    /// Units to add to the stock.
    pub amount: i32,
}

/// Create resource body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResourceBody {
    /// Name of the resource.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Free-text resource category.
    #[validate(length(min = 1, max = 100))]
    pub resource_type: String,
    /// Initial stock level.
    #[validate(range(min = 0))]
    pub available_quantity: i32,
}

/// Create task request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskRequestBody {
    /// The user filing the request.
    pub user_id: Uuid,
    /// Title of the requested task.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Description of the work needed.
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    /// Where the task is to be carried out.
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    /// Optional photo path.
    pub photo: Option<String>,
}

/// Query parameters for accepting a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptTaskParams {
    /// The volunteer claiming the task.
    #[serde(rename = "volunteerId")]
    pub volunteer_id: Uuid,
}

/// Update task status body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskStatusRequest {
    /// The new status, e.g. `"COMPLETED"`.
    pub status: TaskStatus,
}

/// Remarks body for volunteer and admin remark endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RemarksRequest {
    /// Remark text to append.
    #[validate(length(min = 1, max = 1000))]
    pub remarks: String,
}

/// Create volunteer application body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VolunteerApplicationBody {
    /// The applying user.
    pub user_id: Uuid,
    /// Why the user wants to volunteer.
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
}

/// Update volunteer application body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateApplicationRequest {
    /// New description.
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
}

/// Create/update notification body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotificationBody {
    /// Title line.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 1))]
    pub message: String,
    /// Free-text category.
    #[validate(length(min = 1, max = 100))]
    pub notification_type: String,
    /// Role the notification targets, or `"All"`.
    #[validate(length(min = 1, max = 100))]
    pub target_role: String,
    /// When the notification becomes visible.
    pub scheduled_for: DateTime<Utc>,
}

/// Forgot-password request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    /// Email address of the account.
    #[validate(email)]
    pub email: String,
}

/// Reset-password request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// The token received by email.
    #[validate(length(min = 1))]
    pub token: String,
    /// The new password.
    #[validate(length(min = 8))]
    pub new_password: String,
}
