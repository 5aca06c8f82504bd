//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;
use super::status::UserStatus;

/// A registered user of the relief platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Unique email address, used for login.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Account role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// Home location.
    pub location: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the user can log in right now.
    pub fn can_login(&self) -> bool {
        self.status.can_login()
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if this user is an approved volunteer.
    pub fn is_volunteer(&self) -> bool {
        self.role.is_volunteer()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Assigned role.
    pub role: UserRole,
    /// Home location.
    pub location: String,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
    /// New name.
    pub name: Option<String>,
    /// New phone number.
    pub phone_number: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New account status.
    pub status: Option<UserStatus>,
}
