//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user account can hold.
///
/// Citizens report disasters and file requests; volunteers additionally
/// accept tasks; admins decide applications and allocate resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full system administrator.
    Admin,
    /// Approved volunteer, allowed to accept tasks.
    Volunteer,
    /// Regular registered user.
    Citizen,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is a volunteer.
    pub fn is_volunteer(&self) -> bool {
        matches!(self, Self::Volunteer)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Volunteer => "volunteer",
            Self::Citizen => "citizen",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = reliefhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "volunteer" => Ok(Self::Volunteer),
            "citizen" => Ok(Self::Citizen),
            _ => Err(reliefhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, volunteer, citizen"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("Volunteer".parse::<UserRole>().unwrap(), UserRole::Volunteer);
        assert_eq!(" VOLUNTEER ".parse::<UserRole>().unwrap(), UserRole::Volunteer);
        assert!("firefighter".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_predicates() {
        assert!(UserRole::Admin.is_admin());
        assert!(UserRole::Volunteer.is_volunteer());
        assert!(!UserRole::Citizen.is_volunteer());
    }
}
