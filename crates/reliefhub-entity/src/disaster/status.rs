//! Disaster status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a reported disaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "disaster_status", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum DisasterStatus {
    Active,
    Inactive,
    Resolved,
}

impl DisasterStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for DisasterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisasterStatus {
    type Err = reliefhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "resolved" => Ok(Self::Resolved),
            _ => Err(reliefhub_core::AppError::validation(format!(
                "Invalid disaster status: '{s}'. Expected one of: active, inactive, resolved"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "RESOLVED".parse::<DisasterStatus>().unwrap(),
            DisasterStatus::Resolved
        );
        assert!("ongoing".parse::<DisasterStatus>().is_err());
    }
}
