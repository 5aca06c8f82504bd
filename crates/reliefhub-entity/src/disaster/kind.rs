//! Disaster type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a reported disaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "disaster_type", rename_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum DisasterType {
    Flood,
    Earthquake,
    Fire,
    Cyclone,
    Other,
}

impl DisasterType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flood => "flood",
            Self::Earthquake => "earthquake",
            Self::Fire => "fire",
            Self::Cyclone => "cyclone",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisasterType {
    type Err = reliefhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flood" => Ok(Self::Flood),
            "earthquake" => Ok(Self::Earthquake),
            "fire" => Ok(Self::Fire),
            "cyclone" => Ok(Self::Cyclone),
            "other" => Ok(Self::Other),
            _ => Err(reliefhub_core::AppError::validation(format!(
                "Invalid disaster type: '{s}'. Expected one of: flood, earthquake, fire, cyclone, other"
            ))),
        }
    }
}
