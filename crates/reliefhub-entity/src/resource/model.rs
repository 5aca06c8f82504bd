//! Resource entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stockpiled relief resource (equipment, vehicles, supplies).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: Uuid,
    /// Name of the resource.
    pub name: String,
    /// Free-text resource category (e.g. "equipment", "vehicle").
    pub resource_type: String,
    /// Units currently available for allocation. Never negative.
    pub available_quantity: i32,
}

/// Data required to register a new resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResource {
    /// Name of the resource.
    pub name: String,
    /// Free-text resource category.
    pub resource_type: String,
    /// Initial stock level.
    pub available_quantity: i32,
}
