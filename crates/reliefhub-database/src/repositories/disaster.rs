//! Disaster repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_entity::disaster::{
    CreateDisaster, Disaster, DisasterStatus, DisasterType, Severity, UpdateDisaster,
};

/// Repository for disaster CRUD and filtered queries.
#[derive(Debug, Clone)]
pub struct DisasterRepository {
    pool: PgPool,
}

impl DisasterRepository {
    /// Create a new disaster repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a disaster by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Disaster>> {
        sqlx::query_as::<_, Disaster>("SELECT * FROM disasters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find disaster", e))
    }

    /// List all disasters, most recently reported first.
    pub async fn find_all(&self) -> AppResult<Vec<Disaster>> {
        sqlx::query_as::<_, Disaster>("SELECT * FROM disasters ORDER BY reported_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list disasters", e))
    }

    /// List disasters of a given type.
    pub async fn find_by_type(&self, disaster_type: DisasterType) -> AppResult<Vec<Disaster>> {
        sqlx::query_as::<_, Disaster>(
            "SELECT * FROM disasters WHERE disaster_type = $1 ORDER BY reported_at DESC",
        )
        .bind(disaster_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list disasters by type", e)
        })
    }

    /// List disasters of a given severity.
    pub async fn find_by_severity(&self, severity: Severity) -> AppResult<Vec<Disaster>> {
        sqlx::query_as::<_, Disaster>(
            "SELECT * FROM disasters WHERE severity = $1 ORDER BY reported_at DESC",
        )
        .bind(severity)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list disasters by severity",
                e,
            )
        })
    }

    /// List disasters with a given status.
    pub async fn find_by_status(&self, status: DisasterStatus) -> AppResult<Vec<Disaster>> {
        sqlx::query_as::<_, Disaster>(
            "SELECT * FROM disasters WHERE status = $1 ORDER BY reported_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list disasters by status", e)
        })
    }

    /// Report a new disaster. `reported_at` is stamped by the insert.
    pub async fn create(&self, data: &CreateDisaster) -> AppResult<Disaster> {
        sqlx::query_as::<_, Disaster>(
            "INSERT INTO disasters (name, description, location, disaster_type, severity, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.location)
        .bind(data.disaster_type)
        .bind(data.severity)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create disaster", e))
    }

    /// Update a disaster's mutable fields. `reported_at` is never touched.
    pub async fn update(&self, id: Uuid, data: &UpdateDisaster) -> AppResult<Disaster> {
        sqlx::query_as::<_, Disaster>(
            "UPDATE disasters SET name = $2, description = $3, location = $4, \
                                  disaster_type = $5, severity = $6, status = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.location)
        .bind(data.disaster_type)
        .bind(data.severity)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update disaster", e))?
        .ok_or_else(|| AppError::not_found(format!("Disaster {id} not found")))
    }

    /// Delete a disaster by ID. Returns `true` if a row was deleted.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM disasters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete disaster", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
