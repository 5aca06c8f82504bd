//! Resource repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_entity::resource::{CreateResource, Resource};

/// Repository for resource stock records.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    /// Create a new resource repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a resource by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find resource", e))
    }

    /// List all resources by name.
    pub async fn find_all(&self) -> AppResult<Vec<Resource>> {
        sqlx::query_as::<_, Resource>("SELECT * FROM resources ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resources", e))
    }

    /// Register a new resource.
    pub async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "INSERT INTO resources (name, resource_type, available_quantity) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.resource_type)
        .bind(data.available_quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create resource", e))
    }

    /// Add `amount` units to a resource's stock. The amount is not
    /// validated and may be negative; the `available_quantity >= 0`
    /// check constraint rejects an adjustment that would drain the stock
    /// below zero.
    pub async fn replenish(&self, id: Uuid, amount: i32) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            "UPDATE resources SET available_quantity = available_quantity + $2 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(amount)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to replenish resource", e))?
        .ok_or_else(|| AppError::not_found(format!("Resource {id} not found")))
    }

    /// Delete a resource unconditionally. Returns `true` if a row was
    /// deleted. Outstanding requests referencing the resource keep their
    /// rows; their foreign key is nulled by the schema.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete resource", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
