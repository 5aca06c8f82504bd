//! Resource request repository, including the transactional allocation.

use sqlx::PgPool;
use uuid::Uuid;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_entity::resource::request::AllocationDecision;
use reliefhub_entity::resource::{
    CreateResourceRequest, Resource, ResourceRequest, ResourceRequestStatus,
};

/// Result of an allocation attempt.
#[derive(Debug, Clone)]
pub enum RequestAllocation {
    /// Stock was deducted and the request moved to ALLOCATED.
    Allocated(ResourceRequest),
    /// Available stock does not cover the request; nothing was mutated.
    Insufficient {
        /// Units currently in stock.
        available: i32,
        /// Units the request asked for.
        requested: i32,
    },
}

/// Repository for resource requests and the allocation transition.
#[derive(Debug, Clone)]
pub struct ResourceRequestRepository {
    pool: PgPool,
}

impl ResourceRequestRepository {
    /// Create a new resource request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ResourceRequest>> {
        sqlx::query_as::<_, ResourceRequest>("SELECT * FROM resource_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find resource request", e)
            })
    }

    /// List requests filed by a user, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<ResourceRequest>> {
        sqlx::query_as::<_, ResourceRequest>(
            "SELECT * FROM resource_requests WHERE user_id = $1 ORDER BY request_date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list requests by user", e)
        })
    }

    /// List all requests, newest first (admin view).
    pub async fn find_all(&self) -> AppResult<Vec<ResourceRequest>> {
        sqlx::query_as::<_, ResourceRequest>(
            "SELECT * FROM resource_requests ORDER BY request_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requests", e))
    }

    /// File a new PENDING request. `request_date` is stamped by the insert.
    pub async fn create(&self, data: &CreateResourceRequest) -> AppResult<ResourceRequest> {
        sqlx::query_as::<_, ResourceRequest>(
            "INSERT INTO resource_requests (user_id, resource_id, location, requested_quantity) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.resource_id)
        .bind(&data.location)
        .bind(data.requested_quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create resource request", e)
        })
    }

    /// Accept a pending request and allocate stock in one transaction.
    ///
    /// The resource row is locked for the duration of the check so that
    /// two concurrent allocations cannot both pass the availability
    /// comparison; the stock decrement and the status flip to ALLOCATED
    /// commit as one unit.
    pub async fn accept_and_allocate(&self, request_id: Uuid) -> AppResult<RequestAllocation> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let request = sqlx::query_as::<_, ResourceRequest>(
            "SELECT * FROM resource_requests WHERE id = $1 FOR UPDATE",
        )
        .bind(request_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load resource request", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Resource request {request_id} not found")))?;

        if request.status != ResourceRequestStatus::Pending {
            return Err(AppError::conflict(format!(
                "Resource request {} has already been decided (status: {})",
                request_id, request.status
            )));
        }

        let resource_id = request.resource_id.ok_or_else(|| {
            AppError::conflict("The requested resource has been deleted".to_string())
        })?;

        let resource =
            sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1 FOR UPDATE")
                .bind(resource_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to load resource", e)
                })?
                .ok_or_else(|| AppError::not_found(format!("Resource {resource_id} not found")))?;

        if AllocationDecision::decide(resource.available_quantity, request.requested_quantity)
            == AllocationDecision::Insufficient
        {
            // Declined: release the locks without touching either row.
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
            })?;
            return Ok(RequestAllocation::Insufficient {
                available: resource.available_quantity,
                requested: request.requested_quantity,
            });
        }

        sqlx::query("UPDATE resources SET available_quantity = available_quantity - $2 WHERE id = $1")
            .bind(resource_id)
            .bind(request.requested_quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deduct resource stock", e)
            })?;

        let allocated = sqlx::query_as::<_, ResourceRequest>(
            "UPDATE resource_requests SET status = 'allocated' WHERE id = $1 RETURNING *",
        )
        .bind(request_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark request allocated", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit allocation", e)
        })?;

        Ok(RequestAllocation::Allocated(allocated))
    }

    /// Reject a pending request. Decided requests are never re-opened.
    pub async fn reject(&self, request_id: Uuid) -> AppResult<ResourceRequest> {
        let rejected = sqlx::query_as::<_, ResourceRequest>(
            "UPDATE resource_requests SET status = 'rejected' \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(request_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reject request", e))?;

        match rejected {
            Some(request) => Ok(request),
            None => match self.find_by_id(request_id).await? {
                Some(request) => Err(AppError::conflict(format!(
                    "Resource request {} has already been decided (status: {})",
                    request_id, request.status
                ))),
                None => Err(AppError::not_found(format!(
                    "Resource request {request_id} not found"
                ))),
            },
        }
    }
}
