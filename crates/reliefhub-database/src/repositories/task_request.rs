//! Task request repository, including the approve-and-create-task
//! transition.

use sqlx::PgPool;
use uuid::Uuid;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_entity::task::model::{DEFAULT_TASK_PHOTO, TASK_DEADLINE_DAYS};
use reliefhub_entity::task::{CreateTaskRequest, Task, TaskRequest, TaskRequestStatus};

/// Repository for task requests and their decision transitions.
#[derive(Debug, Clone)]
pub struct TaskRequestRepository {
    pool: PgPool,
}

impl TaskRequestRepository {
    /// Create a new task request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a task request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<TaskRequest>> {
        sqlx::query_as::<_, TaskRequest>("SELECT * FROM task_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find task request", e)
            })
    }

    /// List all task requests, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<TaskRequest>> {
        sqlx::query_as::<_, TaskRequest>("SELECT * FROM task_requests ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list task requests", e)
            })
    }

    /// List task requests filed by a user, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<TaskRequest>> {
        sqlx::query_as::<_, TaskRequest>(
            "SELECT * FROM task_requests WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list task requests by user", e)
        })
    }

    /// List task requests with a given status, newest first.
    pub async fn find_by_status(&self, status: TaskRequestStatus) -> AppResult<Vec<TaskRequest>> {
        sqlx::query_as::<_, TaskRequest>(
            "SELECT * FROM task_requests WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list task requests by status",
                e,
            )
        })
    }

    /// File a new PENDING task request.
    pub async fn create(&self, data: &CreateTaskRequest) -> AppResult<TaskRequest> {
        sqlx::query_as::<_, TaskRequest>(
            "INSERT INTO task_requests (user_id, title, description, location, photo) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.location)
        .bind(&data.photo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task request", e))
    }

    /// Approve a pending request and create its task in one transaction.
    ///
    /// The guarded status flip (`WHERE status = 'pending'`) makes the
    /// decision happen at most once, so exactly one task ever derives
    /// from a request; a second decision attempt fails with a conflict.
    pub async fn approve(&self, request_id: Uuid) -> AppResult<Task> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let approved = sqlx::query_as::<_, TaskRequest>(
            "UPDATE task_requests SET status = 'approved', updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(request_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to approve task request", e)
        })?;

        let Some(request) = approved else {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back transaction", e)
            })?;
            return Err(self.decision_error(request_id).await?);
        };

        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (task_request_id, photo, deadline) \
             VALUES ($1, $2, NOW() + make_interval(days => $3)) RETURNING *",
        )
        .bind(request.id)
        .bind(DEFAULT_TASK_PHOTO)
        .bind(TASK_DEADLINE_DAYS as i32)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit approval", e)
        })?;

        Ok(task)
    }

    /// Reject a pending request. Decided requests stay decided.
    pub async fn reject(&self, request_id: Uuid) -> AppResult<TaskRequest> {
        let rejected = sqlx::query_as::<_, TaskRequest>(
            "UPDATE task_requests SET status = 'rejected', updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(request_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to reject task request", e)
        })?;

        match rejected {
            Some(request) => Ok(request),
            None => Err(self.decision_error(request_id).await?),
        }
    }

    /// Delete a task request. Returns `true` if a row was deleted.
    pub async fn delete(&self, request_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM task_requests WHERE id = $1")
            .bind(request_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete task request", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Produce the right error for a failed decision: not-found when the
    /// request is absent, conflict when it has already been decided.
    async fn decision_error(&self, request_id: Uuid) -> AppResult<AppError> {
        Ok(match self.find_by_id(request_id).await? {
            Some(request) => AppError::conflict(format!(
                "Task request {} has already been decided (status: {})",
                request_id, request.status
            )),
            None => AppError::not_found(format!("Task request {request_id} not found")),
        })
    }
}
