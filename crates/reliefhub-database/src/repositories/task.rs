//! Task repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use chrono::Utc;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_entity::task::{Task, TaskStatus, append_remark};

/// Repository for tasks: assignment, status updates, and remark logs.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a task by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task", e))
    }

    /// List open tasks: status PENDING and no volunteer assigned.
    pub async fn find_available(&self) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE status = 'pending' AND volunteer_id IS NULL \
             ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list available tasks", e))
    }

    /// List tasks assigned to a volunteer, newest first.
    pub async fn find_by_volunteer(&self, volunteer_id: Uuid) -> AppResult<Vec<Task>> {
        sqlx::query_as::<_, Task>(
            "SELECT * FROM tasks WHERE volunteer_id = $1 ORDER BY created_at DESC",
        )
        .bind(volunteer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list tasks by volunteer", e)
        })
    }

    /// Assign a volunteer to a pending, unassigned task.
    ///
    /// The guard is part of the statement (compare-and-swap), so two
    /// concurrent accepts cannot both claim the task. `None` means the
    /// task was no longer pending and unassigned when the update ran.
    pub async fn assign_volunteer(
        &self,
        task_id: Uuid,
        volunteer_id: Uuid,
    ) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET volunteer_id = $2, status = 'in_progress' \
             WHERE id = $1 AND volunteer_id IS NULL AND status = 'pending' \
             RETURNING *",
        )
        .bind(task_id)
        .bind(volunteer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign volunteer", e))
    }

    /// Overwrite a task's status. No transition table is enforced here;
    /// any status may follow any other.
    pub async fn update_status(&self, task_id: Uuid, status: TaskStatus) -> AppResult<Task> {
        sqlx::query_as::<_, Task>("UPDATE tasks SET status = $2 WHERE id = $1 RETURNING *")
            .bind(task_id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update task status", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Task {task_id} not found")))
    }

    /// Append a timestamped entry to the volunteer remark log.
    ///
    /// Fails with a conflict when the task has no assigned volunteer. The
    /// row is locked while the log is rewritten so concurrent appends
    /// cannot drop each other's entries.
    pub async fn add_volunteer_remark(&self, task_id: Uuid, remark: &str) -> AppResult<Task> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1 FOR UPDATE")
            .bind(task_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load task", e))?
            .ok_or_else(|| AppError::not_found(format!("Task {task_id} not found")))?;

        if task.volunteer_id.is_none() {
            return Err(AppError::conflict(
                "Cannot add volunteer remarks - task is not assigned to a volunteer",
            ));
        }

        let log = append_remark(task.volunteer_remarks.as_deref(), remark, Utc::now());

        let updated = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET volunteer_remarks = $2 WHERE id = $1 RETURNING *",
        )
        .bind(task_id)
        .bind(&log)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update volunteer remarks", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit remark append", e)
        })?;

        Ok(updated)
    }

    /// Append a timestamped entry to the admin remark log.
    pub async fn add_admin_remark(&self, task_id: Uuid, remark: &str) -> AppResult<Task> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1 FOR UPDATE")
            .bind(task_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load task", e))?
            .ok_or_else(|| AppError::not_found(format!("Task {task_id} not found")))?;

        let log = append_remark(task.admin_remarks.as_deref(), remark, Utc::now());

        let updated = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET admin_remarks = $2 WHERE id = $1 RETURNING *",
        )
        .bind(task_id)
        .bind(&log)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update admin remarks", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit remark append", e)
        })?;

        Ok(updated)
    }
}
