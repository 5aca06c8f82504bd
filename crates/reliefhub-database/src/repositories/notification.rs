//! Notification repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use reliefhub_core::error::{AppError, ErrorKind};
use reliefhub_core::result::AppResult;
use reliefhub_entity::notification::{CreateNotification, Notification, UpdateNotification};

/// Repository for role-targeted notifications.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a notification by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    /// List active notifications visible to a role: targeted at that role
    /// or at `'All'`, and already past their scheduled time.
    pub async fn find_active_for_role(
        &self,
        role: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications \
             WHERE active = TRUE \
               AND (LOWER(target_role) = LOWER($1) OR target_role = 'All') \
               AND scheduled_for <= $2 \
             ORDER BY scheduled_for DESC",
        )
        .bind(role)
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
        })
    }

    /// Create a notification.
    pub async fn create(&self, data: &CreateNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (title, message, notification_type, target_role, scheduled_for) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.message)
        .bind(&data.notification_type)
        .bind(&data.target_role)
        .bind(data.scheduled_for)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// Update an existing notification's content and targeting.
    pub async fn update(&self, id: Uuid, data: &UpdateNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "UPDATE notifications SET title = $2, message = $3, notification_type = $4, \
                                      target_role = $5, scheduled_for = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.message)
        .bind(&data.notification_type)
        .bind(&data.target_role)
        .bind(data.scheduled_for)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update notification", e))?
        .ok_or_else(|| AppError::not_found(format!("Notification {id} not found")))
    }

    /// Soft-delete a notification by clearing its active flag.
    pub async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("UPDATE notifications SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deactivate notification", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Notification {id} not found")));
        }
        Ok(())
    }
}
