//! Role-targeted notifications.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use reliefhub_core::AppError;
use reliefhub_database::repositories::notification::NotificationRepository;
use reliefhub_entity::notification::{CreateNotification, Notification, UpdateNotification};

/// Manages admin-authored announcements.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notification_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notification_repo: Arc<NotificationRepository>) -> Self {
        Self { notification_repo }
    }

    /// Creates a new notification.
    pub async fn create(&self, data: CreateNotification) -> Result<Notification, AppError> {
        let notification = self.notification_repo.create(&data).await?;
        info!(
            notification_id = %notification.id,
            target_role = %notification.target_role,
            "Notification created"
        );
        Ok(notification)
    }

    /// Lists active notifications visible to a role right now.
    pub async fn for_role(&self, role: &str) -> Result<Vec<Notification>, AppError> {
        self.notification_repo
            .find_active_for_role(role, Utc::now())
            .await
    }

    /// Updates an existing notification.
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateNotification,
    ) -> Result<Notification, AppError> {
        let notification = self.notification_repo.update(id, &data).await?;
        info!(notification_id = %notification.id, "Notification updated");
        Ok(notification)
    }

    /// Soft-deletes a notification; it stops being served but the row is
    /// retained.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.notification_repo.deactivate(id).await?;
        info!(notification_id = %id, "Notification deactivated");
        Ok(())
    }
}
