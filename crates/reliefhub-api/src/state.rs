//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use reliefhub_core::config::AppConfig;

use reliefhub_service::account::AccountService;
use reliefhub_service::allocation::AllocationService;
use reliefhub_service::disaster::DisasterService;
use reliefhub_service::notification::NotificationService;
use reliefhub_service::password_reset::PasswordResetService;
use reliefhub_service::task::TaskService;
use reliefhub_service::volunteer::VolunteerApplicationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Account service.
    pub account_service: Arc<AccountService>,
    /// Allocation engine.
    pub allocation_service: Arc<AllocationService>,
    /// Disaster service.
    pub disaster_service: Arc<DisasterService>,
    /// Notification service.
    pub notification_service: Arc<NotificationService>,
    /// Password reset service.
    pub password_reset_service: Arc<PasswordResetService>,
    /// Task lifecycle engine.
    pub task_service: Arc<TaskService>,
    /// Volunteer onboarding engine.
    pub volunteer_service: Arc<VolunteerApplicationService>,
}
