//! Application builder — wires repositories, services, and state into a
//! running Axum server.

use std::sync::Arc;

use sqlx::PgPool;

use reliefhub_auth::password::hasher::PasswordHasher;
use reliefhub_auth::password::validator::PasswordValidator;
use reliefhub_auth::reset::ResetTokenGenerator;
use reliefhub_core::config::AppConfig;
use reliefhub_core::error::AppError;
use reliefhub_database::repositories::disaster::DisasterRepository;
use reliefhub_database::repositories::notification::NotificationRepository;
use reliefhub_database::repositories::password_reset::PasswordResetTokenRepository;
use reliefhub_database::repositories::resource::ResourceRepository;
use reliefhub_database::repositories::resource_request::ResourceRequestRepository;
use reliefhub_database::repositories::task::TaskRepository;
use reliefhub_database::repositories::task_request::TaskRequestRepository;
use reliefhub_database::repositories::user::UserRepository;
use reliefhub_database::repositories::volunteer_application::VolunteerApplicationRepository;
use reliefhub_service::account::AccountService;
use reliefhub_service::allocation::AllocationService;
use reliefhub_service::disaster::DisasterService;
use reliefhub_service::mail::Mailer;
use reliefhub_service::notification::NotificationService;
use reliefhub_service::password_reset::PasswordResetService;
use reliefhub_service::task::TaskService;
use reliefhub_service::volunteer::VolunteerApplicationService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from configuration and a pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let disaster_repo = Arc::new(DisasterRepository::new(db_pool.clone()));
    let resource_repo = Arc::new(ResourceRepository::new(db_pool.clone()));
    let resource_request_repo = Arc::new(ResourceRequestRepository::new(db_pool.clone()));
    let task_repo = Arc::new(TaskRepository::new(db_pool.clone()));
    let task_request_repo = Arc::new(TaskRequestRepository::new(db_pool.clone()));
    let application_repo = Arc::new(VolunteerApplicationRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
    let reset_token_repo = Arc::new(PasswordResetTokenRepository::new(db_pool.clone()));

    // ── Credentials & mail ───────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let token_generator = ResetTokenGenerator::new(&config.auth);
    let mailer = Arc::new(Mailer::new(&config.mail)?);

    // ── Services ─────────────────────────────────────────────
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let allocation_service = Arc::new(AllocationService::new(
        Arc::clone(&resource_request_repo),
        Arc::clone(&resource_repo),
        Arc::clone(&user_repo),
    ));
    let disaster_service = Arc::new(DisasterService::new(Arc::clone(&disaster_repo)));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));
    let password_reset_service = Arc::new(PasswordResetService::new(
        Arc::clone(&user_repo),
        Arc::clone(&reset_token_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        token_generator,
        Arc::clone(&mailer),
    ));
    let task_service = Arc::new(TaskService::new(
        Arc::clone(&task_repo),
        Arc::clone(&task_request_repo),
        Arc::clone(&user_repo),
    ));
    let volunteer_service = Arc::new(VolunteerApplicationService::new(
        Arc::clone(&application_repo),
        Arc::clone(&user_repo),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        account_service,
        allocation_service,
        disaster_service,
        notification_service,
        password_reset_service,
        task_service,
        volunteer_service,
    })
}

/// Runs the ReliefHub server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool)?;
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("ReliefHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("ReliefHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
