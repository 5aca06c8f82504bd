//! Volunteer onboarding — application decisions and role promotion.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use reliefhub_core::AppError;
use reliefhub_database::repositories::user::UserRepository;
use reliefhub_database::repositories::volunteer_application::VolunteerApplicationRepository;
use reliefhub_entity::volunteer::{
    ApplicationSummary, CreateVolunteerApplication, VolunteerApplication,
};

/// Manages volunteer applications.
#[derive(Debug, Clone)]
pub struct VolunteerApplicationService {
    /// Application repository.
    application_repo: Arc<VolunteerApplicationRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl VolunteerApplicationService {
    /// Creates a new volunteer application service.
    pub fn new(
        application_repo: Arc<VolunteerApplicationRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            application_repo,
            user_repo,
        }
    }

    /// Lists every application with applicant contact details.
    pub async fn all_applications(&self) -> Result<Vec<ApplicationSummary>, AppError> {
        self.application_repo.find_all_summaries().await
    }

    /// Gets one application with applicant contact details.
    pub async fn application(&self, id: Uuid) -> Result<ApplicationSummary, AppError> {
        self.application_repo
            .find_summary_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Volunteer application {id} not found")))
    }

    /// Files a new application for an existing user.
    pub async fn create(
        &self,
        data: CreateVolunteerApplication,
    ) -> Result<VolunteerApplication, AppError> {
        self.user_repo
            .find_by_id(data.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", data.user_id)))?;

        let application = self.application_repo.create(&data).await?;
        info!(application_id = %application.id, user_id = %data.user_id, "Volunteer application filed");
        Ok(application)
    }

    /// Updates an application's description.
    pub async fn update(
        &self,
        id: Uuid,
        description: &str,
    ) -> Result<VolunteerApplication, AppError> {
        self.application_repo.update_description(id, description).await
    }

    /// Deletes an application.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.application_repo.delete(id).await? {
            return Err(AppError::not_found(format!(
                "Volunteer application {id} not found"
            )));
        }
        info!(application_id = %id, "Volunteer application deleted");
        Ok(())
    }

    /// Approves a pending application, promoting the applicant to the
    /// volunteer role. Both writes commit atomically.
    pub async fn approve(&self, id: Uuid) -> Result<VolunteerApplication, AppError> {
        let application = self.application_repo.approve_and_promote(id).await?;
        info!(
            application_id = %application.id,
            user_id = %application.user_id,
            "Volunteer application approved, applicant promoted"
        );
        Ok(application)
    }

    /// Rejects a pending application. The applicant's role is untouched.
    pub async fn reject(&self, id: Uuid) -> Result<VolunteerApplication, AppError> {
        let application = self.application_repo.reject(id).await?;
        info!(application_id = %application.id, "Volunteer application rejected");
        Ok(application)
    }
}
