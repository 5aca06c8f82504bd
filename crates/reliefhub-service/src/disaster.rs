//! Disaster records — admin CRUD and filtered queries.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use reliefhub_core::AppError;
use reliefhub_database::repositories::disaster::DisasterRepository;
use reliefhub_entity::disaster::{
    CreateDisaster, Disaster, DisasterStatus, DisasterType, Severity, UpdateDisaster,
};

/// Manages disaster records.
#[derive(Debug, Clone)]
pub struct DisasterService {
    /// Disaster repository.
    disaster_repo: Arc<DisasterRepository>,
}

impl DisasterService {
    /// Creates a new disaster service.
    pub fn new(disaster_repo: Arc<DisasterRepository>) -> Self {
        Self { disaster_repo }
    }

    /// Reports a new disaster. The reported time is stamped at insert and
    /// never changes afterwards.
    pub async fn create(&self, data: CreateDisaster) -> Result<Disaster, AppError> {
        let disaster = self.disaster_repo.create(&data).await?;
        info!(disaster_id = %disaster.id, name = %disaster.name, "Disaster reported");
        Ok(disaster)
    }

    /// Lists all disasters.
    pub async fn all(&self) -> Result<Vec<Disaster>, AppError> {
        self.disaster_repo.find_all().await
    }

    /// Gets a disaster by ID.
    pub async fn get(&self, id: Uuid) -> Result<Disaster, AppError> {
        self.disaster_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Disaster {id} not found")))
    }

    /// Updates a disaster's mutable fields.
    pub async fn update(&self, id: Uuid, data: UpdateDisaster) -> Result<Disaster, AppError> {
        let disaster = self.disaster_repo.update(id, &data).await?;
        info!(disaster_id = %disaster.id, "Disaster updated");
        Ok(disaster)
    }

    /// Deletes a disaster.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.disaster_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Disaster {id} not found")));
        }
        info!(disaster_id = %id, "Disaster deleted");
        Ok(())
    }

    /// Lists disasters of a given type.
    pub async fn by_type(&self, disaster_type: DisasterType) -> Result<Vec<Disaster>, AppError> {
        self.disaster_repo.find_by_type(disaster_type).await
    }

    /// Lists disasters of a given severity.
    pub async fn by_severity(&self, severity: Severity) -> Result<Vec<Disaster>, AppError> {
        self.disaster_repo.find_by_severity(severity).await
    }

    /// Lists disasters with a given status.
    pub async fn by_status(&self, status: DisasterStatus) -> Result<Vec<Disaster>, AppError> {
        self.disaster_repo.find_by_status(status).await
    }
}
