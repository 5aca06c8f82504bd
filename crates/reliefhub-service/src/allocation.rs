//! Resource allocation — request lifecycle and stock bookkeeping.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use reliefhub_core::AppError;
use reliefhub_database::repositories::resource::ResourceRepository;
use reliefhub_database::repositories::resource_request::{
    RequestAllocation, ResourceRequestRepository,
};
use reliefhub_database::repositories::user::UserRepository;
use reliefhub_entity::resource::{
    CreateResource, CreateResourceRequest, Resource, ResourceRequest,
};

/// Outcome of an accept-and-allocate call.
///
/// A shortfall is a declined result rather than an error: the admin sees
/// the message and the request stays pending.
#[derive(Debug, Clone)]
pub enum AllocationOutcome {
    /// Stock was deducted and the request is now ALLOCATED.
    Allocated(ResourceRequest),
    /// Available stock does not cover the request; nothing was mutated.
    Declined {
        /// Human-readable explanation of the shortfall.
        message: String,
    },
}

/// Manages resource requests and resource stock.
#[derive(Debug, Clone)]
pub struct AllocationService {
    /// Resource request repository.
    request_repo: Arc<ResourceRequestRepository>,
    /// Resource repository.
    resource_repo: Arc<ResourceRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl AllocationService {
    /// Creates a new allocation service.
    pub fn new(
        request_repo: Arc<ResourceRequestRepository>,
        resource_repo: Arc<ResourceRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            request_repo,
            resource_repo,
            user_repo,
        }
    }

    /// Files a new resource request on behalf of a user.
    ///
    /// The requested quantity is not validated against stock here;
    /// availability is checked when an admin allocates.
    pub async fn create_request(
        &self,
        data: CreateResourceRequest,
    ) -> Result<ResourceRequest, AppError> {
        self.user_repo
            .find_by_id(data.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {} not found", data.user_id)))?;

        let resource_id = data.resource_id;
        self.resource_repo
            .find_by_id(resource_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Resource {resource_id} not found")))?;

        let request = self.request_repo.create(&data).await?;

        info!(request_id = %request.id, user_id = %data.user_id, "Resource request created");

        Ok(request)
    }

    /// Accepts a pending request and allocates stock atomically.
    pub async fn accept_and_allocate(
        &self,
        request_id: Uuid,
    ) -> Result<AllocationOutcome, AppError> {
        match self.request_repo.accept_and_allocate(request_id).await? {
            RequestAllocation::Allocated(request) => {
                info!(
                    request_id = %request.id,
                    quantity = request.requested_quantity,
                    "Resource request accepted and allocated"
                );
                Ok(AllocationOutcome::Allocated(request))
            }
            RequestAllocation::Insufficient {
                available,
                requested,
            } => {
                info!(
                    request_id = %request_id,
                    available,
                    requested,
                    "Allocation declined: insufficient quantity"
                );
                Ok(AllocationOutcome::Declined {
                    message: format!(
                        "Insufficient resource quantity available for allocation \
                         ({available} available, {requested} requested)"
                    ),
                })
            }
        }
    }

    /// Rejects a pending request. No quantity side effect.
    pub async fn reject(&self, request_id: Uuid) -> Result<ResourceRequest, AppError> {
        let request = self.request_repo.reject(request_id).await?;
        info!(request_id = %request.id, "Resource request rejected");
        Ok(request)
    }

    /// Adds stock to a resource. The amount is unvalidated and may be
    /// negative (an admin correction); the schema stops the quantity from
    /// going below zero.
    pub async fn replenish(&self, resource_id: Uuid, amount: i32) -> Result<Resource, AppError> {
        let resource = self.resource_repo.replenish(resource_id, amount).await?;
        info!(
            resource_id = %resource.id,
            amount,
            new_quantity = resource.available_quantity,
            "Resource replenished"
        );
        Ok(resource)
    }

    /// Lists requests filed by a user.
    pub async fn requests_by_user(&self, user_id: Uuid) -> Result<Vec<ResourceRequest>, AppError> {
        self.request_repo.find_by_user(user_id).await
    }

    /// Lists every request (admin view).
    pub async fn all_requests(&self) -> Result<Vec<ResourceRequest>, AppError> {
        self.request_repo.find_all().await
    }

    /// Lists all resources.
    pub async fn resources(&self) -> Result<Vec<Resource>, AppError> {
        self.resource_repo.find_all().await
    }

    /// Registers a new resource.
    pub async fn add_resource(&self, data: CreateResource) -> Result<Resource, AppError> {
        let resource = self.resource_repo.create(&data).await?;
        info!(resource_id = %resource.id, name = %resource.name, "Resource added");
        Ok(resource)
    }

    /// Deletes a resource unconditionally.
    pub async fn delete_resource(&self, resource_id: Uuid) -> Result<(), AppError> {
        if !self.resource_repo.delete(resource_id).await? {
            return Err(AppError::not_found(format!(
                "Resource {resource_id} not found"
            )));
        }
        info!(resource_id = %resource_id, "Resource deleted");
        Ok(())
    }
}
