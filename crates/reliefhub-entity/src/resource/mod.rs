//! Resource stock and resource-request entities.

pub mod model;
pub mod request;

pub use model::{CreateResource, Resource};
pub use request::{AllocationDecision, CreateResourceRequest, ResourceRequest, ResourceRequestStatus};
