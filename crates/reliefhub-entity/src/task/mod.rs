//! Task request and task entities with their lifecycle enums.

pub mod model;
pub mod remarks;
pub mod request;

pub use model::{Task, TaskStatus};
pub use remarks::append_remark;
pub use request::{CreateTaskRequest, TaskRequest, TaskRequestStatus};
