//! Notification entity.

pub mod model;

pub use model::{CreateNotification, Notification, UpdateNotification};
