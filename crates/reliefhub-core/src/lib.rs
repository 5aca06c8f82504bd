//! Core building blocks shared by every ReliefHub crate: the unified
//! error type, the `AppResult` alias, and the layered configuration.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
