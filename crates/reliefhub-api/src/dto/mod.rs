//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use reliefhub_core::AppError;

/// Run `validator` checks on a request body, mapping failures to a
/// validation error.
pub fn validate(body: &impl Validate) -> Result<(), AppError> {
    body.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
