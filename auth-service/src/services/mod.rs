//! Business logic services for the authentication service.

use crate::errors::{ServiceError, ServiceResult};
use validator::Validate;

pub mod auth_service;
pub mod token_service;

/// Runs validator-derive checks and flattens field errors into one message.
pub(crate) fn validate_request<T: Validate>(request: &T) -> ServiceResult<()> {
    if let Err(validation_errors) = request.validate() {
        let error_messages: Vec<String> = validation_errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error.message.as_ref().unwrap_or(&"Invalid value".into())
                    )
                })
            })
            .collect();

        return Err(ServiceError::validation(error_messages.join(", ")));
    }
    Ok(())
}
