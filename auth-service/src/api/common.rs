//! Response envelope and error translation for API responses.
//!
//! Every endpoint answers with the same wrapper: `{error, success, message,
//! data}`, with `error`/`success`/`data` omitted when falsy or absent.
//! Service-layer errors are converted to HTTP responses here, in one place;
//! internal detail goes to the log, never into a response body.

use crate::errors::ServiceError;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Set on failed requests
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
    /// Set on successful requests
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            error: false,
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            error: true,
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Converts ServiceError to the appropriate HTTP response envelope
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::DuplicateEmail { email } => (
            StatusCode::CONFLICT,
            format!("user with email '{}' already exists", email),
        ),
        ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, "invalid credentials".to_string()),
        ServiceError::Conflict { message } => (StatusCode::CONFLICT, message),
        ServiceError::Timeout { operation } => {
            tracing::error!("store operation timed out: {}", operation);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
        ServiceError::Hashing { message } => {
            tracing::error!("hashing error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
        ServiceError::RandomSource { message } => {
            tracing::error!("random source error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
        ServiceError::Database { source } => {
            tracing::error!("database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    };

    (status, Json(ApiResponse::<()>::error(message)))
}
