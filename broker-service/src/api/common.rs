//! Response envelope and error translation for the broker's API.
//!
//! The broker speaks the same `{error, success, message, data}` envelope as
//! the authentication service but owns its copy: responses are re-enveloped
//! at this hop, never passed through verbatim.

use crate::errors::BrokerError;
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

/// Converts BrokerError to the appropriate HTTP response envelope
pub fn broker_error_to_http(error: BrokerError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, message) = match error {
        BrokerError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        BrokerError::UnsupportedAction { action } => {
            tracing::warn!("rejected unsupported action '{}'", action);
            (StatusCode::BAD_REQUEST, "unsupported action".to_string())
        }
        BrokerError::Unauthorized => (StatusCode::UNAUTHORIZED, "invalid credentials".to_string()),
        BrokerError::Forbidden => (
            StatusCode::FORBIDDEN,
            "request forbidden by auth service".to_string(),
        ),
        BrokerError::UpstreamUnavailable { message } => {
            tracing::error!("auth service unavailable: {}", message);
            (
                StatusCode::BAD_GATEWAY,
                "auth service unavailable".to_string(),
            )
        }
        BrokerError::UpstreamFailure => (
            StatusCode::BAD_GATEWAY,
            "error calling auth service".to_string(),
        ),
        BrokerError::UpstreamDecode => (
            StatusCode::BAD_GATEWAY,
            "error decoding auth service response".to_string(),
        ),
    };

    (status, Json(ApiResponse::<()>::error(message)))
}
