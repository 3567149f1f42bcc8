//! Error types for the broker service.
//!
//! The broker's taxonomy is about translation: client mistakes stay
//! 400-class, downstream refusals keep their meaning, and every way the
//! authentication service can be unreachable or broken maps to a
//! 502-class condition that never echoes downstream internals.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrokerError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Client asked for an action this broker does not dispatch.
    #[error("unsupported action")]
    UnsupportedAction { action: String },

    /// Downstream rejected the credentials.
    #[error("invalid credentials")]
    Unauthorized,

    /// Downstream answered successfully but flagged the request as failed.
    #[error("request forbidden by auth service")]
    Forbidden,

    /// Downstream unreachable or timed out. Kept distinguishable from the
    /// generic upstream failure.
    #[error("auth service unavailable: {message}")]
    UpstreamUnavailable { message: String },

    /// Downstream answered with an unexpected status.
    #[error("error calling auth service")]
    UpstreamFailure,

    /// Downstream answered with a body the broker could not decode.
    #[error("error decoding auth service response")]
    UpstreamDecode,
}

pub type BrokerResult<T> = Result<T, BrokerError>;

impl BrokerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unsupported_action(action: impl Into<String>) -> Self {
        Self::UnsupportedAction {
            action: action.into(),
        }
    }

    pub fn upstream_unavailable(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
        }
    }
}
