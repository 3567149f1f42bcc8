//! Global application error types and handlers.
//!
//! This module defines the custom error types used across the entire
//! authentication service and provides mechanisms for consistent error
//! handling and response formatting.

use thiserror::Error;

/// Generic service error that can be used across all entities
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    /// Raised when the users table unique constraint rejects an insert.
    #[error("duplicate email: {email}")]
    DuplicateEmail { email: String },

    /// Wrong credentials or unknown account. The two cases are merged
    /// before they reach a caller so the response cannot be used to
    /// enumerate registered emails.
    #[error("invalid credentials")]
    Unauthorized,

    /// Stale version on an optimistic-concurrency update.
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// A store operation exceeded its deadline and was cancelled.
    #[error("operation timed out: {operation}")]
    Timeout { operation: String },

    #[error("Password hashing error: {message}")]
    Hashing { message: String },

    #[error("Secure random source unavailable: {message}")]
    RandomSource { message: String },

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
        }
    }

    pub fn random_source(message: impl Into<String>) -> Self {
        Self::RandomSource {
            message: message.into(),
        }
    }
}
