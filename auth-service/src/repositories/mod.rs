//! Database repositories for the authentication service.
//!
//! Each repository owns the persistence of one table. Every call is bounded
//! by [`DB_TIMEOUT`]; an operation that exceeds it is cancelled and surfaced
//! as a `Timeout` error instead of hanging the caller.

use std::time::Duration;

pub mod token_repository;
pub mod user_repository;

/// Deadline for a single store operation.
pub(crate) const DB_TIMEOUT: Duration = Duration::from_secs(3);
