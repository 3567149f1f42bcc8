//! Password hashing and verification.
//!
//! Wraps bcrypt with a fixed work factor. The plaintext password is a
//! function argument only; it is never stored in this struct or anywhere
//! else that outlives the request that carried it.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{hash, verify, DEFAULT_COST};

/// A stored password credential. Holds the bcrypt hash and nothing else.
#[derive(Debug, Clone)]
pub struct Password {
    hash: String,
}

impl Password {
    /// Hashes a plaintext password with a freshly generated salt.
    ///
    /// Fails only if the hashing primitive itself fails; an invalid
    /// plaintext is not possible at this layer.
    pub fn new(plaintext: &str) -> ServiceResult<Self> {
        let hash = hash(plaintext, DEFAULT_COST)
            .map_err(|e| ServiceError::hashing(e.to_string()))?;
        Ok(Password { hash })
    }

    /// Wraps a hash read back from the users table.
    pub fn from_hash(hash: String) -> Self {
        Password { hash }
    }

    /// Checks a candidate password against the stored hash.
    ///
    /// Returns `Ok(false)` when the candidate simply does not match (a
    /// verification failure the caller reports as unauthorized) and `Err`
    /// only when the primitive fails unexpectedly. Callers must not
    /// collapse the two.
    pub fn matches(&self, candidate: &str) -> ServiceResult<bool> {
        verify(candidate, &self.hash).map_err(|e| ServiceError::hashing(e.to_string()))
    }

    /// The bcrypt hash, for persistence.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}
