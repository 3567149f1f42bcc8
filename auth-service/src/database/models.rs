//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use validator::Validate;

/// A user row. The password hash is only populated by the by-email lookup
/// used for credential verification and is never serialized into a response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[sqlx(default)]
    pub password_hash: Option<String>,
    pub active: bool,
    pub role: i64,
    #[serde(skip_serializing, default)]
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for POST /v1/users
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub firstname: String,

    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub lastname: String,

    #[validate(
        email(message = "Must be a valid email"),
        length(max = 255, message = "Email too long")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Payload for POST /v1/users/authenticate
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AuthenticateRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Insert DTO handed to the user repository. Carries the bcrypt hash, never
/// the plaintext password.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
}

/// Purpose a token may be redeemed for. The issuer treats this as an opaque
/// label; scope policy belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenScope {
    Activation,
    Authentication,
}

impl TokenScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenScope::Activation => "activation",
            TokenScope::Authentication => "authentication",
        }
    }
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An opaque token. The plaintext leaves the service exactly once, in the
/// response to the request that issued it; only the digest is stored.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    #[serde(rename = "token")]
    pub plaintext: String,
    #[serde(skip_serializing)]
    pub hash: Vec<u8>,
    #[serde(skip_serializing)]
    pub user_id: i64,
    #[serde(skip_serializing)]
    pub scope: TokenScope,
    pub expiry: DateTime<Utc>,
}
