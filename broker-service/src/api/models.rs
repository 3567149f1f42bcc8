//! Request payloads accepted by the broker.

use serde::{Deserialize, Serialize};

/// Client payload with an action discriminator.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestPayload {
    pub action: String,
    #[serde(default)]
    pub auth: Option<AuthPayload>,
}

/// Credentials forwarded to the authentication service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub email: String,
    pub password: String,
}
