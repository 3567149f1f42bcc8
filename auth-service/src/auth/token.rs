//! Opaque token generation.
//!
//! A token is 16 bytes from the operating system's CSPRNG, rendered as an
//! unpadded URL-safe base64 string. The plaintext is handed to the caller
//! once; only its SHA-256 digest is ever persisted, so verification means
//! digesting the presented value and comparing, never reversing a hash.

use crate::database::models::{Token, TokenScope};
use crate::errors::{ServiceError, ServiceResult};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Random bytes per token.
const TOKEN_BYTES: usize = 16;

/// Length of the encoded plaintext: 16 bytes in unpadded base64.
pub const TOKEN_PLAINTEXT_LEN: usize = 22;

/// Generates a new unpersisted token for the given user and scope.
///
/// Fails with `RandomSource` if the CSPRNG is unavailable; there is no
/// fallback to a weaker source.
pub fn generate(user_id: i64, ttl: Duration, scope: TokenScope) -> ServiceResult<Token> {
    let mut random_bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut random_bytes)
        .map_err(|e| ServiceError::random_source(e.to_string()))?;

    let plaintext = URL_SAFE_NO_PAD.encode(random_bytes);
    let hash = Sha256::digest(plaintext.as_bytes()).to_vec();

    Ok(Token {
        plaintext,
        hash,
        user_id,
        scope,
        expiry: Utc::now() + ttl,
    })
}
