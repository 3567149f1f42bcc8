//! Credential primitives for the authentication service.
//!
//! Password hashing/verification and opaque-token generation live here;
//! persistence belongs to the repositories and policy to the services.

pub mod password;
pub mod token;
