//! HTTP API surface of the authentication service.

pub mod common;
pub mod user;
