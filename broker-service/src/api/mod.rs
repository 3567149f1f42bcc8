//! HTTP API surface of the broker service.

pub mod common;
pub mod handlers;
pub mod models;
pub mod routes;
