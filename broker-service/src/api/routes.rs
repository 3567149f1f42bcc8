//! Defines the HTTP routes for the broker.

use super::handlers::{ping, submit_request};
use axum::{routing::get, Router};

pub fn broker_router() -> Router {
    Router::new().route("/", get(ping).post(submit_request))
}
