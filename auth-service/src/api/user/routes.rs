//! Defines the HTTP routes for user creation and authentication.

use super::handlers::{authenticate, create_user, get_user_by_id};
use axum::{
    routing::{get, post},
    Router,
};

pub fn user_router() -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/authenticate", post(authenticate))
        .route("/{id}", get(get_user_by_id))
}
