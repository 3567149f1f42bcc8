//! Main entry point for the authentication service.
//!
//! This file initializes the Axum web server, sets up the database
//! connection pool, and registers all API routes.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod repositories;
mod services;

use crate::api::common::ApiResponse;
use axum::{response::Json, routing::get, Extension, Router};
use config::Config;
use database::Database;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let db = Database::new(&config).await.unwrap();
    let pool = db.pool().clone();

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/v1/users", api::user::routes::user_router())
        .layer(Extension(pool));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting authentication service on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Authentication Service",
            "version": "0.1.0"
        }),
        "Welcome to the authentication service",
    ))
}
