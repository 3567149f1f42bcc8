//! Main entry point for the broker service.
//!
//! Initializes the Axum web server and the dispatcher that forwards client
//! authentication requests to the authentication service.

mod api;
mod config;
mod errors;
mod services;

use axum::{Extension, Router};
use config::Config;
use services::dispatcher::BrokerDispatcher;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let dispatcher = BrokerDispatcher::new(&config).unwrap();

    let app = Router::new()
        .merge(api::routes::broker_router())
        .layer(Extension(dispatcher));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting broker service on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}
