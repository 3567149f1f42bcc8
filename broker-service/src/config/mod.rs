//! Central module for broker configuration settings.
//!
//! Loads the listen port, the authentication service base URL and the
//! outbound request timeout from the environment.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub auth_service_url: String,
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let auth_service_url = env::var("AUTH_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8081".to_string());

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .context("UPSTREAM_TIMEOUT_SECONDS must be a valid number")?;

        Ok(Config {
            server_port,
            auth_service_url,
            upstream_timeout_seconds,
        })
    }
}
