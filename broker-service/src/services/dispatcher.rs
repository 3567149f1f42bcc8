//! Request dispatch to the authentication service.
//!
//! The dispatcher is the only place inter-service failure semantics are
//! decided: it forwards the credentials embedded in an `auth` action,
//! bounds the outbound call with a timeout, and translates whatever comes
//! back into the broker's own envelope.

use crate::api::common::ApiResponse;
use crate::api::models::{AuthPayload, RequestPayload};
use crate::config::Config;
use crate::errors::{BrokerError, BrokerResult};
use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BrokerDispatcher {
    client: reqwest::Client,
    auth_url: String,
}

impl BrokerDispatcher {
    /// Builds a dispatcher with a bounded outbound client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()?;

        Ok(BrokerDispatcher {
            client,
            auth_url: config.auth_service_url.trim_end_matches('/').to_string(),
        })
    }

    /// Routes a client payload by its action discriminator.
    pub async fn dispatch(&self, payload: RequestPayload) -> BrokerResult<ApiResponse<Value>> {
        match payload.action.as_str() {
            "auth" => {
                let credentials = payload
                    .auth
                    .ok_or_else(|| BrokerError::validation("auth: credentials are required"))?;
                self.authenticate(credentials).await
            }
            other => Err(BrokerError::unsupported_action(other)),
        }
    }

    /// Forwards credentials to the authenticate endpoint and re-envelopes
    /// the downstream response.
    async fn authenticate(&self, credentials: AuthPayload) -> BrokerResult<ApiResponse<Value>> {
        let response = self
            .client
            .post(format!("{}/v1/users/authenticate", self.auth_url))
            .json(&credentials)
            .send()
            .await
            .map_err(|e| BrokerError::upstream_unavailable(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(BrokerError::Unauthorized);
        }
        if status != StatusCode::OK && status != StatusCode::ACCEPTED {
            tracing::error!("auth service answered with status {}", status);
            return Err(BrokerError::UpstreamFailure);
        }

        let envelope: ApiResponse<Value> = response
            .json()
            .await
            .map_err(|_| BrokerError::UpstreamDecode)?;

        if envelope.error {
            return Err(BrokerError::Forbidden);
        }

        Ok(ApiResponse::success(
            envelope.data.unwrap_or(Value::Null),
            "login successful",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{response::Json, routing::post, Router};
    use serde_json::json;

    fn test_config(auth_url: &str) -> Config {
        Config {
            server_port: 0,
            auth_service_url: auth_url.to_string(),
            upstream_timeout_seconds: 1,
        }
    }

    /// Serves a stub authentication service on an ephemeral port.
    async fn spawn_upstream(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn auth_payload() -> RequestPayload {
        RequestPayload {
            action: "auth".to_string(),
            auth: Some(AuthPayload {
                email: "a@x.com".to_string(),
                password: "secret123".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn successful_authentication_is_re_enveloped() {
        let app = Router::new().route(
            "/v1/users/authenticate",
            post(|| async {
                (
                    StatusCode::ACCEPTED,
                    Json(json!({
                        "success": true,
                        "message": "user authentication success",
                        "data": {"id": 1, "email": "a@x.com"},
                    })),
                )
            }),
        );
        let upstream = spawn_upstream(app).await;
        let dispatcher = BrokerDispatcher::new(&test_config(&upstream)).unwrap();

        let envelope = dispatcher.dispatch(auth_payload()).await.unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.message, "login successful");
        assert_eq!(envelope.data.unwrap()["email"], "a@x.com");
    }

    #[tokio::test]
    async fn downstream_401_becomes_invalid_credentials() {
        let app = Router::new().route(
            "/v1/users/authenticate",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"error": true, "message": "invalid credentials"})),
                )
            }),
        );
        let upstream = spawn_upstream(app).await;
        let dispatcher = BrokerDispatcher::new(&test_config(&upstream)).unwrap();

        let err = dispatcher.dispatch(auth_payload()).await.unwrap_err();
        assert!(matches!(err, BrokerError::Unauthorized));
    }

    #[tokio::test]
    async fn downstream_500_becomes_generic_upstream_failure() {
        let app = Router::new().route(
            "/v1/users/authenticate",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": true, "message": "database exploded at 10.0.0.3"})),
                )
            }),
        );
        let upstream = spawn_upstream(app).await;
        let dispatcher = BrokerDispatcher::new(&test_config(&upstream)).unwrap();

        let err = dispatcher.dispatch(auth_payload()).await.unwrap_err();
        assert!(matches!(err, BrokerError::UpstreamFailure));
        assert_eq!(err.to_string(), "error calling auth service");
    }

    #[tokio::test]
    async fn downstream_error_flag_becomes_forbidden() {
        let app = Router::new().route(
            "/v1/users/authenticate",
            post(|| async {
                Json(json!({"error": true, "message": "account disabled"}))
            }),
        );
        let upstream = spawn_upstream(app).await;
        let dispatcher = BrokerDispatcher::new(&test_config(&upstream)).unwrap();

        let err = dispatcher.dispatch(auth_payload()).await.unwrap_err();
        assert!(matches!(err, BrokerError::Forbidden));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_distinguishable() {
        // Bind and drop a listener so the port is known-dead.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let dispatcher =
            BrokerDispatcher::new(&test_config(&format!("http://{}", addr))).unwrap();

        let err = dispatcher.dispatch(auth_payload()).await.unwrap_err();
        assert!(matches!(err, BrokerError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn slow_upstream_times_out_as_unavailable() {
        let app = Router::new().route(
            "/v1/users/authenticate",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!({"success": true, "message": "too late"}))
            }),
        );
        let upstream = spawn_upstream(app).await;
        let dispatcher = BrokerDispatcher::new(&test_config(&upstream)).unwrap();

        let err = dispatcher.dispatch(auth_payload()).await.unwrap_err();
        assert!(matches!(err, BrokerError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn unknown_action_is_rejected_without_an_upstream_call() {
        let dispatcher =
            BrokerDispatcher::new(&test_config("http://127.0.0.1:1")).unwrap();

        let err = dispatcher
            .dispatch(RequestPayload {
                action: "bogus".to_string(),
                auth: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, BrokerError::UnsupportedAction { ref action } if action == "bogus"));
    }

    #[tokio::test]
    async fn auth_action_without_credentials_is_a_validation_error() {
        let dispatcher =
            BrokerDispatcher::new(&test_config("http://127.0.0.1:1")).unwrap();

        let err = dispatcher
            .dispatch(RequestPayload {
                action: "auth".to_string(),
                auth: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, BrokerError::Validation { .. }));
    }
}
