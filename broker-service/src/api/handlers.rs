//! Handler functions for the broker's API endpoints.

use crate::api::common::{broker_error_to_http, ApiResponse};
use crate::api::models::RequestPayload;
use crate::services::dispatcher::BrokerDispatcher;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
};
use serde_json::Value;

/// Liveness ping.
#[axum::debug_handler]
pub async fn ping() -> (StatusCode, Json<ApiResponse<Value>>) {
    (
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(Value::Null, "broker reachable")),
    )
}

/// Accepts a client payload and dispatches it by action.
#[axum::debug_handler]
pub async fn submit_request(
    Extension(dispatcher): Extension<BrokerDispatcher>,
    Json(payload): Json<RequestPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), (StatusCode, Json<ApiResponse<()>>)> {
    match dispatcher.dispatch(payload).await {
        Ok(envelope) => Ok((StatusCode::ACCEPTED, Json(envelope))),
        Err(error) => Err(broker_error_to_http(error)),
    }
}
