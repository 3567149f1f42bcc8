//! Handler functions for user creation, authentication and lookup.
//!
//! These functions parse incoming requests, hand them to the service layer
//! and wrap the outcome in the standard response envelope.

use crate::api::common::{service_error_to_http, ApiResponse};
use crate::database::models::{AuthenticateRequest, CreateUserRequest, Token, User};
use crate::services::auth_service::AuthService;
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use sqlx::SqlitePool;

/// Creates a user and returns the issued activation token.
#[axum::debug_handler]
pub async fn create_user(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Token>>), (StatusCode, Json<ApiResponse<()>>)> {
    let service = AuthService::new(&pool);
    match service.create_user(payload).await {
        Ok(token) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(token, "user creation success")),
        )),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Verifies credentials and returns the authenticated user.
#[axum::debug_handler]
pub async fn authenticate(
    Extension(pool): Extension<SqlitePool>,
    Json(payload): Json<AuthenticateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), (StatusCode, Json<ApiResponse<()>>)> {
    let service = AuthService::new(&pool);
    match service.authenticate(payload).await {
        Ok(user) => Ok((
            StatusCode::ACCEPTED,
            Json(ApiResponse::success(user, "user authentication success")),
        )),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Retrieves a user by its ID.
#[axum::debug_handler]
pub async fn get_user_by_id(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<User>>, (StatusCode, Json<ApiResponse<()>>)> {
    let service = AuthService::new(&pool);
    match service.get_user(id).await {
        Ok(user) => Ok(Json(ApiResponse::success(user, "success"))),
        Err(error) => Err(service_error_to_http(error)),
    }
}
