//! Core business logic for the authentication system.
//!
//! Composes the user repository, the password credential and the token
//! issuer into the create-user and authenticate flows.

use crate::auth::password::Password;
use crate::database::models::{
    AuthenticateRequest, CreateUser, CreateUserRequest, Token, TokenScope, User,
};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::services::token_service::TokenIssuer;
use crate::services::validate_request;
use chrono::Duration;
use sqlx::SqlitePool;

/// Time-to-live for an activation token issued at registration.
const ACTIVATION_TOKEN_TTL_HOURS: i64 = 24;

pub struct AuthService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Registers a new user and issues their activation token.
    ///
    /// The two writes are intentionally not wrapped in one transaction: if
    /// token issuance fails after the user row has committed, the user
    /// exists without a usable activation token and a resend-activation
    /// operation (outside this service) is expected to recover.
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<Token> {
        validate_request(&request)?;

        let password = Password::new(&request.password)?;

        let repo = UserRepository::new(self.pool);
        let user = repo
            .insert(CreateUser {
                firstname: request.firstname,
                lastname: request.lastname,
                email: request.email,
                password_hash: password.hash().to_string(),
            })
            .await?;

        let issuer = TokenIssuer::new(self.pool);
        let token = issuer
            .new_token(
                user.id,
                Duration::hours(ACTIVATION_TOKEN_TTL_HOURS),
                TokenScope::Activation,
            )
            .await?;

        tracing::info!("created user {} and issued activation token", user.id);
        Ok(token)
    }

    /// Verifies an email/password pair and returns the matching user.
    ///
    /// An unknown email and a wrong password both come back as
    /// `Unauthorized` so responses cannot be used to probe which emails are
    /// registered. A failure of the hashing primitive itself is not an
    /// authentication outcome and propagates as an internal error.
    pub async fn authenticate(&self, request: AuthenticateRequest) -> ServiceResult<User> {
        validate_request(&request)?;

        let repo = UserRepository::new(self.pool);
        let mut user = match repo.get_by_email(&request.email).await {
            Ok(user) => user,
            Err(ServiceError::NotFound { .. }) => return Err(ServiceError::Unauthorized),
            Err(err) => return Err(err),
        };

        // Taking the hash strips it from the record we hand back.
        let stored_hash = user
            .password_hash
            .take()
            .ok_or_else(|| ServiceError::hashing("stored credential missing"))?;

        if !Password::from_hash(stored_hash).matches(&request.password)? {
            return Err(ServiceError::Unauthorized);
        }

        Ok(user)
    }

    /// Fetches a user by id for the profile endpoint.
    pub async fn get_user(&self, id: i64) -> ServiceResult<User> {
        UserRepository::new(self.pool).get_by_id(id).await
    }
}
