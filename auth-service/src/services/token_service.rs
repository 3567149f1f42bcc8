//! Token issuance service.
//!
//! Composes generation and persistence: a token that this service returns
//! has already been committed (as a digest) to the tokens table.

use crate::auth::token::generate;
use crate::database::models::{Token, TokenScope};
use crate::errors::ServiceResult;
use crate::repositories::token_repository::TokenRepository;
use chrono::Duration;
use sqlx::SqlitePool;

pub struct TokenIssuer<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
}

impl<'a> TokenIssuer<'a> {
    /// Creates a new TokenIssuer instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Generates and persists a scoped token for a user.
    ///
    /// The returned token carries the plaintext; this is the only time it
    /// exists outside the caller's response. The issuer does not interpret
    /// the scope — which scopes are valid for which flows is caller policy.
    pub async fn new_token(
        &self,
        user_id: i64,
        ttl: Duration,
        scope: TokenScope,
    ) -> ServiceResult<Token> {
        let token = generate(user_id, ttl, scope)?;
        TokenRepository::new(self.pool).insert(&token).await?;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::CreateUser;
    use crate::database::test_pool;
    use crate::repositories::user_repository::UserRepository;

    #[tokio::test]
    async fn new_token_persists_digest_and_returns_plaintext() {
        let pool = test_pool().await;
        let user = UserRepository::new(&pool)
            .insert(CreateUser {
                firstname: "Ada".to_string(),
                lastname: "Lovelace".to_string(),
                email: "a@x.com".to_string(),
                password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            })
            .await
            .unwrap();

        let token = TokenIssuer::new(&pool)
            .new_token(user.id, Duration::hours(24), TokenScope::Activation)
            .await
            .unwrap();

        assert!(!token.plaintext.is_empty());

        let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tokens WHERE user_id = ?")
            .bind(user.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, 1);
    }
}
