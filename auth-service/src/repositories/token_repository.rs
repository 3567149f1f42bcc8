//! Database repository for token persistence.
//!
//! Only the digest of a token is stored. This repository has no read, update
//! or delete operations; pruning or ignoring expired rows is a validating
//! collaborator's concern, and rows disappear with their owning user via the
//! foreign-key cascade.

use crate::database::models::Token;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::DB_TIMEOUT;
use sqlx::SqlitePool;
use tokio::time::timeout;

/// Repository for token database operations.
pub struct TokenRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> TokenRepository<'a> {
    /// Creates a new TokenRepository instance.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persists the digest, owner, expiry and scope of a token. The
    /// plaintext is never written.
    pub async fn insert(&self, token: &Token) -> ServiceResult<()> {
        let query = sqlx::query(
            r#"
            INSERT INTO tokens (hash, user_id, expiry, scope)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&token.hash)
        .bind(token.user_id)
        .bind(token.expiry)
        .bind(token.scope.as_str())
        .execute(self.pool);

        timeout(DB_TIMEOUT, query)
            .await
            .map_err(|_| ServiceError::timeout("tokens.insert"))??;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::generate;
    use crate::database::models::{CreateUser, TokenScope};
    use crate::database::test_pool;
    use crate::repositories::user_repository::UserRepository;
    use chrono::Duration;

    async fn seed_user(pool: &SqlitePool) -> i64 {
        UserRepository::new(pool)
            .insert(CreateUser {
                firstname: "Ada".to_string(),
                lastname: "Lovelace".to_string(),
                email: "a@x.com".to_string(),
                password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn insert_stores_digest_not_plaintext() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;

        let token = generate(user_id, Duration::hours(24), TokenScope::Activation).unwrap();
        TokenRepository::new(&pool).insert(&token).await.unwrap();

        let (hash, scope): (Vec<u8>, String) =
            sqlx::query_as("SELECT hash, scope FROM tokens WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&pool)
                .await
                .unwrap();

        assert_eq!(hash, token.hash);
        assert_eq!(scope, "activation");
        assert_ne!(hash, token.plaintext.as_bytes());
    }

    #[tokio::test]
    async fn insert_for_unknown_user_fails() {
        let pool = test_pool().await;

        let token = generate(9999, Duration::hours(1), TokenScope::Activation).unwrap();
        let err = TokenRepository::new(&pool).insert(&token).await.unwrap_err();

        assert!(matches!(err, ServiceError::Database { .. }));
    }

    #[tokio::test]
    async fn token_rows_cascade_on_user_delete() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;
        let user_repo = UserRepository::new(&pool);

        let token = generate(user_id, Duration::hours(24), TokenScope::Activation).unwrap();
        TokenRepository::new(&pool).insert(&token).await.unwrap();

        user_repo.delete(user_id).await.unwrap();

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tokens WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }
}
