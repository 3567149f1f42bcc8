//! Database repository for user management operations.
//!
//! Provides CRUD operations for user records. Email uniqueness is enforced
//! by the storage-layer constraint alone; this repository translates the
//! constraint-violation signal into a domain error rather than pre-checking
//! with a query, which would race under concurrent inserts.

use crate::database::models::{CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::DB_TIMEOUT;
use chrono::Utc;
use sqlx::SqlitePool;
use tokio::time::timeout;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    /// Shared SQLite connection pool
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to SQLite connection pool
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new user row.
    ///
    /// The row starts inactive, at role 0 and version 0, with current
    /// timestamps. A unique-constraint violation on the email column comes
    /// back as `DuplicateEmail`; any other failure is a database error.
    pub async fn insert(&self, create: CreateUser) -> ServiceResult<User> {
        let now = Utc::now();

        let query = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, firstname, lastname, password_hash, active, role, version, created_at, updated_at)
            VALUES (?, ?, ?, ?, 0, 0, 0, ?, ?)
            RETURNING id, firstname, lastname, email, active, role, version, created_at, updated_at
            "#,
        )
        .bind(&create.email)
        .bind(&create.firstname)
        .bind(&create.lastname)
        .bind(&create.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool);

        let result = timeout(DB_TIMEOUT, query)
            .await
            .map_err(|_| ServiceError::timeout("users.insert"))?;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(ServiceError::duplicate_email(create.email))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Retrieves a user by email, exact match.
    ///
    /// This is the only query path that projects the password hash; the
    /// returned record is what credential verification runs against.
    pub async fn get_by_email(&self, email: &str) -> ServiceResult<User> {
        let query = sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, password_hash, active, role, version, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool);

        timeout(DB_TIMEOUT, query)
            .await
            .map_err(|_| ServiceError::timeout("users.get_by_email"))??
            .ok_or_else(|| ServiceError::not_found("User", email))
    }

    /// Retrieves a user by id. The password hash is not projected.
    pub async fn get_by_id(&self, id: i64) -> ServiceResult<User> {
        let query = sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, active, role, version, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool);

        timeout(DB_TIMEOUT, query)
            .await
            .map_err(|_| ServiceError::timeout("users.get_by_id"))??
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))
    }

    /// Updates a user row with an optimistic-concurrency check.
    ///
    /// The predicate requires the caller's view of `version` to still be
    /// current; when the stored version has advanced the update touches zero
    /// rows and fails with `Conflict`. On success the version is bumped and
    /// the updated-at timestamp refreshed.
    pub async fn update(&self, user: &User) -> ServiceResult<User> {
        let query = sqlx::query(
            r#"
            UPDATE users
            SET email = ?, firstname = ?, lastname = ?, active = ?, role = ?,
                version = version + 1, updated_at = ?
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(&user.email)
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(user.active)
        .bind(user.role)
        .bind(Utc::now())
        .bind(user.id)
        .bind(user.version)
        .execute(self.pool);

        let result = timeout(DB_TIMEOUT, query)
            .await
            .map_err(|_| ServiceError::timeout("users.update"))??;

        if result.rows_affected() == 0 {
            // Distinguish a stale version from a missing row.
            return match self.get_by_id(user.id).await {
                Ok(_) => Err(ServiceError::conflict(format!(
                    "user {} was modified concurrently",
                    user.id
                ))),
                Err(err) => Err(err),
            };
        }

        self.get_by_id(user.id).await
    }

    /// Deletes a user row by id. Token rows referencing the user are removed
    /// by the foreign-key cascade.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let query = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool);

        let result = timeout(DB_TIMEOUT, query)
            .await
            .map_err(|_| ServiceError::timeout("users.delete"))??;

        if result.rows_affected() == 0 {
            return Err(ServiceError::not_found("User", id.to_string()));
        }
        Ok(())
    }
}
