//! `PostgreSQL` implementation of the user store.

use async_trait::async_trait;
use ids_model::{Claim, User};
use ids_storage::{StorageError, StorageResult, UserStore};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{UserClaimRow, UserRow};
use crate::error::from_sqlx_error;

/// `PostgreSQL` user store.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Creates a new `PostgreSQL` user store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| from_sqlx_error("User", e))?;

        Ok(row.map(User::from))
    }

    async fn create(&self, user: &User) -> StorageResult<()> {
        sqlx::query(
            r"INSERT INTO users (
                id, username, email, email_verified, enabled, password_hash,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.email_verified)
        .bind(user.enabled)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| from_sqlx_error("User", e))?;

        Ok(())
    }

    async fn add_claims(&self, user_id: Uuid, claims: &[Claim]) -> StorageResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Transaction(e.to_string()))?;

        for claim in claims {
            sqlx::query(
                r"INSERT INTO user_claims (user_id, claim_type, claim_value)
                VALUES ($1, $2, $3)",
            )
            .bind(user_id)
            .bind(&claim.claim_type)
            .bind(&claim.claim_value)
            .execute(&mut *tx)
            .await
            .map_err(|e| from_sqlx_error("UserClaim", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| StorageError::Transaction(e.to_string()))
    }

    async fn get_claims(&self, user_id: Uuid) -> StorageResult<Vec<Claim>> {
        let rows: Vec<UserClaimRow> = sqlx::query_as(
            "SELECT claim_type, claim_value FROM user_claims WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| from_sqlx_error("UserClaim", e))?;

        Ok(rows.into_iter().map(Claim::from).collect())
    }
}
