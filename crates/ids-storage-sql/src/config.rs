//! `PostgreSQL` implementation of the configuration entity stores.

use async_trait::async_trait;
use ids_model::{ApiScope, Client, IdentityResource, NaturalKey};
use ids_storage::{ConfigEntityStore, StorageError, StorageResult};
use sqlx::PgPool;

use crate::entities::{ApiScopeRow, ClientRow, IdentityResourceRow};
use crate::error::from_sqlx_error;

/// `PostgreSQL` store for configuration entities.
///
/// One instance serves all three configuration collections; each
/// `insert_many` call runs in its own transaction.
pub struct PgConfigStore {
    pool: PgPool,
}

impl PgConfigStore {
    /// Creates a new `PostgreSQL` configuration store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> StorageResult<sqlx::Transaction<'_, sqlx::Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| StorageError::Transaction(e.to_string()))
    }
}

async fn commit(tx: sqlx::Transaction<'_, sqlx::Postgres>) -> StorageResult<()> {
    tx.commit()
        .await
        .map_err(|e| StorageError::Transaction(e.to_string()))
}

#[async_trait]
impl ConfigEntityStore<Client> for PgConfigStore {
    async fn list_all(&self) -> StorageResult<Vec<Client>> {
        let rows: Vec<ClientRow> = sqlx::query_as("SELECT * FROM clients")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| from_sqlx_error(Client::ENTITY, e))?;

        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn insert_many(&self, entities: &[Client]) -> StorageResult<()> {
        let mut tx = self.begin().await?;

        for client in entities {
            sqlx::query(
                r"INSERT INTO clients (
                    id, client_id, name, enabled, secrets, allowed_grant_types,
                    redirect_uris, post_logout_redirect_uris, allowed_scopes,
                    allow_offline_access, created_at, updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
            )
            .bind(client.id)
            .bind(&client.client_id)
            .bind(&client.name)
            .bind(client.enabled)
            .bind(sqlx::types::Json(&client.secrets))
            .bind(sqlx::types::Json(&client.allowed_grant_types))
            .bind(sqlx::types::Json(&client.redirect_uris))
            .bind(sqlx::types::Json(&client.post_logout_redirect_uris))
            .bind(sqlx::types::Json(&client.allowed_scopes))
            .bind(client.allow_offline_access)
            .bind(client.created_at)
            .bind(client.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| from_sqlx_error(Client::ENTITY, e))?;
        }

        commit(tx).await
    }
}

#[async_trait]
impl ConfigEntityStore<IdentityResource> for PgConfigStore {
    async fn list_all(&self) -> StorageResult<Vec<IdentityResource>> {
        let rows: Vec<IdentityResourceRow> = sqlx::query_as("SELECT * FROM identity_resources")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| from_sqlx_error(IdentityResource::ENTITY, e))?;

        Ok(rows.into_iter().map(IdentityResource::from).collect())
    }

    async fn insert_many(&self, entities: &[IdentityResource]) -> StorageResult<()> {
        let mut tx = self.begin().await?;

        for resource in entities {
            sqlx::query(
                r"INSERT INTO identity_resources (
                    id, name, display_name, user_claims, enabled, created_at, updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(resource.id)
            .bind(&resource.name)
            .bind(&resource.display_name)
            .bind(sqlx::types::Json(&resource.user_claims))
            .bind(resource.enabled)
            .bind(resource.created_at)
            .bind(resource.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| from_sqlx_error(IdentityResource::ENTITY, e))?;
        }

        commit(tx).await
    }
}

#[async_trait]
impl ConfigEntityStore<ApiScope> for PgConfigStore {
    async fn list_all(&self) -> StorageResult<Vec<ApiScope>> {
        let rows: Vec<ApiScopeRow> = sqlx::query_as("SELECT * FROM api_scopes")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| from_sqlx_error(ApiScope::ENTITY, e))?;

        Ok(rows.into_iter().map(ApiScope::from).collect())
    }

    async fn insert_many(&self, entities: &[ApiScope]) -> StorageResult<()> {
        let mut tx = self.begin().await?;

        for scope in entities {
            sqlx::query(
                r"INSERT INTO api_scopes (
                    id, name, display_name, enabled, created_at, updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(scope.id)
            .bind(&scope.name)
            .bind(&scope.display_name)
            .bind(scope.enabled)
            .bind(scope.created_at)
            .bind(scope.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| from_sqlx_error(ApiScope::ENTITY, e))?;
        }

        commit(tx).await
    }
}
