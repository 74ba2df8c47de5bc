//! Database row types for `SQLx`.
//!
//! Rows map one-to-one to database tables and are converted into domain
//! models after fetching. Vector-valued fields are stored as JSONB.

use chrono::{DateTime, Utc};
use ids_model::{ApiScope, Claim, Client, GrantType, IdentityResource, User};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for clients.
#[derive(Debug, Clone, FromRow)]
pub struct ClientRow {
    pub id: Uuid,
    pub client_id: String,
    pub name: Option<String>,
    pub enabled: bool,
    pub secrets: sqlx::types::Json<Vec<String>>,
    pub allowed_grant_types: sqlx::types::Json<Vec<GrantType>>,
    pub redirect_uris: sqlx::types::Json<Vec<String>>,
    pub post_logout_redirect_uris: sqlx::types::Json<Vec<String>>,
    pub allowed_scopes: sqlx::types::Json<Vec<String>>,
    pub allow_offline_access: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: row.id,
            client_id: row.client_id,
            name: row.name,
            enabled: row.enabled,
            secrets: row.secrets.0,
            allowed_grant_types: row.allowed_grant_types.0,
            redirect_uris: row.redirect_uris.0,
            post_logout_redirect_uris: row.post_logout_redirect_uris.0,
            allowed_scopes: row.allowed_scopes.0,
            allow_offline_access: row.allow_offline_access,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Database row for identity resources.
#[derive(Debug, Clone, FromRow)]
pub struct IdentityResourceRow {
    pub id: Uuid,
    pub name: String,
    pub display_name: Option<String>,
    pub user_claims: sqlx::types::Json<Vec<String>>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<IdentityResourceRow> for IdentityResource {
    fn from(row: IdentityResourceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            display_name: row.display_name,
            user_claims: row.user_claims.0,
            enabled: row.enabled,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Database row for API scopes.
#[derive(Debug, Clone, FromRow)]
pub struct ApiScopeRow {
    pub id: Uuid,
    pub name: String,
    pub display_name: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ApiScopeRow> for ApiScope {
    fn from(row: ApiScopeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            display_name: row.display_name,
            enabled: row.enabled,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Database row for users.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub enabled: bool,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            email_verified: row.email_verified,
            enabled: row.enabled,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Database row for user claims.
#[derive(Debug, Clone, FromRow)]
pub struct UserClaimRow {
    pub claim_type: String,
    pub claim_value: String,
}

impl From<UserClaimRow> for Claim {
    fn from(row: UserClaimRow) -> Self {
        Self {
            claim_type: row.claim_type,
            claim_value: row.claim_value,
        }
    }
}
