//! Client domain model.
//!
//! Clients are applications that request tokens from the identity server.
//! They are registered under a unique `client_id` together with the grant
//! types, scopes, and redirect URIs they are allowed to use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::key::NaturalKey;

/// OAuth 2.0 grant type a client is allowed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Machine-to-machine flow (no user involved).
    ClientCredentials,
    /// Interactive authorization code flow.
    AuthorizationCode,
}

/// A registered client application.
///
/// The `client_id` is the natural key: no two clients in the store may share
/// one. Secrets are stored hashed, never in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Surrogate identifier.
    pub id: Uuid,
    /// Unique client identifier (OAuth `client_id`).
    pub client_id: String,
    /// Display name.
    pub name: Option<String>,
    /// Whether the client is enabled.
    pub enabled: bool,
    /// Hashed client secrets.
    pub secrets: Vec<String>,
    /// Grant types the client may use.
    pub allowed_grant_types: Vec<GrantType>,
    /// Allowed redirect URIs after login.
    pub redirect_uris: Vec<String>,
    /// Allowed redirect URIs after logout.
    pub post_logout_redirect_uris: Vec<String>,
    /// Scopes the client may request.
    pub allowed_scopes: Vec<String>,
    /// Whether the client may request refresh tokens.
    pub allow_offline_access: bool,
    /// When the client was created.
    pub created_at: DateTime<Utc>,
    /// When the client was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Creates a new client with the given client id.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            client_id: client_id.into(),
            name: None,
            enabled: true,
            secrets: Vec::new(),
            allowed_grant_types: Vec::new(),
            redirect_uris: Vec::new(),
            post_logout_redirect_uris: Vec::new(),
            allowed_scopes: Vec::new(),
            allow_offline_access: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a hashed secret.
    #[must_use]
    pub fn with_secret(mut self, hashed_secret: impl Into<String>) -> Self {
        self.secrets.push(hashed_secret.into());
        self
    }

    /// Adds an allowed grant type.
    #[must_use]
    pub fn with_grant_type(mut self, grant_type: GrantType) -> Self {
        self.allowed_grant_types.push(grant_type);
        self
    }

    /// Adds an allowed redirect URI.
    #[must_use]
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uris.push(uri.into());
        self
    }

    /// Adds an allowed post-logout redirect URI.
    #[must_use]
    pub fn with_post_logout_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.post_logout_redirect_uris.push(uri.into());
        self
    }

    /// Adds an allowed scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.allowed_scopes.push(scope.into());
        self
    }

    /// Allows the client to request refresh tokens.
    #[must_use]
    pub const fn with_offline_access(mut self) -> Self {
        self.allow_offline_access = true;
        self
    }
}

impl NaturalKey for Client {
    const ENTITY: &'static str = "Client";

    fn natural_key(&self) -> &str {
        &self.client_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_has_defaults() {
        let client = Client::new("web");

        assert_eq!(client.client_id, "web");
        assert!(client.enabled);
        assert!(client.secrets.is_empty());
        assert!(!client.allow_offline_access);
    }

    #[test]
    fn builder_pattern_works() {
        let client = Client::new("web")
            .with_secret("hashed")
            .with_grant_type(GrantType::AuthorizationCode)
            .with_redirect_uri("https://localhost:5002/signin-oidc")
            .with_scope("openid")
            .with_scope("profile")
            .with_offline_access();

        assert_eq!(
            client.allowed_grant_types,
            vec![GrantType::AuthorizationCode]
        );
        assert_eq!(client.allowed_scopes, ["openid", "profile"]);
        assert_eq!(client.redirect_uris, ["https://localhost:5002/signin-oidc"]);
        assert!(client.allow_offline_access);
    }

    #[test]
    fn natural_key_is_client_id() {
        let client = Client::new("mvc");
        assert_eq!(client.natural_key(), "mvc");
        assert_eq!(Client::ENTITY, "Client");
    }
}
