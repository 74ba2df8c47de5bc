//! Desired-state configuration.
//!
//! The compiled-in description of which configuration entities and seed
//! users must exist. Every function builds its collection fresh on each
//! call; nothing here touches the store or carries mutable state.

use ids_model::user::claim_types;
use ids_model::{ApiScope, Claim, Client, GrantType, IdentityResource};

use crate::secret::hash_secret;

/// A user account to seed at startup, with its plaintext password.
///
/// The password is hashed before it reaches the store; it exists in
/// plaintext only inside this compiled-in seed data.
#[derive(Debug, Clone)]
pub struct SeedUser {
    /// Unique username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Whether the email is pre-confirmed.
    pub email_confirmed: bool,
    /// Plaintext password, hashed during seeding.
    pub password: String,
    /// Claims to attach after creation.
    pub claims: Vec<Claim>,
}

/// The full desired state consumed by the reconciler.
///
/// Modeled as plain data so the reconciler can be tested against arbitrary
/// fixtures; [`DesiredState::standard`] yields the production set.
#[derive(Debug, Clone, Default)]
pub struct DesiredState {
    /// Clients that must exist.
    pub clients: Vec<Client>,
    /// Identity resources that must exist.
    pub identity_resources: Vec<IdentityResource>,
    /// API scopes that must exist.
    pub api_scopes: Vec<ApiScope>,
    /// Users that must exist.
    pub users: Vec<SeedUser>,
}

impl DesiredState {
    /// Builds the compiled-in desired state.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            clients: clients(),
            identity_resources: identity_resources(),
            api_scopes: api_scopes(),
            users: seed_users(),
        }
    }
}

/// Identity resources that must exist in the store.
#[must_use]
pub fn identity_resources() -> Vec<IdentityResource> {
    vec![
        IdentityResource::openid(),
        IdentityResource::profile(),
        IdentityResource::new("verification")
            .with_user_claim(claim_types::EMAIL)
            .with_user_claim(claim_types::EMAIL_VERIFIED),
    ]
}

/// API scopes that must exist in the store.
#[must_use]
pub fn api_scopes() -> Vec<ApiScope> {
    vec![ApiScope::new("api1").with_display_name("MyAPI")]
}

/// Clients that must exist in the store.
#[must_use]
pub fn clients() -> Vec<Client> {
    vec![
        // Machine-to-machine client
        Client::new("client")
            .with_secret(hash_secret("secret"))
            .with_grant_type(GrantType::ClientCredentials)
            .with_scope("api1"),
        // Interactive web application
        Client::new("web")
            .with_secret(hash_secret("secret"))
            .with_grant_type(GrantType::AuthorizationCode)
            .with_redirect_uri("https://localhost:5002/signin-oidc")
            .with_post_logout_redirect_uri("https://localhost:5002/signout-callback-oidc")
            .with_offline_access()
            .with_scope("openid")
            .with_scope("profile")
            .with_scope("verification")
            .with_scope("api1"),
        // Interactive MVC application
        Client::new("mvc")
            .with_secret(hash_secret("secret1"))
            .with_grant_type(GrantType::AuthorizationCode)
            .with_redirect_uri("https://localhost:5003/signin-oidc")
            .with_post_logout_redirect_uri("https://localhost:5003/signout-callback-oidc")
            .with_scope("openid")
            .with_scope("profile"),
        // Admin application
        Client::new("admin")
            .with_secret(hash_secret("secret1"))
            .with_grant_type(GrantType::AuthorizationCode)
            .with_redirect_uri("https://localhost:5004/signin-oidc")
            .with_post_logout_redirect_uri("https://localhost:5004/signout-callback-oidc")
            .with_scope("openid")
            .with_scope("profile"),
    ]
}

/// Users that must exist in the store.
#[must_use]
pub fn seed_users() -> Vec<SeedUser> {
    vec![
        SeedUser {
            username: "alice".to_string(),
            email: "AliceSmith@email.com".to_string(),
            email_confirmed: true,
            password: "Pass123$".to_string(),
            claims: vec![
                Claim::new(claim_types::NAME, "Alice Smith"),
                Claim::new(claim_types::GIVEN_NAME, "Alice"),
                Claim::new(claim_types::FAMILY_NAME, "Smith"),
                Claim::new(claim_types::WEBSITE, "http://alice.com"),
            ],
        },
        SeedUser {
            username: "bob".to_string(),
            email: "BobSmith@email.com".to_string(),
            email_confirmed: true,
            password: "Pass123$".to_string(),
            claims: vec![
                Claim::new(claim_types::NAME, "Bob Smith"),
                Claim::new(claim_types::GIVEN_NAME, "Bob"),
                Claim::new(claim_types::FAMILY_NAME, "Smith"),
                Claim::new(claim_types::WEBSITE, "http://bob.com"),
                Claim::new("location", "somewhere"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ids_model::NaturalKey;
    use std::collections::HashSet;

    #[test]
    fn collections_are_built_fresh() {
        let a = clients();
        let b = clients();

        // Same natural keys, distinct instances.
        assert_eq!(a.len(), b.len());
        assert_ne!(a[0].id, b[0].id);
    }

    #[test]
    fn natural_keys_are_unique_within_each_collection() {
        let client_ids: HashSet<_> = clients().iter().map(|c| c.client_id.clone()).collect();
        assert_eq!(client_ids.len(), clients().len());

        let resource_names: HashSet<_> = identity_resources()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(resource_names.len(), identity_resources().len());

        let usernames: HashSet<_> = seed_users().iter().map(|u| u.username.clone()).collect();
        assert_eq!(usernames.len(), seed_users().len());
    }

    #[test]
    fn expected_entities_are_present() {
        let state = DesiredState::standard();

        assert_eq!(state.clients.len(), 4);
        assert_eq!(state.identity_resources.len(), 3);
        assert_eq!(state.api_scopes.len(), 1);
        assert_eq!(state.users.len(), 2);

        let keys: Vec<_> = state.clients.iter().map(NaturalKey::natural_key).collect();
        assert_eq!(keys, ["client", "web", "mvc", "admin"]);
    }

    #[test]
    fn secrets_are_stored_hashed() {
        for client in clients() {
            for secret in &client.secrets {
                assert_ne!(secret, "secret");
                assert_ne!(secret, "secret1");
            }
        }
    }

    #[test]
    fn web_client_grants_and_scopes() {
        let state = DesiredState::standard();
        let web = state
            .clients
            .iter()
            .find(|c| c.client_id == "web")
            .unwrap();

        assert_eq!(web.allowed_grant_types, vec![GrantType::AuthorizationCode]);
        assert!(web.allow_offline_access);
        assert_eq!(
            web.allowed_scopes,
            ["openid", "profile", "verification", "api1"]
        );
    }

    #[test]
    fn seed_user_claim_counts() {
        let users = seed_users();

        let alice = users.iter().find(|u| u.username == "alice").unwrap();
        assert_eq!(alice.claims.len(), 4);
        assert!(alice.email_confirmed);

        let bob = users.iter().find(|u| u.username == "bob").unwrap();
        assert_eq!(bob.claims.len(), 5);
    }
}
