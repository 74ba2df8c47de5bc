//! Identity resource domain model.
//!
//! Identity resources are named groups of claims about a user that clients
//! can request via scopes (`openid`, `profile`, and custom resources).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::key::NaturalKey;
use crate::user::claim_types;

/// An identity resource (identity scope).
///
/// The `name` is the natural key; `user_claims` lists the claim types
/// included in tokens when the resource is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityResource {
    /// Surrogate identifier.
    pub id: Uuid,
    /// Unique resource name (the scope value).
    pub name: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Claim types exposed by this resource.
    pub user_claims: Vec<String>,
    /// Whether the resource is enabled.
    pub enabled: bool,
    /// When the resource was created.
    pub created_at: DateTime<Utc>,
    /// When the resource was last updated.
    pub updated_at: DateTime<Utc>,
}

impl IdentityResource {
    /// Creates a new identity resource with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            display_name: None,
            user_claims: Vec::new(),
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates the standard `openid` resource (subject identifier).
    #[must_use]
    pub fn openid() -> Self {
        Self::new("openid")
            .with_display_name("Your user identifier")
            .with_user_claim(claim_types::SUBJECT)
    }

    /// Creates the standard `profile` resource (basic profile claims).
    #[must_use]
    pub fn profile() -> Self {
        Self::new("profile")
            .with_display_name("User profile")
            .with_user_claim(claim_types::NAME)
            .with_user_claim(claim_types::GIVEN_NAME)
            .with_user_claim(claim_types::FAMILY_NAME)
            .with_user_claim(claim_types::WEBSITE)
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Adds an exposed claim type.
    #[must_use]
    pub fn with_user_claim(mut self, claim_type: impl Into<String>) -> Self {
        self.user_claims.push(claim_type.into());
        self
    }
}

impl NaturalKey for IdentityResource {
    const ENTITY: &'static str = "IdentityResource";

    fn natural_key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_resources() {
        let openid = IdentityResource::openid();
        assert_eq!(openid.name, "openid");
        assert_eq!(openid.user_claims, vec![claim_types::SUBJECT]);

        let profile = IdentityResource::profile();
        assert_eq!(profile.name, "profile");
        assert!(profile.user_claims.contains(&claim_types::NAME.to_string()));
        assert!(profile
            .user_claims
            .contains(&claim_types::FAMILY_NAME.to_string()));
    }

    #[test]
    fn custom_resource() {
        let resource = IdentityResource::new("verification")
            .with_user_claim(claim_types::EMAIL)
            .with_user_claim(claim_types::EMAIL_VERIFIED);

        assert_eq!(resource.natural_key(), "verification");
        assert_eq!(resource.user_claims.len(), 2);
        assert!(resource.enabled);
    }
}
