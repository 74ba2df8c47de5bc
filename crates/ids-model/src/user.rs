//! User domain model.
//!
//! Users are seeded accounts with a hashed credential and a set of claims.
//! The username is unique within the store and serves as the lookup key
//! during seeding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A claim attached to a user: a typed key-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type (e.g. `name`, `email`).
    pub claim_type: String,
    /// Claim value.
    pub claim_value: String,
}

impl Claim {
    /// Creates a new claim.
    #[must_use]
    pub fn new(claim_type: impl Into<String>, claim_value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            claim_value: claim_value.into(),
        }
    }
}

/// A user account.
///
/// The credential is stored as a PHC-format hash; the plaintext password
/// never reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Surrogate identifier.
    pub id: Uuid,
    /// Unique username.
    pub username: String,
    /// Email address.
    pub email: Option<String>,
    /// Whether the email has been verified.
    pub email_verified: bool,
    /// Whether the account is enabled.
    pub enabled: bool,
    /// Hashed credential (PHC string), if the user has one.
    pub password_hash: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with the given username.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            username: username.into(),
            email: None,
            email_verified: false,
            enabled: true,
            password_hash: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the email-verified flag.
    #[must_use]
    pub const fn with_email_verified(mut self, verified: bool) -> Self {
        self.email_verified = verified;
        self
    }

    /// Sets the hashed credential.
    #[must_use]
    pub fn with_password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password_hash = Some(hash.into());
        self
    }
}

/// Standard JWT claim type names.
pub mod claim_types {
    /// Subject identifier.
    pub const SUBJECT: &str = "sub";
    /// Full name.
    pub const NAME: &str = "name";
    /// Given (first) name.
    pub const GIVEN_NAME: &str = "given_name";
    /// Family (last) name.
    pub const FAMILY_NAME: &str = "family_name";
    /// Web site URL.
    pub const WEBSITE: &str = "website";
    /// Email address.
    pub const EMAIL: &str = "email";
    /// Email verification status.
    pub const EMAIL_VERIFIED: &str = "email_verified";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_defaults() {
        let user = User::new("alice");

        assert_eq!(user.username, "alice");
        assert!(user.enabled);
        assert!(!user.email_verified);
        assert!(user.password_hash.is_none());
    }

    #[test]
    fn builder_pattern_works() {
        let user = User::new("alice")
            .with_email("AliceSmith@email.com")
            .with_email_verified(true)
            .with_password_hash("$argon2id$stub");

        assert_eq!(user.email.as_deref(), Some("AliceSmith@email.com"));
        assert!(user.email_verified);
        assert!(user.password_hash.is_some());
    }

    #[test]
    fn claims_compare_by_value() {
        let a = Claim::new(claim_types::NAME, "Alice Smith");
        let b = Claim::new(claim_types::NAME, "Alice Smith");
        let c = Claim::new(claim_types::GIVEN_NAME, "Alice");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
