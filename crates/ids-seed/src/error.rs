//! Seeding error types.

use ids_storage::StorageError;
use thiserror::Error;

/// Errors that abort startup reconciliation.
///
/// None of these are retried or recovered locally; each propagates to the
/// bootstrap path, which must not reach the serving state.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A read or write against the persisted store failed.
    #[error(transparent)]
    Store(#[from] StorageError),

    /// A seed user could not be created.
    ///
    /// Carries the first reported failure reason (e.g. credential hashing
    /// or account validation).
    #[error("user '{username}' could not be created: {reason}")]
    UserCreation {
        /// The seed user's username.
        username: String,
        /// First reported failure reason.
        reason: String,
    },

    /// Claims could not be attached to a newly created user.
    ///
    /// The user already exists at this point; a later run will find it and
    /// skip re-seeding, so its claims stay missing. That residual state is
    /// accepted, not remediated.
    #[error("claims could not be attached to user '{username}': {reason}")]
    ClaimAttachment {
        /// The seed user's username.
        username: String,
        /// First reported failure reason.
        reason: String,
    },
}

impl SeedError {
    /// Creates a user-creation error.
    #[must_use]
    pub fn user_creation(username: impl Into<String>, reason: impl ToString) -> Self {
        Self::UserCreation {
            username: username.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates a claim-attachment error.
    #[must_use]
    pub fn claim_attachment(username: impl Into<String>, reason: impl ToString) -> Self {
        Self::ClaimAttachment {
            username: username.into(),
            reason: reason.to_string(),
        }
    }

    /// Checks if the underlying cause is an unreachable store.
    #[must_use]
    pub const fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_connection())
    }

    /// Checks if the underlying cause is a natural-key collision.
    #[must_use]
    pub const fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_duplicate())
    }
}

/// Result type for seeding operations.
pub type SeedResult<T> = Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_classification() {
        let unavailable = SeedError::from(StorageError::Connection("refused".to_string()));
        assert!(unavailable.is_store_unavailable());
        assert!(!unavailable.is_constraint_violation());

        let collision = SeedError::from(StorageError::duplicate("Client", "web"));
        assert!(collision.is_constraint_violation());
        assert!(!collision.is_store_unavailable());
    }

    #[test]
    fn user_errors_carry_the_reason() {
        let err = SeedError::user_creation("alice", "password too weak");
        assert!(err.to_string().contains("alice"));
        assert!(err.to_string().contains("password too weak"));

        let err = SeedError::claim_attachment("bob", "store gone");
        assert!(err.to_string().contains("bob"));
        assert!(!err.is_store_unavailable());
    }
}
