//! Storage error types.

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store cannot be reached or queried.
    #[error("store unavailable: {0}")]
    Connection(String),

    /// A query failed.
    #[error("query error: {0}")]
    Query(String),

    /// A transaction could not be started or committed.
    #[error("transaction error: {0}")]
    Transaction(String),

    /// An insert collided with an existing natural key.
    #[error("duplicate {entity_type}: {detail}")]
    Duplicate {
        /// Type of entity (e.g. "Client", "User").
        entity_type: &'static str,
        /// The conflicting key or backend message.
        detail: String,
    },

    /// The data could not be stored or decoded.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Internal storage error.
    #[error("internal storage error: {0}")]
    Internal(String),
}

impl StorageError {
    /// Creates a duplicate-key error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, detail: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            detail: detail.into(),
        }
    }

    /// Checks if this is a duplicate-key error.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Checks if this error means the store is unreachable.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_error() {
        let err = StorageError::duplicate("Client", "web");

        assert!(err.is_duplicate());
        assert!(!err.is_connection());
        assert!(err.to_string().contains("Client"));
        assert!(err.to_string().contains("web"));
    }

    #[test]
    fn connection_error() {
        let err = StorageError::Connection("pool closed".to_string());

        assert!(err.is_connection());
        assert!(!err.is_duplicate());
    }
}
