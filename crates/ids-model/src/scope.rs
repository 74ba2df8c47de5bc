//! API scope domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::key::NaturalKey;

/// An API scope clients can request access to.
///
/// The `name` is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiScope {
    /// Surrogate identifier.
    pub id: Uuid,
    /// Unique scope name.
    pub name: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Whether the scope is enabled.
    pub enabled: bool,
    /// When the scope was created.
    pub created_at: DateTime<Utc>,
    /// When the scope was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ApiScope {
    /// Creates a new API scope with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            display_name: None,
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

impl NaturalKey for ApiScope {
    const ENTITY: &'static str = "ApiScope";

    fn natural_key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_with_display_name() {
        let scope = ApiScope::new("api1").with_display_name("MyAPI");

        assert_eq!(scope.natural_key(), "api1");
        assert_eq!(scope.display_name.as_deref(), Some("MyAPI"));
        assert!(scope.enabled);
    }
}
