//! In-memory store implementations for development and testing.
//!
//! These mirror the semantics of the SQL backend, including natural-key
//! uniqueness and all-or-nothing batch inserts, so the reconciler can be
//! exercised without a database.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use ids_model::{Claim, NaturalKey, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ConfigEntityStore;
use crate::error::{StorageError, StorageResult};
use crate::user::UserStore;

/// In-memory configuration entity store.
pub struct MemoryConfigStore<T> {
    entities: RwLock<Vec<T>>,
}

impl<T> MemoryConfigStore<T> {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }
}

impl<T: NaturalKey + Clone + Send + Sync> MemoryConfigStore<T> {
    /// Creates a store pre-populated with the given entities.
    #[must_use]
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }
}

impl<T> Default for MemoryConfigStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> ConfigEntityStore<T> for MemoryConfigStore<T>
where
    T: NaturalKey + Clone + Send + Sync,
{
    async fn list_all(&self) -> StorageResult<Vec<T>> {
        Ok(self.entities.read().await.clone())
    }

    async fn insert_many(&self, entities: &[T]) -> StorageResult<()> {
        let mut current = self.entities.write().await;

        // Uniqueness check first so a conflicting batch leaves no residue,
        // matching the SQL backend's transactional rollback. Keys must be
        // unique against the store and within the batch itself.
        let mut batch_keys = HashSet::new();
        for entity in entities {
            let key = entity.natural_key();
            if !batch_keys.insert(key)
                || current.iter().any(|e| e.natural_key() == key)
            {
                return Err(StorageError::duplicate(T::ENTITY, key));
            }
        }

        current.extend_from_slice(entities);
        Ok(())
    }
}

/// In-memory user store.
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
    claims: RwLock<HashMap<Uuid, Vec<Claim>>>,
}

impl MemoryUserStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            claims: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of stored users.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, user: &User) -> StorageResult<()> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == user.username) {
            return Err(StorageError::duplicate("User", user.username.clone()));
        }

        users.push(user.clone());
        Ok(())
    }

    async fn add_claims(&self, user_id: Uuid, claims: &[Claim]) -> StorageResult<()> {
        self.claims
            .write()
            .await
            .entry(user_id)
            .or_default()
            .extend_from_slice(claims);
        Ok(())
    }

    async fn get_claims(&self, user_id: Uuid) -> StorageResult<Vec<Claim>> {
        Ok(self
            .claims
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}
