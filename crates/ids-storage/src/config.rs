//! Configuration entity store trait.

use async_trait::async_trait;
use ids_model::NaturalKey;

use crate::error::StorageResult;

/// Store for one configuration entity collection.
///
/// Implementations must be thread-safe and support concurrent access.
/// A backend typically implements this trait once per entity type over the
/// same underlying connection.
#[async_trait]
pub trait ConfigEntityStore<T>: Send + Sync
where
    T: NaturalKey + Send + Sync,
{
    /// Loads every persisted entity in the collection.
    async fn list_all(&self) -> StorageResult<Vec<T>>;

    /// Inserts the given entities as a single unit of work.
    ///
    /// Either every entity is persisted or none are: a failure part-way
    /// through must roll back the whole batch.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if an entity's natural key already
    /// exists in the collection.
    async fn insert_many(&self, entities: &[T]) -> StorageResult<()>;
}
