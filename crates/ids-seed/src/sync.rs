//! Generic diff-and-insert synchronization.
//!
//! One algorithm applied to every configuration entity type: load the
//! persisted set, compute which desired entities are missing by natural key,
//! and insert only those. Entities already in the store are never updated or
//! deleted, so the persisted key set only ever grows.

use std::collections::HashSet;

use ids_model::NaturalKey;
use ids_storage::ConfigEntityStore;

use crate::error::SeedResult;

/// Outcome of synchronizing one entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    /// Entities already persisted before the run.
    pub existing: usize,
    /// Entities inserted by this run.
    pub inserted: usize,
}

impl SyncSummary {
    /// Returns true if the run inserted nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.inserted == 0
    }
}

/// Ensures every desired entity is present in the store.
///
/// An empty store takes the batch path: all desired entities are inserted
/// in one unit of work. Otherwise the missing set is computed by exact
/// natural-key comparison. Matching counts are never taken as evidence that
/// the sets match; only the key comparison decides.
///
/// # Errors
///
/// Propagates the first storage failure; nothing is retried.
pub async fn sync_entities<T, S>(store: &S, desired: Vec<T>) -> SeedResult<SyncSummary>
where
    T: NaturalKey + Send + Sync,
    S: ConfigEntityStore<T> + ?Sized,
{
    let current = store.list_all().await?;

    if current.is_empty() {
        let inserted = desired.len();
        store.insert_many(&desired).await?;
        tracing::info!(entity = T::ENTITY, inserted, "seeded empty collection");
        return Ok(SyncSummary {
            existing: 0,
            inserted,
        });
    }

    let persisted_keys: HashSet<&str> = current.iter().map(NaturalKey::natural_key).collect();
    let missing: Vec<T> = desired
        .into_iter()
        .filter(|d| !persisted_keys.contains(d.natural_key()))
        .collect();

    if missing.is_empty() {
        tracing::debug!(
            entity = T::ENTITY,
            existing = current.len(),
            "collection already synchronized"
        );
        return Ok(SyncSummary {
            existing: current.len(),
            inserted: 0,
        });
    }

    store.insert_many(&missing).await?;
    tracing::info!(
        entity = T::ENTITY,
        existing = current.len(),
        inserted = missing.len(),
        "inserted missing entities"
    );

    Ok(SyncSummary {
        existing: current.len(),
        inserted: missing.len(),
    })
}
