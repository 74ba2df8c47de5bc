//! Natural-key extraction for configuration entities.

/// A configuration entity identified by a unique, domain-meaningful key.
///
/// The reconciler diffs desired and persisted entity sets by exact string
/// equality on this key. The key is distinct from the storage-internal
/// surrogate id: two records describing the same client share a natural key
/// even when their surrogate ids differ.
pub trait NaturalKey {
    /// Entity type name used in diagnostics and error messages.
    const ENTITY: &'static str;

    /// Returns the entity's natural key.
    fn natural_key(&self) -> &str;
}
