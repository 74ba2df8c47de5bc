//! User store trait.

use async_trait::async_trait;
use ids_model::{Claim, User};
use uuid::Uuid;

use crate::error::StorageResult;

/// Store for user accounts and their claims.
///
/// Implementations must be thread-safe and support concurrent access.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Gets a user by username.
    async fn find_by_username(&self, username: &str) -> StorageResult<Option<User>>;

    /// Creates a new user.
    ///
    /// ## Errors
    ///
    /// Returns `StorageError::Duplicate` if a user with the same username
    /// exists.
    async fn create(&self, user: &User) -> StorageResult<()>;

    /// Attaches claims to a user as a single unit of work.
    ///
    /// Either every claim is persisted or none are.
    async fn add_claims(&self, user_id: Uuid, claims: &[Claim]) -> StorageResult<()>;

    /// Gets the claims attached to a user, in attachment order.
    async fn get_claims(&self, user_id: Uuid) -> StorageResult<Vec<Claim>>;
}
