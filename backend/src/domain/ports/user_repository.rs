//! Port abstraction for user storage adapters.
use async_trait::async_trait;

use crate::domain::{NewUser, RecordId, RequestContext, User, UserPatch};

use super::StorageError;

/// Storage collaborator for user records.
///
/// Reads hand back owned copies; mutating them never touches stored state.
/// Identifiers are assigned by the adapter, start at 1 and are never reused.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in insertion order.
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<User>, StorageError>;

    /// Fetch one user, or [`StorageError::NotFound`].
    async fn find_by_id(&self, ctx: &RequestContext, id: RecordId)
    -> Result<User, StorageError>;

    /// Persist a validated user and return it with its new identifier.
    async fn create(&self, ctx: &RequestContext, user: NewUser) -> Result<User, StorageError>;

    /// Merge `patch` into the stored user and return the result.
    async fn update(
        &self,
        ctx: &RequestContext,
        id: RecordId,
        patch: UserPatch,
    ) -> Result<User, StorageError>;

    /// Remove a user, or report [`StorageError::NotFound`].
    async fn delete(&self, ctx: &RequestContext, id: RecordId) -> Result<(), StorageError>;
}
