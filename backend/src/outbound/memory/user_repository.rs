//! In-memory `UserRepository` adapter.

use async_trait::async_trait;

use crate::domain::ports::{StorageError, UserRepository};
use crate::domain::{NewUser, RecordId, RequestContext, User, UserPatch};

use super::store::{RecordStore, StoredRecord};

impl StoredRecord for User {
    type New = NewUser;
    type Patch = UserPatch;

    fn record_id(&self) -> RecordId {
        self.id()
    }

    fn materialise(new: NewUser, id: RecordId) -> Self {
        new.with_id(id)
    }

    fn merge(&mut self, patch: UserPatch) {
        self.apply(patch);
    }
}

/// Process-local user storage; contents vanish on restart.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RecordStore<User>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self, _ctx: &RequestContext) -> Result<Vec<User>, StorageError> {
        self.store.all()
    }

    async fn find_by_id(
        &self,
        _ctx: &RequestContext,
        id: RecordId,
    ) -> Result<User, StorageError> {
        self.store.get(id)
    }

    async fn create(&self, _ctx: &RequestContext, user: NewUser) -> Result<User, StorageError> {
        self.store.insert(user)
    }

    async fn update(
        &self,
        _ctx: &RequestContext,
        id: RecordId,
        patch: UserPatch,
    ) -> Result<User, StorageError> {
        self.store.modify(id, patch)
    }

    async fn delete(&self, _ctx: &RequestContext, id: RecordId) -> Result<(), StorageError> {
        self.store.remove(id)
    }
}
