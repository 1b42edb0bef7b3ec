//! User domain service.
//!
//! Implements the [`UserService`] driving port on top of any
//! [`UserRepository`]: raw path identifiers are parsed here, request fields
//! are validated before storage is touched, and storage outcomes are
//! translated through [`Error::from_storage`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{StorageError, UserRepository, UserService};
use crate::domain::{
    BusinessError, EntityClass, Error, NewUser, RecordId, RequestContext, User, UserChanges,
    UserDraft, UserPatch, UserValidationError,
};

const ENTITY: EntityClass = EntityClass::User;

/// User service implementing the driving port.
#[derive(Clone)]
pub struct UserServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> UserServiceImpl<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn invalid_param(err: UserValidationError) -> Error {
    BusinessError::invalid_param(err.to_string()).into()
}

fn parse_id(raw: &str) -> Result<RecordId, Error> {
    Ok(RecordId::parse_for(raw, ENTITY)?)
}

fn storage(err: StorageError) -> Error {
    Error::from_storage(ENTITY, err)
}

#[async_trait]
impl<R> UserService for UserServiceImpl<R>
where
    R: UserRepository,
{
    async fn list(&self, ctx: &RequestContext) -> Result<Vec<User>, Error> {
        self.repository.find_all(ctx).await.map_err(storage)
    }

    async fn get(&self, ctx: &RequestContext, id: &str) -> Result<User, Error> {
        let id = parse_id(id)?;
        self.repository.find_by_id(ctx, id).await.map_err(storage)
    }

    async fn create(&self, ctx: &RequestContext, draft: UserDraft) -> Result<User, Error> {
        let new_user = NewUser::try_from_draft(draft).map_err(invalid_param)?;
        let user = self
            .repository
            .create(ctx, new_user)
            .await
            .map_err(storage)?;
        debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        changes: UserChanges,
    ) -> Result<User, Error> {
        let id = parse_id(id)?;
        let patch = UserPatch::try_from_changes(changes).map_err(invalid_param)?;
        let user = self
            .repository
            .update(ctx, id, patch)
            .await
            .map_err(storage)?;
        debug!(user_id = %id, "user updated");
        Ok(user)
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), Error> {
        let id = parse_id(id)?;
        self.repository.delete(ctx, id).await.map_err(storage)?;
        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
