//! Driving port for user use-cases.
//!
//! Inbound adapters hand over raw path identifiers and unvalidated request
//! fields; the implementation parses, validates and talks to storage.

use async_trait::async_trait;

use crate::domain::{Error, RequestContext, User, UserChanges, UserDraft};

/// User operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user.
    async fn list(&self, ctx: &RequestContext) -> Result<Vec<User>, Error>;

    /// Fetch the user named by the raw identifier `id`.
    async fn get(&self, ctx: &RequestContext, id: &str) -> Result<User, Error>;

    /// Validate and store a new user.
    async fn create(&self, ctx: &RequestContext, draft: UserDraft) -> Result<User, Error>;

    /// Validate and merge changes into an existing user.
    async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        changes: UserChanges,
    ) -> Result<User, Error>;

    /// Delete the user named by `id`.
    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), Error>;
}
