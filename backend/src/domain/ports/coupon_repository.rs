//! Port abstraction for coupon storage adapters.
use async_trait::async_trait;

use crate::domain::{Coupon, CouponPatch, NewCoupon, RecordId, RequestContext};

use super::StorageError;

/// Storage collaborator for coupon records.
///
/// Same contract as [`super::UserRepository`]: owned copies on read,
/// monotonically assigned identifiers, `NotFound` for unknown ids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// Return every stored coupon in insertion order.
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<Coupon>, StorageError>;

    /// Fetch one coupon, or [`StorageError::NotFound`].
    async fn find_by_id(
        &self,
        ctx: &RequestContext,
        id: RecordId,
    ) -> Result<Coupon, StorageError>;

    /// Persist a validated coupon and return it with its new identifier.
    async fn create(&self, ctx: &RequestContext, coupon: NewCoupon)
    -> Result<Coupon, StorageError>;

    /// Merge `patch` into the stored coupon and return the result.
    async fn update(
        &self,
        ctx: &RequestContext,
        id: RecordId,
        patch: CouponPatch,
    ) -> Result<Coupon, StorageError>;

    /// Remove a coupon, or report [`StorageError::NotFound`].
    async fn delete(&self, ctx: &RequestContext, id: RecordId) -> Result<(), StorageError>;
}
