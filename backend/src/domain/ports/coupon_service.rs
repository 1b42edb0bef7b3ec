//! Driving port for coupon use-cases.

use async_trait::async_trait;

use crate::domain::{Coupon, CouponChanges, CouponDraft, Error, RequestContext};

/// Coupon operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CouponService: Send + Sync {
    /// List every coupon.
    async fn list(&self, ctx: &RequestContext) -> Result<Vec<Coupon>, Error>;

    /// Fetch the coupon named by the raw identifier `id`.
    async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Coupon, Error>;

    /// Validate and store a new coupon, defaulting its status to active.
    async fn create(&self, ctx: &RequestContext, draft: CouponDraft) -> Result<Coupon, Error>;

    /// Validate and merge changes into an existing coupon.
    async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        changes: CouponChanges,
    ) -> Result<Coupon, Error>;

    /// Delete the coupon named by `id`.
    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), Error>;
}
