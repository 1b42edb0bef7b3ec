//! Coupon domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{CouponRepository, CouponService, StorageError};
use crate::domain::{
    BusinessError, Coupon, CouponChanges, CouponDraft, CouponPatch, CouponValidationError,
    EntityClass, Error, NewCoupon, RecordId, RequestContext,
};

const ENTITY: EntityClass = EntityClass::Coupon;

/// Coupon service implementing the driving port.
///
/// Every rule violation, including an unknown discount type, is reported as
/// the generic invalid-parameter error; only identifier parsing and lookups
/// produce coupon-specific codes.
#[derive(Clone)]
pub struct CouponServiceImpl<R> {
    repository: Arc<R>,
}

impl<R> CouponServiceImpl<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn invalid_param(err: CouponValidationError) -> Error {
    BusinessError::invalid_param(err.to_string()).into()
}

fn parse_id(raw: &str) -> Result<RecordId, Error> {
    Ok(RecordId::parse_for(raw, ENTITY)?)
}

fn storage(err: StorageError) -> Error {
    Error::from_storage(ENTITY, err)
}

#[async_trait]
impl<R> CouponService for CouponServiceImpl<R>
where
    R: CouponRepository,
{
    async fn list(&self, ctx: &RequestContext) -> Result<Vec<Coupon>, Error> {
        self.repository.find_all(ctx).await.map_err(storage)
    }

    async fn get(&self, ctx: &RequestContext, id: &str) -> Result<Coupon, Error> {
        let id = parse_id(id)?;
        self.repository.find_by_id(ctx, id).await.map_err(storage)
    }

    async fn create(&self, ctx: &RequestContext, draft: CouponDraft) -> Result<Coupon, Error> {
        let new_coupon = NewCoupon::try_from_draft(draft).map_err(invalid_param)?;
        let coupon = self
            .repository
            .create(ctx, new_coupon)
            .await
            .map_err(storage)?;
        debug!(
            coupon_id = %coupon.id(),
            discount_type = %coupon.discount_type(),
            status = %coupon.status(),
            "coupon created"
        );
        Ok(coupon)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: &str,
        changes: CouponChanges,
    ) -> Result<Coupon, Error> {
        let id = parse_id(id)?;
        let patch = CouponPatch::try_from_changes(changes).map_err(invalid_param)?;
        let coupon = self
            .repository
            .update(ctx, id, patch)
            .await
            .map_err(storage)?;
        debug!(coupon_id = %id, "coupon updated");
        Ok(coupon)
    }

    async fn delete(&self, ctx: &RequestContext, id: &str) -> Result<(), Error> {
        let id = parse_id(id)?;
        self.repository.delete(ctx, id).await.map_err(storage)?;
        debug!(coupon_id = %id, "coupon deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "coupon_service_tests.rs"]
mod tests;
