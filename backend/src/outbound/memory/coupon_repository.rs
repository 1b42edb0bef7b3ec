//! In-memory `CouponRepository` adapter.

use async_trait::async_trait;

use crate::domain::ports::{CouponRepository, StorageError};
use crate::domain::{Coupon, CouponPatch, NewCoupon, RecordId, RequestContext};

use super::store::{RecordStore, StoredRecord};

impl StoredRecord for Coupon {
    type New = NewCoupon;
    type Patch = CouponPatch;

    fn record_id(&self) -> RecordId {
        self.id()
    }

    fn materialise(new: NewCoupon, id: RecordId) -> Self {
        new.with_id(id)
    }

    fn merge(&mut self, patch: CouponPatch) {
        self.apply(patch);
    }
}

/// Process-local coupon storage; contents vanish on restart.
#[derive(Default)]
pub struct InMemoryCouponRepository {
    store: RecordStore<Coupon>,
}

impl InMemoryCouponRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CouponRepository for InMemoryCouponRepository {
    async fn find_all(&self, _ctx: &RequestContext) -> Result<Vec<Coupon>, StorageError> {
        self.store.all()
    }

    async fn find_by_id(
        &self,
        _ctx: &RequestContext,
        id: RecordId,
    ) -> Result<Coupon, StorageError> {
        self.store.get(id)
    }

    async fn create(
        &self,
        _ctx: &RequestContext,
        coupon: NewCoupon,
    ) -> Result<Coupon, StorageError> {
        self.store.insert(coupon)
    }

    async fn update(
        &self,
        _ctx: &RequestContext,
        id: RecordId,
        patch: CouponPatch,
    ) -> Result<Coupon, StorageError> {
        self.store.modify(id, patch)
    }

    async fn delete(&self, _ctx: &RequestContext, id: RecordId) -> Result<(), StorageError> {
        self.store.remove(id)
    }
}
