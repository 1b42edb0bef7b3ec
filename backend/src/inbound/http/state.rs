//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the driving ports and remain testable without storage.

use std::sync::Arc;

use crate::domain::ports::{CouponService, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserService>,
    pub coupons: Arc<dyn CouponService>,
}

impl HttpState {
    /// Bundle the driving ports.
    pub fn new(users: Arc<dyn UserService>, coupons: Arc<dyn CouponService>) -> Self {
        Self { users, coupons }
    }
}
