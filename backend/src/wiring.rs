//! Composition of domain services over storage adapters.

use std::sync::Arc;

use crate::domain::{CouponServiceImpl, UserServiceImpl};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryCouponRepository, InMemoryUserRepository};

/// Handler state backed by fresh, empty in-memory repositories.
///
/// Identifiers start at `1` for each resource.
#[must_use]
pub fn in_memory_http_state() -> HttpState {
    let users = UserServiceImpl::new(Arc::new(InMemoryUserRepository::new()));
    let coupons = CouponServiceImpl::new(Arc::new(InMemoryCouponRepository::new()));
    HttpState::new(Arc::new(users), Arc::new(coupons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RequestContext, UserDraft};

    #[tokio::test]
    async fn states_do_not_share_storage() {
        let first = in_memory_http_state();
        let second = in_memory_http_state();
        let ctx = RequestContext::default();

        first
            .users
            .create(
                &ctx,
                UserDraft {
                    name: "Ann".into(),
                    email: "ann@example.com".into(),
                },
            )
            .await
            .expect("create succeeds");

        assert_eq!(first.users.list(&ctx).await.expect("list").len(), 1);
        assert!(second.users.list(&ctx).await.expect("list").is_empty());
        assert!(second.coupons.list(&ctx).await.expect("list").is_empty());
    }
}
