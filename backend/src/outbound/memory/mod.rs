//! Process-local storage adapters.
//!
//! Both repositories share `RecordStore`, a mutex-guarded vector
//! safe to use from every Actix worker.

mod coupon_repository;
mod store;
mod user_repository;

pub use coupon_repository::InMemoryCouponRepository;
pub use user_repository::InMemoryUserRepository;
