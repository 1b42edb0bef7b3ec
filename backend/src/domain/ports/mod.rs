//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod coupon_repository;
mod coupon_service;
mod storage;
mod user_repository;
mod user_service;

#[cfg(test)]
pub use coupon_repository::MockCouponRepository;
pub use coupon_repository::CouponRepository;
#[cfg(test)]
pub use coupon_service::MockCouponService;
pub use coupon_service::CouponService;
pub use storage::StorageError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::UserService;
