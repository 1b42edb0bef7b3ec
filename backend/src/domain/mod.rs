//! Domain primitives, services and ports.
//!
//! Purpose: hold the business rules for users and coupons independently of
//! HTTP and storage. Inbound adapters call the driving ports in [`ports`];
//! outbound adapters implement the storage ports.
//!
//! Public surface:
//! - `BusinessError`, `ErrorCode`, `ErrorBand`, `EntityClass`: the numeric
//!   error model shared with clients.
//! - `Error`: what the services return (business or storage failure).
//! - `User`, `Coupon` and their draft/changes/patch companions.
//! - `UserServiceImpl`, `CouponServiceImpl`: the driving port implementations.

pub mod context;
pub mod coupon;
pub mod coupon_service;
pub mod error;
pub mod error_code;
pub mod ports;
pub mod record_id;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::context::RequestContext;
pub use self::coupon::{
    Coupon, CouponChanges, CouponDraft, CouponPatch, CouponStatus, CouponValidationError,
    DiscountType, NewCoupon,
};
pub use self::coupon_service::CouponServiceImpl;
pub use self::error::{BusinessError, Error};
pub use self::error_code::{EntityClass, ErrorBand, ErrorCode};
pub use self::record_id::{RecordId, RecordIdError};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserChanges, UserDraft, UserPatch, UserValidationError};
pub use self::user_service::UserServiceImpl;
