//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler of the inbound layer (users, coupons,
//! health) and the envelope schemas from
//! [`crate::inbound::http::schemas`]. The document is served by Swagger UI
//! in debug builds and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::coupons::{CouponResponse, CreateCouponRequest, UpdateCouponRequest};
use crate::inbound::http::health::HealthStatus;
use crate::inbound::http::schemas::{
    CouponEnvelope, CouponListEnvelope, EmptyEnvelope, HealthEnvelope, UserEnvelope,
    UserListEnvelope,
};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rich backend API",
        description = "User and coupon management. Every response uses the \
                       `{code, message, data}` envelope; `code` is `0` on success."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::coupons::list_coupons,
        crate::inbound::http::coupons::get_coupon,
        crate::inbound::http::coupons::create_coupon,
        crate::inbound::http::coupons::update_coupon,
        crate::inbound::http::coupons::delete_coupon,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmptyEnvelope,
        UserEnvelope,
        UserListEnvelope,
        CouponEnvelope,
        CouponListEnvelope,
        HealthEnvelope,
        UserResponse,
        CreateUserRequest,
        UpdateUserRequest,
        CouponResponse,
        CreateCouponRequest,
        UpdateCouponRequest,
        HealthStatus,
    )),
    tags(
        (name = "users", description = "User CRUD"),
        (name = "coupons", description = "Coupon CRUD"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
