//! OpenAPI schema definitions for envelope bodies.
//!
//! [`super::envelope::Envelope`] is generic and stays free of utoipa derives.
//! These wrappers spell out each concrete envelope the API returns so the
//! generated document shows the real `data` payloads.

use utoipa::ToSchema;

use super::coupons::CouponResponse;
use super::health::HealthStatus;
use super::users::UserResponse;

/// Envelope without a payload, used for failures and deletions.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmptyEnvelope {
    /// `0` on success, otherwise a business or transport code.
    #[schema(example = 2003)]
    code: u32,
    /// Human-readable outcome.
    #[schema(example = "无效的用户ID")]
    message: String,
    /// Always `null`.
    data: Option<serde_json::Value>,
}

/// Envelope carrying one user.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelope {
    #[schema(example = 0)]
    code: u32,
    #[schema(example = "success")]
    message: String,
    data: Option<UserResponse>,
}

/// Envelope carrying every user.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserListEnvelope {
    #[schema(example = 0)]
    code: u32,
    #[schema(example = "success")]
    message: String,
    data: Option<Vec<UserResponse>>,
}

/// Envelope carrying one coupon.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CouponEnvelope {
    #[schema(example = 0)]
    code: u32,
    #[schema(example = "优惠券创建成功")]
    message: String,
    data: Option<CouponResponse>,
}

/// Envelope carrying every coupon.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CouponListEnvelope {
    #[schema(example = 0)]
    code: u32,
    #[schema(example = "success")]
    message: String,
    data: Option<Vec<CouponResponse>>,
}

/// Envelope returned by the health probes.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HealthEnvelope {
    #[schema(example = 0)]
    code: u32,
    #[schema(example = "服务运行正常")]
    message: String,
    data: Option<HealthStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn envelopes_expose_all_three_keys() {
        for schema_json in [
            schema_to_json::<EmptyEnvelope>(),
            schema_to_json::<UserEnvelope>(),
            schema_to_json::<CouponListEnvelope>(),
            schema_to_json::<HealthEnvelope>(),
        ] {
            for key in ["\"code\"", "\"message\"", "\"data\""] {
                assert!(schema_json.contains(key), "missing {key} in {schema_json}");
            }
        }
    }

    #[test]
    fn payload_schemas_are_referenced_by_name() {
        assert_eq!(UserEnvelope::name(), "UserEnvelope");
        assert!(schema_to_json::<UserEnvelope>().contains("UserResponse"));
        assert!(schema_to_json::<CouponEnvelope>().contains("CouponResponse"));
    }
}
