//! Coupons API handlers.
//!
//! ```text
//! GET    /api/v1/coupons
//! GET    /api/v1/coupons/{id}
//! POST   /api/v1/coupons {"name":"A","discountType":"percent","discountValue":10,"minAmount":0}
//! PUT    /api/v1/coupons/{id} {"status":"inactive"}
//! DELETE /api/v1/coupons/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::domain::{Coupon, CouponChanges, CouponDraft, RequestContext};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{CouponEnvelope, CouponListEnvelope, EmptyEnvelope};
use crate::inbound::http::state::HttpState;

/// Coupon as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponse {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "满减优惠")]
    pub name: String,
    #[schema(example = "满100减20")]
    pub description: String,
    #[schema(example = "fixed")]
    pub discount_type: String,
    #[serde(serialize_with = "amount")]
    #[schema(example = 20)]
    pub discount_value: f64,
    #[serde(serialize_with = "amount")]
    #[schema(example = 100)]
    pub min_amount: f64,
    #[schema(example = "active")]
    pub status: String,
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Renders whole amounts without a fraction (`10`, not `10.0`).
fn amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "whole values below 2^53 convert to i64 exactly"
        )]
        let whole = *value as i64;
        serializer.serialize_i64(whole)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id().get(),
            name: coupon.name().to_owned(),
            description: coupon.description().to_owned(),
            discount_type: coupon.discount_type().to_string(),
            discount_value: coupon.discount_value(),
            min_amount: coupon.min_amount(),
            status: coupon.status().to_string(),
        }
    }
}

/// Request body for `POST /api/v1/coupons`.
///
/// Missing or `null` fields decode as empty strings or zero so the domain
/// rules report them; `status` may be left out and defaults to `active`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCouponRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(example = "percent")]
    pub discount_type: Option<String>,
    #[schema(example = 10)]
    pub discount_value: Option<f64>,
    pub min_amount: Option<f64>,
    pub status: Option<String>,
}

impl From<CreateCouponRequest> for CouponDraft {
    fn from(value: CreateCouponRequest) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            discount_type: value.discount_type.unwrap_or_default(),
            discount_value: value.discount_value,
            min_amount: value.min_amount.unwrap_or_default(),
            status: value.status.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /api/v1/coupons/{id}`; omitted or empty fields are
/// kept.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCouponRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<String>,
    pub discount_value: Option<f64>,
    pub min_amount: Option<f64>,
    pub status: Option<String>,
}

impl From<UpdateCouponRequest> for CouponChanges {
    fn from(value: UpdateCouponRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            discount_type: value.discount_type,
            discount_value: value.discount_value,
            min_amount: value.min_amount,
            status: value.status,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/coupons",
    responses(
        (status = 200, description = "Coupons", body = CouponListEnvelope),
        (status = 500, description = "Internal server error", body = EmptyEnvelope)
    ),
    tags = ["coupons"],
    operation_id = "listCoupons"
)]
#[get("/coupons")]
pub async fn list_coupons(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Envelope<Vec<CouponResponse>>>> {
    let coupons = state.coupons.list(&RequestContext::current()).await?;
    let data = coupons.into_iter().map(CouponResponse::from).collect();
    Ok(web::Json(Envelope::ok(data)))
}

#[utoipa::path(
    get,
    path = "/api/v1/coupons/{id}",
    params(("id" = String, Path, description = "Decimal coupon identifier")),
    responses(
        (status = 200, description = "Coupon", body = CouponEnvelope),
        (status = 404, description = "Unknown or malformed id (3001/3003)", body = EmptyEnvelope)
    ),
    tags = ["coupons"],
    operation_id = "getCoupon"
)]
#[get("/coupons/{id}")]
pub async fn get_coupon(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Envelope<CouponResponse>>> {
    let coupon = state.coupons.get(&RequestContext::current(), &id).await?;
    Ok(web::Json(Envelope::ok(coupon.into())))
}

/// Create a coupon.
#[utoipa::path(
    post,
    path = "/api/v1/coupons",
    request_body = CreateCouponRequest,
    responses(
        (status = 200, description = "Created, or rule violation (code 1001)", body = CouponEnvelope),
        (status = 400, description = "Malformed body", body = EmptyEnvelope)
    ),
    tags = ["coupons"],
    operation_id = "createCoupon"
)]
#[post("/coupons")]
pub async fn create_coupon(
    state: web::Data<HttpState>,
    payload: web::Json<CreateCouponRequest>,
) -> ApiResult<web::Json<Envelope<CouponResponse>>> {
    let draft = CouponDraft::from(payload.into_inner());
    let coupon = state
        .coupons
        .create(&RequestContext::current(), draft)
        .await?;
    Ok(web::Json(Envelope::ok_with_message(
        "优惠券创建成功",
        coupon.into(),
    )))
}

/// Merge changes into a coupon.
#[utoipa::path(
    put,
    path = "/api/v1/coupons/{id}",
    params(("id" = String, Path, description = "Decimal coupon identifier")),
    request_body = UpdateCouponRequest,
    responses(
        (status = 200, description = "Updated, or rule violation (code 1001)", body = CouponEnvelope),
        (status = 400, description = "Malformed body", body = EmptyEnvelope),
        (status = 404, description = "Unknown or malformed id (3001/3003)", body = EmptyEnvelope)
    ),
    tags = ["coupons"],
    operation_id = "updateCoupon"
)]
#[put("/coupons/{id}")]
pub async fn update_coupon(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<UpdateCouponRequest>,
) -> ApiResult<web::Json<Envelope<CouponResponse>>> {
    let changes = CouponChanges::from(payload.into_inner());
    let coupon = state
        .coupons
        .update(&RequestContext::current(), &id, changes)
        .await?;
    Ok(web::Json(Envelope::ok_with_message(
        "优惠券更新成功",
        coupon.into(),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/coupons/{id}",
    params(("id" = String, Path, description = "Decimal coupon identifier")),
    responses(
        (status = 200, description = "Deleted", body = EmptyEnvelope),
        (status = 404, description = "Unknown or malformed id (3001/3003)", body = EmptyEnvelope)
    ),
    tags = ["coupons"],
    operation_id = "deleteCoupon"
)]
#[delete("/coupons/{id}")]
pub async fn delete_coupon(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Envelope<()>>> {
    state.coupons.delete(&RequestContext::current(), &id).await?;
    Ok(web::Json(Envelope::ok_empty("优惠券删除成功")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockCouponService, MockUserService};
    use crate::domain::{BusinessError, EntityClass, Error, NewCoupon, RecordId};
    use crate::inbound::http::test_utils::{send, state_with};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    fn coupons_only(coupons: MockCouponService) -> HttpState {
        state_with(MockUserService::new(), coupons)
    }

    fn percent_coupon() -> Coupon {
        NewCoupon::try_from_draft(CouponDraft {
            name: "A".into(),
            discount_type: "percent".into(),
            discount_value: Some(10.0),
            ..CouponDraft::default()
        })
        .expect("valid draft")
        .with_id(RecordId::new(1))
    }

    #[actix_web::test]
    async fn create_renders_camel_case_coupon() {
        let mut coupons = MockCouponService::new();
        coupons
            .expect_create()
            .withf(|_, draft| {
                draft.discount_type == "percent"
                    && draft.discount_value == Some(10.0)
                    && draft.status.is_empty()
            })
            .times(1)
            .return_once(|_, _| Ok(percent_coupon()));

        let request = actix_test::TestRequest::post().uri("/api/v1/coupons").set_json(json!({
            "name": "A",
            "discountType": "percent",
            "discountValue": 10,
            "minAmount": 0
        }));
        let (status, body) = send(coupons_only(coupons), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "code": 0,
                "message": "优惠券创建成功",
                "data": {
                    "id": 1,
                    "name": "A",
                    "description": "",
                    "discountType": "percent",
                    "discountValue": 10,
                    "minAmount": 0,
                    "status": "active"
                }
            })
        );
    }

    #[rstest::rstest]
    #[case(10.0, json!(10))]
    #[case(0.0, json!(0))]
    #[case(7.5, json!(7.5))]
    #[case(1e300, json!(1e300))]
    fn whole_amounts_render_without_a_fraction(#[case] amount: f64, #[case] expected: Value) {
        let mut response = CouponResponse::from(percent_coupon());
        response.discount_value = amount;
        response.min_amount = amount;

        let rendered = serde_json::to_value(&response).expect("coupon serialises");
        assert_eq!(rendered["discountValue"], expected);
        assert_eq!(rendered["minAmount"], expected);
    }

    #[actix_web::test]
    async fn rule_violations_render_200_with_generic_code() {
        let mut coupons = MockCouponService::new();
        coupons
            .expect_create()
            .times(1)
            .return_once(|_, _| Err(BusinessError::invalid_param("无效的折扣类型").into()));

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/coupons")
            .set_json(json!({"name": "A", "discountType": "bogus", "discountValue": 10}));
        let (status, body) = send(coupons_only(coupons), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"code": 1001, "message": "无效的折扣类型", "data": null})
        );
    }

    #[actix_web::test]
    async fn deleting_unknown_coupon_is_404() {
        let mut coupons = MockCouponService::new();
        coupons
            .expect_delete()
            .withf(|_, id| id == "999")
            .times(1)
            .return_once(|_, _| Err(Error::Business(EntityClass::Coupon.not_found())));

        let (status, body) = send(
            coupons_only(coupons),
            actix_test::TestRequest::delete().uri("/api/v1/coupons/999"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"code": 3001, "message": "优惠券不存在", "data": null})
        );
    }

    #[actix_web::test]
    async fn update_passes_optional_numbers_through() {
        let mut coupons = MockCouponService::new();
        coupons
            .expect_update()
            .withf(|_, id, changes| {
                id == "1"
                    && changes.min_amount == Some(5.0)
                    && changes.discount_value.is_none()
                    && changes.name.is_none()
            })
            .times(1)
            .return_once(|_, _, _| Ok(percent_coupon()));

        let request = actix_test::TestRequest::put()
            .uri("/api/v1/coupons/1")
            .set_json(json!({"minAmount": 5}));
        let (status, body) = send(coupons_only(coupons), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "优惠券更新成功");
    }

    #[actix_web::test]
    async fn wrong_json_types_are_binding_errors() {
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/coupons")
            .set_json(json!({"name": "A", "discountValue": "ten"}));
        let (status, body) = send(coupons_only(MockCouponService::new()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }
}
