//! Tests for failure classification and envelope rendering.

use super::*;
use crate::domain::ports::StorageError;
use crate::domain::{EntityClass, ErrorCode};
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

async fn render(error: ApiError) -> (StatusCode, Value) {
    let response = error.error_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body()).await.expect("body bytes");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

#[rstest]
#[case(EntityClass::User.not_found(), StatusCode::NOT_FOUND)]
#[case(EntityClass::User.invalid_id(), StatusCode::NOT_FOUND)]
#[case(EntityClass::Coupon.not_found(), StatusCode::NOT_FOUND)]
#[case(EntityClass::Coupon.invalid_id(), StatusCode::NOT_FOUND)]
#[case(BusinessError::invalid_param("折扣值必须大于 0"), StatusCode::OK)]
#[case(BusinessError::from_code(ErrorCode::NOT_FOUND), StatusCode::OK)]
#[case(BusinessError::from_code(ErrorCode::USER_ALREADY_EXISTS), StatusCode::OK)]
#[case(BusinessError::from_code(ErrorCode::INVALID_DISCOUNT_TYPE), StatusCode::OK)]
#[actix_web::test]
async fn business_errors_render_their_code(#[case] err: BusinessError, #[case] status: StatusCode) {
    let code = err.code().value();
    let message = err.message().to_owned();

    let (actual, body) = render(ApiError::Business(err)).await;
    assert_eq!(actual, status);
    assert_eq!(body, json!({"code": code, "message": message, "data": null}));
}

#[actix_web::test]
async fn binding_errors_keep_raw_text() {
    let (status, body) = render(ApiError::Binding("expected value at line 1".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"code": 400, "message": "expected value at line 1", "data": null})
    );
}

#[actix_web::test]
async fn unmatched_routes_render_generic_not_found() {
    let (status, body) = render(ApiError::RouteNotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"code": 404, "message": "资源不存在", "data": null}));
}

#[actix_web::test]
async fn storage_failures_are_redacted() {
    let domain = Error::from_storage(EntityClass::User, StorageError::unavailable("lock poisoned"));
    let api = ApiError::from(domain);
    assert!(matches!(&api, ApiError::Internal(detail) if detail.contains("lock poisoned")));

    let (status, body) = render(api).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 500);
    assert_eq!(body["message"], "内部服务器错误");
    assert!(!body.to_string().contains("lock poisoned"));
}

#[rstest]
fn storage_not_found_arrives_as_entity_error() {
    let domain = Error::from_storage(EntityClass::Coupon, StorageError::NotFound);
    let api = ApiError::from(domain);
    assert_eq!(api.status_code(), StatusCode::NOT_FOUND);
    assert!(matches!(api, ApiError::Business(err) if err.code() == ErrorCode::COUPON_NOT_FOUND));
}
