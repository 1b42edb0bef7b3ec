//! Tests for the coupon service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockCouponRepository;
use crate::domain::{CouponStatus, DiscountType, ErrorCode};
use rstest::rstest;

fn make_service(repo: MockCouponRepository) -> CouponServiceImpl<MockCouponRepository> {
    CouponServiceImpl::new(Arc::new(repo))
}

fn draft() -> CouponDraft {
    CouponDraft {
        name: "A".into(),
        discount_type: "percent".into(),
        discount_value: Some(10.0),
        ..CouponDraft::default()
    }
}

fn stored(id: u32) -> Coupon {
    NewCoupon::try_from_draft(draft())
        .expect("valid draft")
        .with_id(RecordId::new(id))
}

fn assert_business(err: &Error, code: ErrorCode, message: &str) {
    let business = err.as_business().expect("business error");
    assert_eq!(business.code(), code);
    assert_eq!(business.message(), message);
}

#[tokio::test]
async fn create_defaults_status_and_stores() {
    let mut repo = MockCouponRepository::new();
    repo.expect_create()
        .withf(|_, coupon| coupon.status() == CouponStatus::Active)
        .times(1)
        .return_once(|_, coupon| Ok(coupon.with_id(RecordId::new(1))));

    let coupon = make_service(repo)
        .create(&RequestContext::default(), draft())
        .await
        .expect("created");
    assert_eq!(coupon.id(), RecordId::new(1));
    assert_eq!(coupon.discount_type(), DiscountType::Percent);
    assert_eq!(coupon.status(), CouponStatus::Active);
}

#[rstest]
#[case::bogus_type(CouponDraft { discount_type: "bogus".into(), ..draft() }, "无效的折扣类型")]
#[case::zero_value(CouponDraft { discount_value: Some(0.0), ..draft() }, "折扣值必须大于 0")]
#[case::negative_min(CouponDraft { min_amount: -1.0, ..draft() }, "最低使用金额不能小于 0")]
#[case::empty_name(CouponDraft { name: String::new(), ..draft() }, "优惠券名称不能为空")]
#[case::bad_status(CouponDraft { status: "gone".into(), ..draft() }, "无效的优惠券状态")]
#[tokio::test]
async fn rule_violations_use_the_generic_code(#[case] input: CouponDraft, #[case] message: &str) {
    let mut repo = MockCouponRepository::new();
    repo.expect_create().never();

    let err = make_service(repo)
        .create(&RequestContext::default(), input)
        .await
        .expect_err("rejected");
    assert_business(&err, ErrorCode::INVALID_PARAM, message);
}

#[rstest]
#[case(0.0)]
#[case(-3.5)]
#[tokio::test]
async fn update_rejects_non_positive_discount_before_storage(#[case] value: f64) {
    let mut repo = MockCouponRepository::new();
    repo.expect_update().never();

    let err = make_service(repo)
        .update(
            &RequestContext::default(),
            "1",
            CouponChanges {
                discount_value: Some(value),
                ..CouponChanges::default()
            },
        )
        .await
        .expect_err("rejected");
    assert_business(&err, ErrorCode::INVALID_PARAM, "折扣值必须大于 0");
}

#[tokio::test]
async fn update_merges_through_storage() {
    let mut repo = MockCouponRepository::new();
    repo.expect_update()
        .withf(|_, id, patch| *id == RecordId::new(4) && !patch.is_empty())
        .times(1)
        .return_once(|_, _, patch| {
            let mut coupon = stored(4);
            coupon.apply(patch);
            Ok(coupon)
        });

    let coupon = make_service(repo)
        .update(
            &RequestContext::default(),
            "4",
            CouponChanges {
                status: Some("inactive".into()),
                ..CouponChanges::default()
            },
        )
        .await
        .expect("updated");
    assert_eq!(coupon.status(), CouponStatus::Inactive);
    assert_eq!(coupon.name(), "A");
}

#[rstest]
#[case("abc")]
#[case("1e3")]
#[case(" 2")]
#[tokio::test]
async fn malformed_ids_report_invalid_coupon_id(#[case] raw: &str) {
    let mut repo = MockCouponRepository::new();
    repo.expect_find_by_id().never();

    let err = make_service(repo)
        .get(&RequestContext::default(), raw)
        .await
        .expect_err("rejected");
    assert_business(&err, ErrorCode::INVALID_COUPON_ID, "无效的优惠券ID");
}

#[tokio::test]
async fn missing_coupon_is_translated() {
    let mut repo = MockCouponRepository::new();
    repo.expect_delete()
        .withf(|_, id| *id == RecordId::new(999))
        .times(1)
        .return_once(|_, _| Err(StorageError::not_found()));
    repo.expect_update()
        .times(1)
        .return_once(|_, _, _| Err(StorageError::not_found()));
    let service = make_service(repo);
    let ctx = RequestContext::default();

    let delete = service.delete(&ctx, "999").await.expect_err("missing");
    assert_business(&delete, ErrorCode::COUPON_NOT_FOUND, "优惠券不存在");

    let update = service
        .update(&ctx, "999", CouponChanges::default())
        .await
        .expect_err("missing");
    assert_business(&update, ErrorCode::COUPON_NOT_FOUND, "优惠券不存在");
}

#[tokio::test]
async fn list_returns_storage_copies() {
    let mut repo = MockCouponRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(|_| Ok(vec![stored(1), stored(2)]));

    let coupons = make_service(repo)
        .list(&RequestContext::default())
        .await
        .expect("listed");
    let ids: Vec<u32> = coupons.iter().map(|c| c.id().get()).collect();
    assert_eq!(ids, [1, 2]);
}

#[tokio::test]
async fn query_failures_are_not_business_errors() {
    let mut repo = MockCouponRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_, _| Err(StorageError::query("identifier space exhausted")));

    let err = make_service(repo)
        .get(&RequestContext::default(), "1")
        .await
        .expect_err("storage failure");
    assert!(err.as_business().is_none());
}
