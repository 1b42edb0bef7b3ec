//! Tests for the user service.

use std::sync::Arc;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockUserRepository, StorageError};
use rstest::rstest;

fn make_service(repo: MockUserRepository) -> UserServiceImpl<MockUserRepository> {
    UserServiceImpl::new(Arc::new(repo))
}

fn ada(id: u32) -> User {
    NewUser::try_from_draft(UserDraft {
        name: "Ada".into(),
        email: "ada@example.com".into(),
    })
    .expect("valid draft")
    .with_id(RecordId::new(id))
}

fn business_code(err: &Error) -> ErrorCode {
    err.as_business().expect("business error").code()
}

#[tokio::test]
async fn get_parses_id_and_returns_record() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .withf(|_, id| *id == RecordId::new(7))
        .times(1)
        .return_once(|_, _| Ok(ada(7)));

    let user = make_service(repo)
        .get(&RequestContext::default(), "7")
        .await
        .expect("user found");
    assert_eq!(user.id(), RecordId::new(7));
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("-1")]
#[case("99999999999")]
#[tokio::test]
async fn malformed_ids_never_reach_storage(#[case] raw: &str) {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().never();
    repo.expect_update().never();
    repo.expect_delete().never();
    let service = make_service(repo);
    let ctx = RequestContext::default();

    for err in [
        service.get(&ctx, raw).await.expect_err("get rejected"),
        service
            .update(&ctx, raw, UserChanges::default())
            .await
            .expect_err("update rejected"),
        service.delete(&ctx, raw).await.expect_err("delete rejected"),
    ] {
        assert_eq!(business_code(&err), ErrorCode::INVALID_USER_ID);
    }
}

#[tokio::test]
async fn storage_not_found_becomes_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_, _| Err(StorageError::not_found()));
    repo.expect_delete()
        .times(1)
        .return_once(|_, _| Err(StorageError::not_found()));
    let service = make_service(repo);
    let ctx = RequestContext::default();

    let get = service.get(&ctx, "42").await.expect_err("missing");
    let delete = service.delete(&ctx, "42").await.expect_err("missing");
    for err in [get, delete] {
        let business = err.as_business().expect("business error");
        assert_eq!(business.code(), ErrorCode::USER_NOT_FOUND);
        assert_eq!(business.message(), "用户不存在");
    }
}

#[tokio::test]
async fn other_storage_failures_pass_through() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(|_| Err(StorageError::unavailable("lock poisoned")));

    let err = make_service(repo)
        .list(&RequestContext::default())
        .await
        .expect_err("storage down");
    assert_eq!(err, Error::Storage(StorageError::unavailable("lock poisoned")));
}

#[rstest]
#[case("", "ada@example.com", "用户名不能为空")]
#[case("Ada", "", "邮箱不能为空")]
#[case("Ada", "not-an-email", "邮箱格式不正确")]
#[tokio::test]
async fn create_rejects_invalid_drafts_before_storage(
    #[case] name: &str,
    #[case] email: &str,
    #[case] message: &str,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_create().never();

    let err = make_service(repo)
        .create(
            &RequestContext::default(),
            UserDraft {
                name: name.into(),
                email: email.into(),
            },
        )
        .await
        .expect_err("invalid draft");
    let business = err.as_business().expect("business error");
    assert_eq!(business.code(), ErrorCode::INVALID_PARAM);
    assert_eq!(business.message(), message);
}

#[tokio::test]
async fn create_forwards_validated_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(|_, user| user.name() == "Ada" && user.email() == "ada@example.com")
        .times(1)
        .return_once(|_, user| Ok(user.with_id(RecordId::new(1))));

    let user = make_service(repo)
        .create(
            &RequestContext::default(),
            UserDraft {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            },
        )
        .await
        .expect("created");
    assert_eq!(user, ada(1));
}

#[tokio::test]
async fn update_rejects_malformed_email_before_storage() {
    let mut repo = MockUserRepository::new();
    repo.expect_update().never();

    let err = make_service(repo)
        .update(
            &RequestContext::default(),
            "1",
            UserChanges {
                name: None,
                email: Some("nope".into()),
            },
        )
        .await
        .expect_err("invalid email");
    assert_eq!(business_code(&err), ErrorCode::INVALID_PARAM);
}

#[tokio::test]
async fn update_drops_empty_fields_from_patch() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .withf(|_, id, patch| *id == RecordId::new(1) && patch.is_empty())
        .times(1)
        .return_once(|_, _, _| Ok(ada(1)));

    let user = make_service(repo)
        .update(
            &RequestContext::default(),
            "1",
            UserChanges {
                name: Some(String::new()),
                email: Some(String::new()),
            },
        )
        .await
        .expect("updated");
    assert_eq!(user, ada(1));
}
