//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use serde_json::Value;

use super::app::build_app;
use super::health::HealthState;
use super::state::HttpState;
use crate::domain::ports::{MockCouponService, MockUserService};

/// Bundle service mocks into handler state.
pub fn state_with(users: MockUserService, coupons: MockCouponService) -> HttpState {
    HttpState::new(Arc::new(users), Arc::new(coupons))
}

/// Send one request through the fully assembled app and decode the JSON
/// body.
pub async fn send(state: HttpState, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(build_app(
        web::Data::new(HealthState::new()),
        web::Data::new(state),
    ))
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}
