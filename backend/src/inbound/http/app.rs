//! Application assembly shared by the server binary and tests.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use super::coupons::{create_coupon, delete_coupon, get_coupon, list_coupons, update_coupon};
use super::error::{json_config, route_not_found};
use super::health::{HealthState, live, ready};
use super::state::HttpState;
use super::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::{Recover, Trace};

/// Prefix shared by every resource route.
pub const API_PREFIX: &str = "/api/v1";

/// Build the application with middleware, resource routes, probes and the
/// unmatched-route fallback.
///
/// Middleware runs outermost first: [`Trace`] assigns the trace id, then
/// [`Recover`] turns handler panics into 500 envelopes.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope(API_PREFIX)
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user)
        .service(list_coupons)
        .service(get_coupon)
        .service(create_coupon)
        .service(update_coupon)
        .service(delete_coupon);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Recover)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live)
        .default_service(web::to(route_not_found))
}
