//! Health endpoints: liveness and readiness probes for orchestration and load
//! balancers, answered with the same envelope as the API.
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::envelope::Envelope;
use super::schemas::{EmptyEnvelope, HealthEnvelope};

/// Envelope code for failed probes.
pub const PROBE_FAILED_CODE: u32 = 503;

/// Probe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
}

/// Shared health state for readiness and liveness checks.
///
/// Starts live but not ready; the server marks it ready once the listener is
/// bound and unhealthy when it begins draining.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as draining so liveness probes fail fast.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool, message: &str, failure: &str, status: &str) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response.insert_header((header::CACHE_CONTROL, "no-store"));

        if probe_ok {
            response.json(Envelope::ok_with_message(
                message,
                HealthStatus {
                    status: status.to_owned(),
                },
            ))
        } else {
            response.json(Envelope::<HealthStatus>::failure(PROBE_FAILED_CODE, failure))
        }
    }
}

/// Liveness probe. Returns 200 while the process is alive and 503 once
/// draining.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = HealthEnvelope),
        (status = 503, description = "Server is shutting down", body = EmptyEnvelope)
    )
)]
#[get("/health")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive(), "服务运行正常", "服务正在停止", "ok")
}

/// Readiness probe. Returns 200 once the listener is bound and 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = HealthEnvelope),
        (status = 503, description = "Server is not ready", body = EmptyEnvelope)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready(), "服务已就绪", "服务未就绪", "ready")
}
