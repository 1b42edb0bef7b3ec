//! HTTP classification of failures into status codes and envelopes.
//!
//! Purpose: keep the domain error HTTP-agnostic while giving every failure a
//! single rendering rule:
//!
//! | failure | status | envelope code |
//! |---|---|---|
//! | entity not-found / invalid id | 404 | business code |
//! | other business error | 200 | business code |
//! | body binding | 400 | 400 |
//! | unmatched route | 404 | 404 |
//! | storage or other unexpected failure | 500 | 500 |

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::error;

use super::envelope::Envelope;
use crate::domain::{BusinessError, Error, TraceId};

/// Envelope code for request bodies that could not be bound.
pub const BINDING_ERROR_CODE: u32 = 400;
/// Envelope code for unmatched routes.
pub const ROUTE_NOT_FOUND_CODE: u32 = 404;
/// Envelope code for unexpected failures.
pub const INTERNAL_ERROR_CODE: u32 = 500;

/// Message for unmatched routes.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "资源不存在";
/// Message returned in place of any internal failure detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "内部服务器错误";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure as seen by the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Classified domain failure.
    #[error(transparent)]
    Business(#[from] BusinessError),
    /// The request body could not be decoded.
    #[error("{0}")]
    Binding(String),
    /// No route matched the request.
    #[error("route not found")]
    RouteNotFound,
    /// Anything else; the detail is logged, never rendered.
    #[error("internal failure: {0}")]
    Internal(String),
}

impl ApiError {
    /// Build an internal error, logging `detail` with the current trace id.
    pub fn internal(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let trace_id = TraceId::current().map(|id| id.to_string());
        error!(trace_id = trace_id.as_deref(), %detail, "request failed");
        Self::Internal(detail)
    }

    fn envelope(&self) -> Envelope<()> {
        match self {
            Self::Business(err) => Envelope::failure(err.code().value(), err.message()),
            Self::Binding(message) => Envelope::failure(BINDING_ERROR_CODE, message.as_str()),
            Self::RouteNotFound => {
                Envelope::failure(ROUTE_NOT_FOUND_CODE, ROUTE_NOT_FOUND_MESSAGE)
            }
            Self::Internal(_) => Envelope::failure(INTERNAL_ERROR_CODE, INTERNAL_ERROR_MESSAGE),
        }
    }
}

fn status_for(error: &ApiError) -> StatusCode {
    match error {
        ApiError::Business(err) if err.code().is_entity_lookup() => StatusCode::NOT_FOUND,
        // Rule violations are reported in the body, not the status line.
        ApiError::Business(_) => StatusCode::OK,
        ApiError::Binding(_) => StatusCode::BAD_REQUEST,
        ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err.into_business() {
            Ok(business) => Self::Business(business),
            Err(other) => Self::internal(other.to_string()),
        }
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Binding(err.to_string()).into()
}

/// JSON extractor configuration rendering decode failures as 400 envelopes.
///
/// Bodies are decoded as JSON whatever their `Content-Type` says.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|_| true)
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// Fallback service for requests no route matched.
///
/// # Errors
/// Always returns [`ApiError::RouteNotFound`].
pub async fn route_not_found() -> ApiResult<HttpResponse> {
    Err(ApiError::RouteNotFound)
}

#[cfg(test)]
mod tests;
