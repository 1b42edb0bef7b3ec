//! Uniform `{code, message, data}` body returned by every endpoint.
//!
//! All three keys are always present: `data` serialises as `null` on errors
//! and on successes that carry no payload.

use serde::{Deserialize, Serialize};

use crate::domain::ErrorCode;

/// Message attached to successes without a custom message.
pub const SUCCESS_MESSAGE: &str = "success";

/// Wire envelope.
///
/// # Examples
/// ```
/// use rich_backend::inbound::http::envelope::Envelope;
///
/// let body = serde_json::to_value(Envelope::<()>::ok_empty("用户删除成功")).expect("json");
/// assert_eq!(body, serde_json::json!({"code": 0, "message": "用户删除成功", "data": null}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// `0` on success, otherwise a business or transport code.
    pub code: u32,
    /// Human-readable outcome.
    pub message: String,
    /// Payload; `null` when absent.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Success carrying `data` and the default message.
    pub fn ok(data: T) -> Self {
        Self::ok_with_message(SUCCESS_MESSAGE, data)
    }

    /// Success carrying `data` and a custom message.
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            code: ErrorCode::SUCCESS.value(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Success without a payload.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::SUCCESS.value(),
            message: message.into(),
            data: None,
        }
    }

    /// Failure with the given code and message.
    pub fn failure(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}
