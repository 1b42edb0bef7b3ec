//! Business errors and the domain error returned by driving ports.
//!
//! Purpose: carry a stable numeric code and a human-readable message from the
//! point a rule violation is detected to the response boundary, without the
//! domain knowing anything about HTTP. Storage failures travel alongside as
//! [`Error::Storage`] and are only ever built through [`Error::from_storage`],
//! which re-wraps the storage "not found" outcome into the entity's own
//! business error.

use std::hash::{Hash, Hasher};

use super::ports::StorageError;
use super::{EntityClass, ErrorCode};

/// Classified domain failure with a numeric code and a client-facing message.
///
/// Two errors with the same code are the same kind of failure, so equality
/// and hashing only consider [`BusinessError::code`].
///
/// # Examples
/// ```
/// use rich_backend::domain::{BusinessError, ErrorCode};
///
/// let err = BusinessError::new(ErrorCode::INVALID_PARAM, "用户名不能为空");
/// assert_eq!(err.code(), ErrorCode::INVALID_PARAM);
/// assert_eq!(err.to_string(), "用户名不能为空");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct BusinessError {
    code: ErrorCode,
    message: String,
}

impl BusinessError {
    /// Build an error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Build an error carrying the catalogue message for `code`.
    ///
    /// Codes without a catalogue entry get an empty message.
    #[must_use]
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.default_message().unwrap_or_default())
    }

    /// Generic rule violation with a specific explanation.
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::INVALID_PARAM, message)
    }

    /// Stable numeric code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for BusinessError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for BusinessError {}

impl Hash for BusinessError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

/// Build a [`BusinessError`](crate::domain::BusinessError) with a formatted
/// message.
///
/// # Examples
/// ```
/// use rich_backend::business_error;
/// use rich_backend::domain::ErrorCode;
///
/// let err = business_error!(ErrorCode::INVALID_PARAM, "字段 {} 无效", "name");
/// assert_eq!(err.message(), "字段 name 无效");
/// ```
#[macro_export]
macro_rules! business_error {
    ($code:expr, $($arg:tt)+) => {
        $crate::domain::BusinessError::new($code, ::std::format!($($arg)+))
    };
}

/// Failure returned by the entity services.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A classified business failure.
    #[error(transparent)]
    Business(#[from] BusinessError),
    /// Infrastructure failure reported by a storage adapter.
    #[error("storage failure: {0}")]
    Storage(StorageError),
}

impl Error {
    /// Translate a storage outcome for `entity` into a domain error.
    ///
    /// `NotFound` always becomes the entity's not-found business error; every
    /// other storage failure passes through unchanged.
    #[must_use]
    pub fn from_storage(entity: EntityClass, err: StorageError) -> Self {
        match err {
            StorageError::NotFound => Self::Business(entity.not_found()),
            other => Self::Storage(other),
        }
    }

    /// Borrow the business error when this is one.
    #[must_use]
    pub fn as_business(&self) -> Option<&BusinessError> {
        match self {
            Self::Business(err) => Some(err),
            Self::Storage(_) => None,
        }
    }

    /// Take the business error out, handing back anything else untouched.
    ///
    /// # Errors
    /// Returns `Err(self)` when the error is not a business error.
    pub fn into_business(self) -> Result<BusinessError, Self> {
        match self {
            Self::Business(err) => Ok(err),
            other => Err(other),
        }
    }
}
