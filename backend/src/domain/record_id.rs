//! Storage-assigned numeric record identifier.

use std::fmt;
use std::str::FromStr;

use super::{BusinessError, EntityClass};

/// Why a raw identifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdError {
    /// Nothing to parse.
    #[error("identifier must not be empty")]
    Empty,
    /// Something other than ASCII digits was supplied.
    #[error("identifier must contain decimal digits only")]
    NotDecimal,
    /// The value does not fit in 32 bits.
    #[error("identifier exceeds 4294967295")]
    OutOfRange,
}

/// Identifier assigned by a storage adapter, starting at 1.
///
/// Parsing accepts unsigned decimal digits only: signs, whitespace and
/// anything above `u32::MAX` are rejected.
///
/// # Examples
/// ```
/// use rich_backend::domain::RecordId;
///
/// let id: RecordId = "42".parse().expect("digits");
/// assert_eq!(id.get(), 42);
/// assert!("+42".parse::<RecordId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u32);

impl RecordId {
    /// Wrap a raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parse a path segment on behalf of `entity`, mapping any failure to the
    /// entity's invalid-identifier business error.
    ///
    /// # Errors
    /// Returns [`EntityClass::invalid_id`] when `raw` is not a valid id.
    pub fn parse_for(raw: &str, entity: EntityClass) -> Result<Self, BusinessError> {
        raw.parse().map_err(|_: RecordIdError| entity.invalid_id())
    }
}

impl FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(RecordIdError::Empty);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecordIdError::NotDecimal);
        }
        raw.parse::<u32>()
            .map(Self)
            .map_err(|_| RecordIdError::OutOfRange)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RecordId> for u32 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}
