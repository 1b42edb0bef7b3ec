//! Numeric business error codes and the thousand-blocks they occupy.
//!
//! Codes are partitioned into bands: `0` is success, `1000..=1999` holds the
//! generic codes and every entity class owns the next free thousand-block.
//! Each constant in [`ErrorCode::CATALOGUE`] falls into exactly one band.

use std::fmt;

use super::BusinessError;

/// Stable numeric identifier carried by every business error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(u32);

impl ErrorCode {
    /// Operation succeeded.
    pub const SUCCESS: Self = Self(0);
    /// A request field broke a domain rule.
    pub const INVALID_PARAM: Self = Self(1001);
    /// Generic missing resource.
    pub const NOT_FOUND: Self = Self(1002);
    /// Generic unexpected failure.
    pub const INTERNAL_ERROR: Self = Self(1003);
    /// No user matches the identifier.
    pub const USER_NOT_FOUND: Self = Self(2001);
    /// A user with the same identity already exists.
    pub const USER_ALREADY_EXISTS: Self = Self(2002);
    /// The user identifier could not be parsed.
    pub const INVALID_USER_ID: Self = Self(2003);
    /// No coupon matches the identifier.
    pub const COUPON_NOT_FOUND: Self = Self(3001);
    /// A coupon with the same identity already exists.
    pub const COUPON_ALREADY_EXISTS: Self = Self(3002);
    /// The coupon identifier could not be parsed.
    pub const INVALID_COUPON_ID: Self = Self(3003);
    /// The coupon discount type is not recognised.
    pub const INVALID_DISCOUNT_TYPE: Self = Self(3004);

    /// Every defined code, in ascending order.
    pub const CATALOGUE: [Self; 11] = [
        Self::SUCCESS,
        Self::INVALID_PARAM,
        Self::NOT_FOUND,
        Self::INTERNAL_ERROR,
        Self::USER_NOT_FOUND,
        Self::USER_ALREADY_EXISTS,
        Self::INVALID_USER_ID,
        Self::COUPON_NOT_FOUND,
        Self::COUPON_ALREADY_EXISTS,
        Self::INVALID_COUPON_ID,
        Self::INVALID_DISCOUNT_TYPE,
    ];

    const GENERIC_BASE: u32 = 1000;
    const BAND_WIDTH: u32 = 1000;

    /// Wrap a raw code value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Return the raw numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Classify the code into its band.
    ///
    /// # Examples
    /// ```
    /// use rich_backend::domain::{EntityClass, ErrorBand, ErrorCode};
    ///
    /// assert_eq!(ErrorCode::INVALID_PARAM.band(), ErrorBand::Generic);
    /// assert_eq!(
    ///     ErrorCode::COUPON_NOT_FOUND.band(),
    ///     ErrorBand::Entity(EntityClass::Coupon)
    /// );
    /// ```
    #[must_use]
    pub fn band(self) -> ErrorBand {
        if self == Self::SUCCESS {
            return ErrorBand::Success;
        }
        if (Self::GENERIC_BASE..Self::GENERIC_BASE + Self::BAND_WIDTH).contains(&self.0) {
            return ErrorBand::Generic;
        }
        EntityClass::ALL
            .into_iter()
            .find(|class| {
                let base = class.band_base();
                (base..base + Self::BAND_WIDTH).contains(&self.0)
            })
            .map_or(ErrorBand::Unassigned, ErrorBand::Entity)
    }

    /// Wire message for catalogued codes.
    #[must_use]
    pub fn default_message(self) -> Option<&'static str> {
        let message = match self {
            Self::SUCCESS => "success",
            Self::INVALID_PARAM => "参数错误",
            Self::NOT_FOUND => "资源不存在",
            Self::INTERNAL_ERROR => "内部服务器错误",
            Self::USER_NOT_FOUND => "用户不存在",
            Self::USER_ALREADY_EXISTS => "用户已存在",
            Self::INVALID_USER_ID => "无效的用户ID",
            Self::COUPON_NOT_FOUND => "优惠券不存在",
            Self::COUPON_ALREADY_EXISTS => "优惠券已存在",
            Self::INVALID_COUPON_ID => "无效的优惠券ID",
            Self::INVALID_DISCOUNT_TYPE => "无效的折扣类型",
            _ => return None,
        };
        Some(message)
    }

    /// True when some entity class claims the code as a lookup failure
    /// (not-found or malformed identifier).
    #[must_use]
    pub fn is_entity_lookup(self) -> bool {
        EntityClass::ALL
            .into_iter()
            .any(|class| class.owns_lookup_code(self))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for u32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

/// Range a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorBand {
    /// The single success code `0`.
    Success,
    /// Codes shared by every resource (`1000..=1999`).
    Generic,
    /// Codes owned by one entity class.
    Entity(EntityClass),
    /// Codes outside every allocated block.
    Unassigned,
}

/// Category of business object with its own error-code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityClass {
    /// Users, block `2000..=2999`.
    User,
    /// Coupons, block `3000..=3999`.
    Coupon,
}

impl EntityClass {
    /// Every entity class in block order.
    pub const ALL: [Self; 2] = [Self::User, Self::Coupon];

    /// First code of the class's thousand-block.
    #[must_use]
    pub const fn band_base(self) -> u32 {
        match self {
            Self::User => 2000,
            Self::Coupon => 3000,
        }
    }

    /// Code reported when no record matches an identifier.
    #[must_use]
    pub const fn not_found_code(self) -> ErrorCode {
        match self {
            Self::User => ErrorCode::USER_NOT_FOUND,
            Self::Coupon => ErrorCode::COUPON_NOT_FOUND,
        }
    }

    /// Code reported when an identifier cannot be parsed.
    #[must_use]
    pub const fn invalid_id_code(self) -> ErrorCode {
        match self {
            Self::User => ErrorCode::INVALID_USER_ID,
            Self::Coupon => ErrorCode::INVALID_COUPON_ID,
        }
    }

    /// Business error for a missing record of this class.
    #[must_use]
    pub fn not_found(self) -> BusinessError {
        BusinessError::from_code(self.not_found_code())
    }

    /// Business error for a malformed identifier of this class.
    #[must_use]
    pub fn invalid_id(self) -> BusinessError {
        BusinessError::from_code(self.invalid_id_code())
    }

    /// True for the class's not-found and invalid-identifier codes.
    #[must_use]
    pub fn owns_lookup_code(self, code: ErrorCode) -> bool {
        code == self.not_found_code() || code == self.invalid_id_code()
    }

    /// Lowercase name used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Coupon => "coupon",
        }
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
