//! Coupon records, their enumerated attributes and validation rules.

use std::fmt;
use std::str::FromStr;

use super::RecordId;

/// Rule violations raised while validating coupon input.
///
/// The messages are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CouponValidationError {
    /// Name missing or empty.
    #[error("优惠券名称不能为空")]
    EmptyName,
    /// Discount type is neither `fixed` nor `percent`.
    #[error("无效的折扣类型")]
    InvalidDiscountType,
    /// Discount value missing, zero or negative.
    #[error("折扣值必须大于 0")]
    NonPositiveDiscountValue,
    /// Minimum order amount below zero.
    #[error("最低使用金额不能小于 0")]
    NegativeMinAmount,
    /// Status is neither `active` nor `inactive`.
    #[error("无效的优惠券状态")]
    InvalidStatus,
}

/// How the discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountType {
    /// Flat amount off.
    Fixed,
    /// Percentage off.
    Percent,
}

impl DiscountType {
    /// Wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Percent => "percent",
        }
    }
}

impl FromStr for DiscountType {
    type Err = CouponValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "fixed" => Ok(Self::Fixed),
            "percent" => Ok(Self::Percent),
            _ => Err(CouponValidationError::InvalidDiscountType),
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a coupon can currently be redeemed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CouponStatus {
    /// Redeemable; the status of coupons created without one.
    #[default]
    Active,
    /// Withdrawn from use.
    Inactive,
}

impl CouponStatus {
    /// Wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl FromStr for CouponStatus {
    type Err = CouponValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(CouponValidationError::InvalidStatus),
        }
    }
}

impl fmt::Display for CouponStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn check_discount_value(value: f64) -> Result<f64, CouponValidationError> {
    if value.is_nan() || value <= 0.0 {
        Err(CouponValidationError::NonPositiveDiscountValue)
    } else {
        Ok(value)
    }
}

fn check_min_amount(value: f64) -> Result<f64, CouponValidationError> {
    if value.is_nan() || value < 0.0 {
        Err(CouponValidationError::NegativeMinAmount)
    } else {
        Ok(value)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Stored coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    id: RecordId,
    name: String,
    description: String,
    discount_type: DiscountType,
    discount_value: f64,
    min_amount: f64,
    status: CouponStatus,
}

impl Coupon {
    /// Storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// How [`Self::discount_value`] is applied.
    #[must_use]
    pub fn discount_type(&self) -> DiscountType {
        self.discount_type
    }

    /// Amount or percentage off, depending on [`Self::discount_type`].
    #[must_use]
    pub fn discount_value(&self) -> f64 {
        self.discount_value
    }

    /// Minimum order amount the coupon applies to.
    #[must_use]
    pub fn min_amount(&self) -> f64 {
        self.min_amount
    }

    /// Redemption status.
    #[must_use]
    pub fn status(&self) -> CouponStatus {
        self.status
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: CouponPatch) {
        let CouponPatch {
            name,
            description,
            discount_type,
            discount_value,
            min_amount,
            status,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(discount_type) = discount_type {
            self.discount_type = discount_type;
        }
        if let Some(discount_value) = discount_value {
            self.discount_value = discount_value;
        }
        if let Some(min_amount) = min_amount {
            self.min_amount = min_amount;
        }
        if let Some(status) = status {
            self.status = status;
        }
    }
}

/// Unvalidated create request.
///
/// `discount_type` and `status` stay raw strings so that unknown spellings
/// reach validation instead of failing deserialisation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponDraft {
    /// Required display name.
    pub name: String,
    /// Optional description.
    pub description: String,
    /// Raw discount type spelling.
    pub discount_type: String,
    /// Discount value; `None` when the client sent none.
    pub discount_value: Option<f64>,
    /// Minimum order amount, zero when absent.
    pub min_amount: f64,
    /// Raw status spelling; empty selects the default.
    pub status: String,
}

/// Coupon fields that passed validation and await an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCoupon {
    name: String,
    description: String,
    discount_type: DiscountType,
    discount_value: f64,
    min_amount: f64,
    status: CouponStatus,
}

impl NewCoupon {
    /// Validate a draft, defaulting an empty status to
    /// [`CouponStatus::Active`].
    ///
    /// Checks run in field order: name, discount type, discount value,
    /// minimum amount, status.
    ///
    /// # Errors
    /// Returns the first [`CouponValidationError`] encountered.
    ///
    /// # Examples
    /// ```
    /// use rich_backend::domain::{CouponDraft, CouponStatus, NewCoupon};
    ///
    /// let coupon = NewCoupon::try_from_draft(CouponDraft {
    ///     name: "A".into(),
    ///     discount_type: "percent".into(),
    ///     discount_value: Some(10.0),
    ///     ..CouponDraft::default()
    /// })
    /// .expect("valid draft");
    /// assert_eq!(coupon.status(), CouponStatus::Active);
    /// ```
    pub fn try_from_draft(draft: CouponDraft) -> Result<Self, CouponValidationError> {
        let CouponDraft {
            name,
            description,
            discount_type,
            discount_value,
            min_amount,
            status,
        } = draft;
        if name.is_empty() {
            return Err(CouponValidationError::EmptyName);
        }
        let discount_type = discount_type.parse::<DiscountType>()?;
        let discount_value = discount_value
            .ok_or(CouponValidationError::NonPositiveDiscountValue)
            .and_then(check_discount_value)?;
        let min_amount = check_min_amount(min_amount)?;
        let status = if status.is_empty() {
            CouponStatus::default()
        } else {
            status.parse::<CouponStatus>()?
        };
        Ok(Self {
            name,
            description,
            discount_type,
            discount_value,
            min_amount,
            status,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the discount value is applied.
    #[must_use]
    pub fn discount_type(&self) -> DiscountType {
        self.discount_type
    }

    /// Redemption status.
    #[must_use]
    pub fn status(&self) -> CouponStatus {
        self.status
    }

    /// Materialise the stored record under `id`.
    #[must_use]
    pub fn with_id(self, id: RecordId) -> Coupon {
        Coupon {
            id,
            name: self.name,
            description: self.description,
            discount_type: self.discount_type,
            discount_value: self.discount_value,
            min_amount: self.min_amount,
            status: self.status,
        }
    }
}

impl TryFrom<CouponDraft> for NewCoupon {
    type Error = CouponValidationError;

    fn try_from(draft: CouponDraft) -> Result<Self, Self::Error> {
        Self::try_from_draft(draft)
    }
}

/// Unvalidated update request; absent and empty fields mean "keep".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<String>,
    pub discount_value: Option<f64>,
    pub min_amount: Option<f64>,
    pub status: Option<String>,
}

/// Validated partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CouponPatch {
    name: Option<String>,
    description: Option<String>,
    discount_type: Option<DiscountType>,
    discount_value: Option<f64>,
    min_amount: Option<f64>,
    status: Option<CouponStatus>,
}

impl CouponPatch {
    /// Drop empty strings and check every supplied value.
    ///
    /// A supplied discount value must be strictly positive; zero is rejected
    /// rather than treated as "unchanged".
    ///
    /// # Errors
    /// Returns the first [`CouponValidationError`] encountered.
    pub fn try_from_changes(changes: CouponChanges) -> Result<Self, CouponValidationError> {
        let CouponChanges {
            name,
            description,
            discount_type,
            discount_value,
            min_amount,
            status,
        } = changes;
        Ok(Self {
            name: non_empty(name),
            description: non_empty(description),
            discount_type: non_empty(discount_type)
                .map(|raw| raw.parse::<DiscountType>())
                .transpose()?,
            discount_value: discount_value.map(check_discount_value).transpose()?,
            min_amount: min_amount.map(check_min_amount).transpose()?,
            status: non_empty(status)
                .map(|raw| raw.parse::<CouponStatus>())
                .transpose()?,
        })
    }

    /// True when applying the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl TryFrom<CouponChanges> for CouponPatch {
    type Error = CouponValidationError;

    fn try_from(changes: CouponChanges) -> Result<Self, Self::Error> {
        Self::try_from_changes(changes)
    }
}
