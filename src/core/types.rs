use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A voucher as returned by the validation service.
///
/// Only [`Voucher::discount`] is interpreted by this crate; the other
/// fields pass through from the service untouched. All fields are
/// optional because the service only guarantees the verdict itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    /// The voucher code.
    pub code: Option<String>,
    /// Campaign the voucher was issued under.
    pub campaign: Option<String>,
    /// Free-form category assigned by the issuer.
    pub category: Option<String>,
    /// Discount definition. Absent for voucher kinds this crate cannot price.
    pub discount: Option<Discount>,
    /// Start of the validity window.
    pub start_date: Option<DateTime<Utc>>,
    /// End of the validity window.
    pub expiration_date: Option<DateTime<Utc>>,
    /// Whether the voucher is currently active.
    pub active: Option<bool>,
    /// Free-text note attached to the voucher.
    pub additional_info: Option<String>,
}

impl Voucher {
    fn with_discount(code: impl Into<String>, discount: Discount) -> Self {
        Self {
            code: Some(code.into()),
            campaign: None,
            category: None,
            discount: Some(discount),
            start_date: None,
            expiration_date: None,
            active: None,
            additional_info: None,
        }
    }

    /// Percent-off voucher (e.g. `dec!(10)` for 10% off).
    pub fn percent_off(code: impl Into<String>, percent_off: Decimal) -> Self {
        Self::with_discount(code, Discount::Percent { percent_off })
    }

    /// Flat-amount voucher; `amount_off` is in minor units (cents).
    pub fn amount_off(code: impl Into<String>, amount_off: u64) -> Self {
        Self::with_discount(code, Discount::Amount { amount_off })
    }

    /// Unit voucher taking `unit_off` units off the total.
    pub fn unit_off(code: impl Into<String>, unit_off: Decimal) -> Self {
        Self::with_discount(code, Discount::Unit { unit_off })
    }
}

/// Discount definition, tagged by `type` on the wire:
/// `{"type": "PERCENT", "percent_off": 10}`.
///
/// An unrecognized `type` tag fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Discount {
    /// Percentage off the base price, valid range (0, 100].
    Percent {
        /// Percentage taken off the base price.
        percent_off: Decimal,
    },
    /// Flat amount off the base price.
    Amount {
        /// Discount in minor units; 500 means 5.00 off.
        amount_off: u64,
    },
    /// A number of units taken off the total.
    Unit {
        /// Unit count; the unit price is supplied at calculation time.
        unit_off: Decimal,
    },
}
