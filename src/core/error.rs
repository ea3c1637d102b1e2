use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the discount pricing functions.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum DiscountError {
    /// Percent discount outside the valid (0, 100] range.
    #[error("invalid voucher, percent discount should be between 0-100 (got {0})")]
    InvalidPercent(Decimal),

    /// Amount discount of zero minor units.
    #[error("invalid voucher, amount discount must be higher than zero")]
    InvalidAmount,

    /// Unit discount of zero or less.
    #[error("invalid voucher, unit discount must be higher than zero (got {0})")]
    InvalidUnit(Decimal),

    /// A UNIT voucher was priced without a unit price.
    #[error("unit price required for UNIT vouchers")]
    MissingUnitPrice,

    /// The voucher carries no discount this crate can price.
    #[error("unsupported voucher type")]
    UnsupportedVoucherType,
}
