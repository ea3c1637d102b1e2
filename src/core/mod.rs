//! Voucher types and discount pricing.
//!
//! Pure arithmetic over [`rust_decimal::Decimal`] — no I/O. The
//! [`Discount`] variants mirror the validation service's wire format,
//! so a voucher deserialized from a validation response can be priced
//! directly.
//!
//! # Example
//!
//! ```
//! use gutschein::core::*;
//! use rust_decimal_macros::dec;
//!
//! // 5.00 off (500 minor units), floored at zero
//! let voucher = Voucher::amount_off("WELCOME-5", 500);
//! assert_eq!(calculate_price(dec!(3), &voucher, None).unwrap(), dec!(0));
//! assert_eq!(calculate_discount(dec!(3), &voucher, None).unwrap(), dec!(3.00));
//! ```

mod error;
mod pricing;
mod types;

pub use error::DiscountError;
pub use pricing::{calculate_discount, calculate_price, round_money};
pub use types::{Discount, Voucher};
