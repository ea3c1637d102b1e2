//! # gutschein
//!
//! Client library for a voucher/coupon validation service: check codes
//! against the remote service and compute discounted prices locally.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use gutschein::core::*;
//! use rust_decimal_macros::dec;
//!
//! let voucher = Voucher::percent_off("SUMMER-10", dec!(10));
//!
//! assert_eq!(calculate_price(dec!(100), &voucher, None).unwrap(), dec!(90.00));
//! assert_eq!(calculate_discount(dec!(100), &voucher, None).unwrap(), dec!(10.00));
//! ```
//!
//! Validating a code against the service requires the `client` feature:
//!
//! ```ignore
//! use gutschein::client::VoucherClient;
//!
//! let client = VoucherClient::builder("app-id", "client-token")
//!     .tracking_id("gustav@example.com")
//!     .build()?;
//!
//! let result = client.validate("SUMMER-10").await?;
//! assert!(result.valid);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Voucher types and discount pricing |
//! | `client` | Async HTTP client for the validation endpoint |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "client")]
pub mod client;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
