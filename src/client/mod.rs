//! Async HTTP client for the voucher validation service.
//!
//! One GET request per [`VoucherClient::validate`] call — no retries,
//! no caching, no request batching. The client identifies itself with
//! the application id and client token headers issued by the service.
//!
//! # Example
//!
//! ```ignore
//! use gutschein::client::VoucherClient;
//!
//! let client = VoucherClient::builder("app-id", "client-token")
//!     .tracking_id("gustav@example.com")
//!     .build()?;
//!
//! let result = client.validate(" SUMMER-10 ").await?;
//! if result.valid {
//!     // apply the discount
//! }
//! ```

mod config;
mod validate;

pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, VoucherClientBuilder};
pub use validate::{ValidateError, ValidationResult, VoucherClient};
