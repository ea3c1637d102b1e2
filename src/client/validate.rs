//! Voucher code validation against the remote service.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::Voucher;

use super::config::{ClientConfig, VoucherClientBuilder};

const HEADER_APPLICATION_ID: &str = "X-Client-Application-Id";
const HEADER_TOKEN: &str = "X-Client-Token";
const HEADER_CHANNEL: &str = "X-Client-Channel";

/// Channel identifier sent with every request.
const CLIENT_CHANNEL: &str = concat!("gutschein-rs/", env!("CARGO_PKG_VERSION"));

/// Result of a voucher validation call.
///
/// The service guarantees the `valid` verdict; everything else is
/// passed through as returned. Fields the service sends that this
/// crate does not model end up in [`ValidationResult::extra`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the code is valid for redemption.
    pub valid: bool,
    /// Tracking id echoed back by the service.
    pub tracking_id: Option<String>,
    /// Voucher fields returned alongside the verdict.
    #[serde(flatten)]
    pub voucher: Voucher,
    /// Any additional fields the service returned.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Error from a [`VoucherClient::validate`] call.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ValidateError {
    /// Application id and client token are both empty.
    MissingConfiguration,
    /// No voucher code left after stripping whitespace.
    MissingCode,
    /// Connection, TLS, timeout, or body-read failure.
    Network(String),
    /// The service answered with a non-success status code.
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },
    /// The body was not JSON or lacked a boolean `valid` field.
    UnexpectedResponse {
        /// The parsed body, when it was at least well-formed JSON.
        context: Option<Value>,
    },
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConfiguration => {
                write!(f, "missing configuration: application id and client token")
            }
            Self::MissingCode => write!(f, "missing voucher code"),
            Self::Network(e) => write!(f, "transport error: {e}"),
            Self::UnexpectedStatus { status, .. } => {
                write!(f, "Unexpected status code. ({status})")
            }
            Self::UnexpectedResponse { .. } => write!(f, "Unexpected response structure."),
        }
    }
}

impl std::error::Error for ValidateError {}

/// Client for the voucher validation service.
///
/// Construct via [`VoucherClient::builder`]. Cloning is cheap; the
/// underlying HTTP client and its connection pool are shared.
#[derive(Debug, Clone)]
pub struct VoucherClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl VoucherClient {
    /// Start building a client with the given credentials.
    pub fn builder(
        application_id: impl Into<String>,
        client_token: impl Into<String>,
    ) -> VoucherClientBuilder {
        VoucherClientBuilder::new(application_id, client_token)
    }

    pub(super) fn from_config(config: ClientConfig) -> Result<Self, ValidateError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ValidateError::Network(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the tracking id forwarded with subsequent calls.
    pub fn set_identity(&mut self, tracking_id: impl Into<String>) {
        self.config.tracking_id = Some(tracking_id.into());
    }

    /// Validate a voucher code against the service.
    ///
    /// Whitespace anywhere in `code` is stripped before the call.
    /// Fails fast without touching the network when the configuration
    /// or the code is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::Network`] on connection issues,
    /// [`ValidateError::UnexpectedStatus`] on a non-success HTTP status,
    /// [`ValidateError::UnexpectedResponse`] when the body is not JSON
    /// with a boolean `valid` field.
    pub async fn validate(&self, code: &str) -> Result<ValidationResult, ValidateError> {
        if self.config.application_id.is_empty() && self.config.client_token.is_empty() {
            warn!("voucher validation skipped: application id and client token are empty");
            return Err(ValidateError::MissingConfiguration);
        }

        let code: String = code.chars().filter(|c| !c.is_whitespace()).collect();
        if code.is_empty() {
            warn!("voucher validation skipped: no voucher code given");
            return Err(ValidateError::MissingCode);
        }

        let mut query: Vec<(&str, &str)> = vec![("code", code.as_str())];
        if let Some(tracking_id) = self.config.tracking_id.as_deref() {
            query.push(("tracking_id", tracking_id));
        }

        debug!(%code, endpoint = %self.config.endpoint, "validating voucher code");

        let resp = self
            .http
            .get(self.config.endpoint.clone())
            .query(&query)
            .header(HEADER_APPLICATION_ID, &self.config.application_id)
            .header(HEADER_TOKEN, &self.config.client_token)
            .header(HEADER_CHANNEL, CLIENT_CHANNEL)
            .send()
            .await
            .map_err(|e| ValidateError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ValidateError::Network(e.to_string()))?;

        decode_response(status, &body)
    }
}

/// Decode a validation response body.
///
/// Split from the transport so the status and structure branches are
/// testable without a network.
fn decode_response(status: u16, body: &str) -> Result<ValidationResult, ValidateError> {
    if !(200..300).contains(&status) {
        return Err(ValidateError::UnexpectedStatus {
            status,
            body: body.to_string(),
        });
    }

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return Err(ValidateError::UnexpectedResponse { context: None });
    };

    if !value.get("valid").is_some_and(Value::is_boolean) {
        return Err(ValidateError::UnexpectedResponse {
            context: Some(value),
        });
    }

    serde_json::from_value(value.clone()).map_err(|_| ValidateError::UnexpectedResponse {
        context: Some(value),
    })
}
