//! Client configuration and builder.

use std::time::Duration;

use url::Url;

use super::validate::{ValidateError, VoucherClient};

/// Default validation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.gutschein.cloud/client/v1/validate";

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolved client configuration, held by a [`VoucherClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Application id sent in the `X-Client-Application-Id` header.
    pub application_id: String,
    /// Client token sent in the `X-Client-Token` header.
    pub client_token: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Tracking id forwarded to the service for analytics.
    pub tracking_id: Option<String>,
    /// Validation endpoint.
    pub endpoint: Url,
}

/// Builder for [`VoucherClient`].
///
/// ```no_run
/// use std::time::Duration;
/// use gutschein::client::VoucherClient;
///
/// let client = VoucherClient::builder("app-id", "client-token")
///     .timeout(Duration::from_secs(10))
///     .tracking_id("gustav@example.com")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct VoucherClientBuilder {
    application_id: String,
    client_token: String,
    timeout: Duration,
    tracking_id: Option<String>,
    endpoint: Option<Url>,
}

impl VoucherClientBuilder {
    /// Start a builder with the credentials issued by the service.
    pub fn new(application_id: impl Into<String>, client_token: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            client_token: client_token.into(),
            timeout: DEFAULT_TIMEOUT,
            tracking_id: None,
            endpoint: None,
        }
    }

    /// Override the whole-request timeout (default 5 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the tracking id forwarded with every validation call.
    pub fn tracking_id(mut self, tracking_id: impl Into<String>) -> Self {
        self.tracking_id = Some(tracking_id.into());
        self
    }

    /// Point the client at a different validation endpoint
    /// (self-hosted deployments, test servers).
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::Network`] if the underlying HTTP client
    /// cannot be constructed (e.g. no TLS backend available).
    pub fn build(self) -> Result<VoucherClient, ValidateError> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| Url::parse(DEFAULT_ENDPOINT).expect("default endpoint parses"));

        VoucherClient::from_config(ClientConfig {
            application_id: self.application_id,
            client_token: self.client_token,
            timeout: self.timeout,
            tracking_id: self.tracking_id,
            endpoint,
        })
    }
}
