//! Main client for the Gaggiuino SDK.

use crate::api::*;
use crate::config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
use crate::error::GaggiuinoResult;
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for a single Gaggiuino machine.
///
/// Cheap to clone; configuration is immutable and shared.
#[derive(Debug, Clone)]
pub struct GaggiuinoClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl GaggiuinoClient {
    /// Create a new client builder.
    pub fn builder() -> GaggiuinoClientBuilder {
        GaggiuinoClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone());

        Self { config, http }
    }

    /// Get the machine system API.
    pub fn machine(&self) -> MachineApi<'_> {
        MachineApi::new(self)
    }

    /// Get the shots API.
    pub fn shots(&self) -> ShotsApi<'_> {
        ShotsApi::new(self)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }
}

/// Builder for creating a GaggiuinoClient.
pub struct GaggiuinoClientBuilder {
    base_url: String,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl GaggiuinoClientBuilder {
    /// Create a new builder pointing at the default machine hostname.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            retry_config: RetryConfig::default(),
        }
    }

    /// Set the base URL of the machine.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    pub fn retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the client.
    pub fn build(self) -> GaggiuinoResult<GaggiuinoClient> {
        let base_url = Url::parse(&self.base_url)?;

        let config = ClientConfig {
            base_url,
            timeout: self.timeout,
            retry_config: self.retry_config,
        };

        Ok(GaggiuinoClient::from_config(config))
    }
}

impl Default for GaggiuinoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
