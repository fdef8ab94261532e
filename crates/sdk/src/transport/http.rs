//! HTTP transport layer for the Gaggiuino SDK.

use crate::config::ClientConfig;
use crate::error::{GaggiuinoError, GaggiuinoResult};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("gaggiuino-sdk/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for fetching JSON from the machine.
///
/// Every request builds its own short-lived [`Client`]; nothing is pooled
/// between calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self { config }
    }

    /// Build a URL by appending path segments to the base URL.
    ///
    /// Each segment is percent-encoded, so a caller-supplied id can never
    /// escape its position in the path.
    pub fn build_url(&self, segments: &[&str]) -> GaggiuinoResult<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GaggiuinoError::Config(format!(
                    "base URL cannot carry a path: {}",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET the JSON document at `segments`, retrying transient failures.
    pub async fn get(&self, segments: &[&str]) -> GaggiuinoResult<Value> {
        let url = self.build_url(segments)?;
        self.execute_with_retry(&url).await
    }

    /// GET the JSON document at `segments`, collapsing every failure to `None`.
    ///
    /// The cause is logged; callers only learn that no data is available.
    pub async fn fetch(&self, segments: &[&str]) -> Option<Value> {
        match self.get(segments).await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!(path = %segments.join("/"), error = %e, "Fetch returned no data");
                None
            }
        }
    }

    /// Execute a GET with exponential backoff on connection failures and timeouts.
    async fn execute_with_retry(&self, url: &Url) -> GaggiuinoResult<Value> {
        let retry_config = &self.config.retry_config;
        let max_attempts = retry_config.attempts();

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.config.timeout)
            .build()?;

        // Backoff only sits between attempts: the last failure returns at once.
        let mut attempt = 0;
        loop {
            debug!(url = %url, attempt = attempt + 1, max_attempts, "GET request");

            match self.send_once(&client, url).await {
                Ok(body) => {
                    debug!(url = %url, attempt = attempt + 1, "Request succeeded");
                    return Ok(body);
                }
                Err(e) if e.is_retryable() && attempt + 1 < max_attempts => {
                    let backoff = retry_config.backoff_for_attempt(attempt);
                    warn!(
                        url = %url,
                        attempt = attempt + 1,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %e,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => {
                    warn!(
                        url = %url,
                        attempt = attempt + 1,
                        retryable = e.is_retryable(),
                        error = %e,
                        "Request failed, giving up"
                    );
                    return Err(e);
                }
            }
        }
    }

    async fn send_once(&self, client: &Client, url: &Url) -> GaggiuinoResult<Value> {
        let response = client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GaggiuinoError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
