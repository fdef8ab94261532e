//! Configuration types for the Gaggiuino client.

use std::time::Duration;
use url::Url;

/// Hostname the machine announces itself under on the local network.
pub const DEFAULT_BASE_URL: &str = "http://gaggiuino.local";

/// Configuration for the Gaggiuino client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the machine's web API.
    pub base_url: Url,
    /// Timeout applied to each individual attempt.
    pub timeout: Duration,
    /// Retry configuration.
    pub retry_config: RetryConfig,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(10),
            retry_config: RetryConfig::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // The constant is a valid absolute URL.
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("default base URL parses"))
    }
}

/// Configuration for retry behavior.
///
/// Only connection failures and timeouts are retried. An HTTP error status is
/// a definitive answer from the machine.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,
    /// Backoff before the second attempt.
    pub initial_backoff: Duration,
    /// Backoff multiplier.
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Create a configuration with a single attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    /// Calculate backoff duration after the given zero-based attempt.
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let backoff_ms = self.initial_backoff.as_millis() as f64
            * self.backoff_multiplier.powi(attempt as i32);
        Duration::from_millis(backoff_ms as u64)
    }

    /// Attempts actually made; zero is treated as one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_calculation() {
        let config = RetryConfig::default();

        assert_eq!(config.backoff_for_attempt(0), Duration::from_secs(1));
        assert_eq!(config.backoff_for_attempt(1), Duration::from_secs(2));
        assert_eq!(config.backoff_for_attempt(2), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_custom_delay() {
        let config = RetryConfig {
            initial_backoff: Duration::from_millis(250),
            ..Default::default()
        };

        assert_eq!(config.backoff_for_attempt(3), Duration::from_secs(2));
    }

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url.as_str(), "http://gaggiuino.local/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.retry_config.max_attempts, 3);
    }

    #[test]
    fn test_retry_config_no_retry() {
        let config = RetryConfig::no_retry();

        assert_eq!(config.max_attempts, 1);
        assert_eq!(config.initial_backoff, Duration::from_secs(1));
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let config = RetryConfig {
            max_attempts: 0,
            ..Default::default()
        };

        assert_eq!(config.attempts(), 1);
    }
}
