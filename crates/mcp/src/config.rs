use anyhow::{Context, Result};
use gaggiuino_core::DEFAULT_DOWNSAMPLE;
use gaggiuino_sdk::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub machine: MachineConfig,

    #[serde(default)]
    pub retry: RetrySettings,

    #[serde(default)]
    pub format: FormatConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-attempt request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrySettings {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    /// Keep every Nth sample of each shot series
    #[serde(default = "default_downsample")]
    pub downsample: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    1000
}

fn default_downsample() -> usize {
    DEFAULT_DOWNSAMPLE
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            downsample: default_downsample(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_path: &Path) -> Result<Self> {
        // Load config file if it exists, otherwise use defaults
        if !config_path.exists() {
            tracing::info!(
                path = %config_path.display(),
                "Configuration file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .context("Failed to read configuration file")?;
        let config: Self = toml::from_str(&content).context("Failed to parse configuration file")?;

        if config.format.downsample == 0 {
            anyhow::bail!("format.downsample must be at least 1");
        }

        Ok(config)
    }

    /// Build the client configuration for the machine
    pub fn client_config(&self) -> Result<ClientConfig> {
        let base_url = Url::parse(&self.machine.base_url)
            .with_context(|| format!("Invalid machine base_url: {}", self.machine.base_url))?;

        Ok(ClientConfig {
            base_url,
            timeout: Duration::from_secs(self.machine.timeout_secs),
            retry_config: RetryConfig {
                max_attempts: self.retry.max_attempts,
                initial_backoff: Duration::from_millis(self.retry.initial_backoff_ms),
                ..Default::default()
            },
        })
    }
}
