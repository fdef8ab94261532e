//! Error types for the Gaggiuino SDK.

/// Result type for SDK operations.
pub type GaggiuinoResult<T> = Result<T, GaggiuinoError>;

/// Error types that can occur when talking to the machine.
#[derive(Debug, thiserror::Error)]
pub enum GaggiuinoError {
    /// HTTP request failed before a response arrived, or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The machine answered with a non-success status.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl GaggiuinoError {
    /// Check if this error is transient and worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
