//! # Gaggiuino SDK
//!
//! Minimal client for the web API of a Gaggiuino-modded espresso machine.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gaggiuino_sdk::GaggiuinoClient;
//!
//! # async fn example() -> gaggiuino_sdk::GaggiuinoResult<()> {
//! let client = GaggiuinoClient::builder()
//!     .base_url("http://gaggiuino.local")
//!     .build()?;
//!
//! if let Some(status) = client.machine().status().await {
//!     println!("{}", status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Transient failures (connection errors, timeouts) are retried with
//! exponential backoff. HTTP error statuses are not.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{GaggiuinoClient, GaggiuinoClientBuilder};
pub use config::{ClientConfig, RetryConfig, DEFAULT_BASE_URL};
pub use error::{GaggiuinoError, GaggiuinoResult};
