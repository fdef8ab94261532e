//! Transport layer for the Gaggiuino SDK.

pub mod http;

pub use http::HttpTransport;
