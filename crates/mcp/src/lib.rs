// MCP (Model Context Protocol) server for a Gaggiuino espresso machine
// Exposes machine status and shot history as tools to agent clients

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::ServerConfig;
pub use server::McpServer;
