// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use gaggiuino_mcp::server::McpServer;
use gaggiuino_mcp::tools::machine_registry;
use gaggiuino_mcp::ServerConfig;
use gaggiuino_sdk::GaggiuinoClient;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gaggiuino-mcp")]
#[command(about = "MCP server for a Gaggiuino espresso machine", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "GAGGIUINO_MCP_CONFIG", default_value = "gaggiuino-mcp.toml")]
    config: PathBuf,

    /// Base URL of the machine, overrides the configuration file
    #[arg(long, env = "GAGGIUINO_BASE_URL")]
    base_url: Option<String>,

    /// Keep every Nth sample of shot series, overrides the configuration file
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    downsample: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Gaggiuino MCP server starting...");

    let mut config = ServerConfig::load(&args.config)?;
    if let Some(base_url) = args.base_url {
        config.machine.base_url = base_url;
    }
    if let Some(downsample) = args.downsample {
        config.format.downsample = downsample as usize;
    }

    let client = GaggiuinoClient::from_config(config.client_config()?);
    tracing::info!("Machine API: {}", client.base_url());

    let registry = machine_registry(client, config.format.downsample);
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
