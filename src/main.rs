//! Channel header override relay.
//!
//! An API relay that forwards requests to upstream channels and rewrites
//! outbound headers per channel before they leave.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────┐
//!                     │                      RELAY                       │
//!   Client Request    │  ┌─────────┐   ┌─────────┐   ┌───────────────┐   │
//!   ──────────────────┼─▶│  http   │──▶│ routing │──▶│header_override│   │
//!                     │  │ server  │   │ channel │   │ build + apply │   │
//!                     │  └─────────┘   └─────────┘   └───────┬───────┘   │
//!                     │                                      │           │
//!   Client Response   │  ┌─────────┐                  ┌──────▼───────┐   │
//!   ◀─────────────────┼──│ stream  │◀─────────────────│   upstream   │◀──┼── Provider
//!                     │  │  back   │                  │    client    │   │
//!                     │  └─────────┘                  └──────────────┘   │
//!                     └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use header_override_relay::config::{load_config, RelayConfig};
use header_override_relay::lifecycle::shutdown_signal;
use header_override_relay::observability::logging::init_logging;
use header_override_relay::RelayServer;

#[derive(Parser)]
#[command(name = "header-override-relay")]
#[command(about = "API relay with per-channel header overrides", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;

    tracing::info!("header-override-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        channels = config.channels.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );
    if config.channels.is_empty() {
        tracing::warn!("No channels configured; every request will return 404");
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let server = RelayServer::new(config);
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
