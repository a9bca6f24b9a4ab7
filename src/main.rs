//! Standalone host for the forwarding middleware.
//!
//! ```text
//!   Caller ──▶ listener ──▶ TraceLayer ──▶ Forwarder ──▶ [upstream proxy] ──▶ Target
//!   Caller ◀────────────────────────────── relay ◀─────────────────────────── Target
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use host_forwarder::config::loader::{load_config, ConfigError};
use host_forwarder::config::validation::validate_config;
use host_forwarder::config::HostConfig;
use host_forwarder::http::server::shutdown_signal;
use host_forwarder::observability::subscriber::init_tracing;
use host_forwarder::HttpServer;

#[derive(Parser)]
#[command(name = "host-forwarder")]
#[command(about = "Forward every request to one target, optionally through an HTTP proxy", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the target host URL.
    #[arg(short, long)]
    target: Option<String>,

    /// Override the upstream proxy URL.
    #[arg(long)]
    proxy: Option<String>,

    /// Forward the caller's Host header instead of the target's.
    #[arg(long)]
    keep_host_header: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => HostConfig::default(),
    };

    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(target) = cli.target {
        config.forwarder.target_host = target;
    }
    if let Some(proxy) = cli.proxy {
        config.forwarder.proxy = proxy;
    }
    if cli.keep_host_header {
        config.forwarder.keep_host_header = true;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_tracing(&config.observability.log_filter)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        target_host = %config.forwarder.target_host,
        proxy = %config.forwarder.proxy,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
