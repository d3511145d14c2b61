//! fetch-relay server binary.
//!
//! With no arguments, listens on 0.0.0.0:8080 using default settings.

use std::path::PathBuf;

use clap::Parser;

use fetch_relay::config::{load_config, RelayConfig};
use fetch_relay::lifecycle::{signals, startup, Shutdown};
use fetch_relay::observability::logging;

#[derive(Parser)]
#[command(name = "fetch-relay", version)]
#[command(about = "Relay GET /fetch?url=... to an http(s) upstream", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config,
        "fetch-relay starting"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    startup::run(config, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
