//! Startup orchestration.
//!
//! Order: build the server (fails fast on client errors), bind the listener,
//! start the metrics exporter if enabled, then serve until shutdown.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::RelayConfig;
use crate::http::{HttpServer, ServerError};
use crate::observability::metrics;

/// Bring the relay up and serve until `shutdown` fires.
pub async fn run(config: RelayConfig, shutdown: broadcast::Receiver<()>) -> Result<(), ServerError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_redirects = config.upstream.max_redirects,
        use_system_proxy = config.upstream.use_system_proxy,
        body_errors = ?config.upstream.body_errors,
        "Configuration loaded"
    );

    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let observability = &server.config().observability;
    if observability.metrics_enabled {
        match observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    server.run(listener, shutdown).await
}
