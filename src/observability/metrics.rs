//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relayed requests by outcome
//! - `relay_request_duration_seconds` (histogram): handler latency by outcome
//! - `relay_response_bytes` (histogram): size of relayed bodies
//!
//! Outcomes: `ok`, `invalid_target`, `fetch_failed`, `body_failed`.
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - The exporter binds its own listener, never a route on the relay

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter on `addr`.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one handled `/fetch` request.
pub fn record_fetch(outcome: &'static str, start: Instant) {
    metrics::counter!("relay_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("relay_request_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_body_size(bytes: usize) {
    metrics::histogram!("relay_response_bytes").record(bytes as f64);
}
