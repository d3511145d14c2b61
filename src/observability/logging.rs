//! Structured logging.
//!
//! Installs a `tracing` subscriber: `RUST_LOG` when set, otherwise the level
//! from configuration. Human-readable fmt output to stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber. Call once, before serving.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(default_level))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Expand a bare level into a filter that also covers tower_http spans.
pub(crate) fn default_filter(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("fetch_relay={level},tower_http={level},warn")
    }
}
