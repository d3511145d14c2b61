//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create the Axum router with the single `/fetch` route
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until shutdown is signalled
//! - Validate the target, fetch it, and write the body back

use std::time::Instant;

use axum::{
    extract::{RawQuery, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response::{relayed, RelayError};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::relay::{Target, UpstreamClient};

/// Path of the relay route.
pub const FETCH_PATH: &str = "/fetch";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: UpstreamClient,
}

/// Errors from building or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, ServerError> {
        let client = UpstreamClient::new(&config.upstream)?;
        let router = Self::build_router(AppState { client });
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route(
                FETCH_PATH,
                get(fetch_handler).head(not_routed).fallback(not_routed),
            )
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                        tracing::info_span!(
                            "request",
                            request_id = %request.headers().request_id(),
                            method = %request.method(),
                            path = %request.uri().path(),
                        )
                    }))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// The router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// `GET /fetch?url=...`
async fn fetch_handler(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let start = Instant::now();

    match relay(&state, query.as_deref()).await {
        Ok(body) => {
            metrics::record_fetch("ok", start);
            metrics::record_body_size(body.len());
            relayed(body)
        }
        Err(e) => {
            metrics::record_fetch(e.outcome(), start);
            e.into_response()
        }
    }
}

/// Only GET is bound on `/fetch`. HEAD would otherwise fall through to the
/// GET handler and hit the upstream.
async fn not_routed() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn relay(state: &AppState, query: Option<&str>) -> Result<Vec<u8>, RelayError> {
    let target = match Target::from_query(query) {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected target");
            return Err(e.into());
        }
    };

    tracing::debug!(target_url = %target, "Fetching upstream");

    let fetched = match state.client.fetch(&target).await {
        Ok(f) => f,
        Err(e) => {
            tracing::error!(target_url = %target, error = %e, "Upstream fetch failed");
            return Err(e.into());
        }
    };

    tracing::info!(
        target_url = %target,
        final_url = %fetched.final_url,
        upstream_status = %fetched.status,
        bytes = fetched.body.len(),
        truncated = fetched.truncated,
        "Relayed upstream body"
    );

    Ok(fetched.body)
}
