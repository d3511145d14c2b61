//! Fetch relay library.
//!
//! A single-route HTTP relay: `GET /fetch?url=<target>` validates that the
//! target is an absolute `http`/`https` URL, performs one outbound GET, and
//! returns the upstream body as `200 text/plain`.
//!
//! ```text
//!     Client ──▶ http::server ──▶ relay::target ──▶ relay::client ──▶ Upstream
//!            ◀── http::response ◀──────────── buffered body ◀────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
