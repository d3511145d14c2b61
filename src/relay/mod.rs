//! Relay subsystem.
//!
//! # Data Flow
//! ```text
//! raw query string
//!     → target.rs (extract `url`, parse, scheme check)
//!     → client.rs (single GET, follow redirects, buffer body)
//!     → Fetched { upstream status, body, truncated }
//!     → http layer writes 200 text/plain
//! ```
//!
//! # Design Decisions
//! - Stateless per request; the only shared value is the immutable client
//! - Upstream status and content type are read for logging only

pub mod client;
pub mod target;

pub use client::{FetchError, Fetched, UpstreamClient};
pub use target::{target_param, Target, TargetError, ALLOWED_SCHEMES, TARGET_PARAM};
