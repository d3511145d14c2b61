//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → handed to startup, then to the server and client builders
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; running without a file reproduces the
//!   stock behaviour (port 8080, 10 redirects, no timeout)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{BodyErrorPolicy, ListenerConfig, ObservabilityConfig, RelayConfig, UpstreamConfig};
pub use validation::ValidationError;
