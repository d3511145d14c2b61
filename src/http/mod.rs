//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign / echo request ID)
//!     → server.rs fetch_handler → relay subsystem
//!     → response.rs (200 text/plain, or mapped error)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, RequestIdExt, X_REQUEST_ID};
pub use response::{RelayError, FETCH_FAILED, INVALID_URL, RELAY_CONTENT_TYPE};
pub use server::{AppState, HttpServer, ServerError, FETCH_PATH};
