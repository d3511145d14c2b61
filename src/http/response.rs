//! Response construction and error mapping.
//!
//! # Responsibilities
//! - Wrap the relayed body as `200 text/plain`
//! - Map relay errors to fixed status codes and bodies
//!
//! # Design Decisions
//! - Upstream status and content type are never forwarded
//! - Error bodies are fixed strings; details go to the log, not the caller

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::relay::{FetchError, TargetError};

pub const INVALID_URL: &str = "Invalid URL";
pub const FETCH_FAILED: &str = "Fetch failed";

/// Content type of every relayed body.
pub const RELAY_CONTENT_TYPE: &str = "text/plain";

/// Everything that can stop a relay short of a 200.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error(transparent)]
    InvalidTarget(#[from] TargetError),

    #[error(transparent)]
    Upstream(#[from] FetchError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidTarget(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(FetchError::Request(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Upstream(FetchError::Body { .. }) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            RelayError::InvalidTarget(_) => INVALID_URL,
            RelayError::Upstream(_) => FETCH_FAILED,
        }
    }

    /// Label used for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::InvalidTarget(_) => "invalid_target",
            RelayError::Upstream(FetchError::Request(_)) => "fetch_failed",
            RelayError::Upstream(FetchError::Body { .. }) => "body_failed",
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.body()).into_response()
    }
}

/// Build the success response for a relayed body.
pub fn relayed(body: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(RELAY_CONTENT_TYPE),
    );
    response
}
