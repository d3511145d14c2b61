//! Outbound HTTP client.
//!
//! # Responsibilities
//! - Issue exactly one GET chain (including redirects) per relayed request
//! - Buffer the upstream body fully
//! - Apply the configured policy when the body fails mid-read
//!
//! # Design Decisions
//! - One `reqwest::Client` per process, cloned into handlers (cheap `Arc`)
//! - No client timeout; an unresponsive upstream holds the request open
//! - Redirects follow `max_redirects`, 0 returns the 3xx response as-is
//! - The upstream response is owned by `fetch` and dropped on every return
//!   path, which releases its connection

use reqwest::{redirect, Client, StatusCode};
use url::Url;

use crate::config::{BodyErrorPolicy, UpstreamConfig};
use crate::relay::target::Target;

/// Errors from talking to the upstream.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No response headers were obtained (DNS, connect, TLS, redirect limit).
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Headers arrived but the body did not complete.
    #[error("upstream body failed after {received} bytes: {source}")]
    Body {
        received: usize,
        #[source]
        source: reqwest::Error,
    },
}

/// A fully buffered upstream response.
#[derive(Debug)]
pub struct Fetched {
    /// Upstream status. Logged, never forwarded.
    pub status: StatusCode,
    /// URL after redirects.
    pub final_url: Url,
    pub body: Vec<u8>,
    /// The body ended early and the error was swallowed.
    pub truncated: bool,
}

/// Client used for every outbound fetch.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    inner: Client,
    body_errors: BodyErrorPolicy,
}

impl UpstreamClient {
    /// Build the client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let policy = match config.max_redirects {
            0 => redirect::Policy::none(),
            n => redirect::Policy::limited(n),
        };

        let mut builder = Client::builder().redirect(policy);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            inner: builder.build()?,
            body_errors: config.body_errors,
        })
    }

    pub fn body_errors(&self) -> BodyErrorPolicy {
        self.body_errors
    }

    /// GET the target and read its body to the end.
    pub async fn fetch(&self, target: &Target) -> Result<Fetched, FetchError> {
        let mut response = self
            .inner
            .get(target.as_url().clone())
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        let final_url = response.url().clone();
        let mut body = Vec::new();
        let mut truncated = false;

        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(source) => match self.body_errors {
                    BodyErrorPolicy::Swallow => {
                        tracing::warn!(
                            target_url = %target,
                            received = body.len(),
                            error = %source,
                            "Upstream body read failed, relaying partial body"
                        );
                        truncated = true;
                        break;
                    }
                    BodyErrorPolicy::BadGateway => {
                        return Err(FetchError::Body {
                            received: body.len(),
                            source,
                        });
                    }
                },
            }
        }

        Ok(Fetched {
            status,
            final_url,
            body,
            truncated,
        })
    }
}
