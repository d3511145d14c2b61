//! Target URL extraction and validation.
//!
//! # Responsibilities
//! - Pull the `url` parameter out of the raw query string
//! - Parse it as an absolute URI
//! - Accept only `http` and `https` schemes
//!
//! # Design Decisions
//! - The first `url` value wins when the parameter repeats
//! - Scheme comparison happens after the parser lowercases the scheme,
//!   so `HTTP://host` is accepted
//! - Missing and empty parameters are both rejected
//! - The raw string must spell out `scheme://`; WHATWG would otherwise turn
//!   `http:host` or `http:\\host` into a fetchable authority

use std::fmt;
use std::str::FromStr;
use url::Url;

/// Query parameter carrying the target.
pub const TARGET_PARAM: &str = "url";

/// Schemes the relay is willing to fetch.
pub const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Reasons a target is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    #[error("missing `url` query parameter")]
    Missing,

    #[error("unparseable url: {0}")]
    Parse(#[from] url::ParseError),

    #[error("scheme `{0}` is not allowed")]
    Scheme(String),

    #[error("url has no `//` authority")]
    MissingAuthority,
}

/// A validated upstream target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    url: Url,
}

impl Target {
    /// Parse and validate a raw target string.
    pub fn parse(raw: &str) -> Result<Self, TargetError> {
        let url = Url::parse(raw)?;
        if !ALLOWED_SCHEMES.contains(&url.scheme()) {
            return Err(TargetError::Scheme(url.scheme().to_string()));
        }
        match raw.split_once("://") {
            Some((scheme, _)) if scheme.eq_ignore_ascii_case(url.scheme()) => Ok(Self { url }),
            _ => Err(TargetError::MissingAuthority),
        }
    }

    /// Extract the target from a raw query string (without the leading `?`).
    pub fn from_query(query: Option<&str>) -> Result<Self, TargetError> {
        let raw = query.and_then(target_param).ok_or(TargetError::Missing)?;
        Self::parse(&raw)
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Return the first decoded `url` value from a query string.
pub fn target_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TARGET_PARAM)
        .map(|(_, value)| value.into_owned())
}
