//! Error types for forwarder construction and dispatch.

use thiserror::Error;

/// Boxed error returned by upstream transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Construction-time failure; no forwarder is produced.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("target host url is required")]
    MissingTargetHost,

    #[error("unable to parse proxy url {url:?}: {source}")]
    InvalidProxyUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unable to parse target host url {url:?}: {source}")]
    InvalidTargetUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("target host url {0:?} has no host")]
    TargetWithoutHost(String),

    #[error("target host url {url:?} is not a valid http authority: {reason}")]
    InvalidTargetAuthority { url: String, reason: String },

    #[error("unable to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Per-request failure to obtain an upstream response.
///
/// Rendered to the caller as `502 Bad Gateway` with the `Display` text as body.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{0}")]
    Upstream(#[source] BoxError),

    #[error("unable to assemble outbound request: {0}")]
    InvalidRequest(#[from] axum::http::Error),
}

impl DispatchError {
    pub fn upstream(err: impl Into<BoxError>) -> Self {
        DispatchError::Upstream(err.into())
    }
}
