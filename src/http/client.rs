//! Upstream HTTP client capability.
//!
//! # Responsibilities
//! - Define the single round-trip operation the forwarder depends on
//! - Provide the production client, optionally tunneled through an HTTP proxy
//!
//! # Design Decisions
//! - Object-safe trait so tests inject deterministic doubles
//! - The production client negotiates its own protocol version; the
//!   inbound version stays on the outbound request value only
//! - Bodies already at end of stream go out as fixed zero-length bodies,
//!   never as an empty chunked stream

use async_trait::async_trait;
use axum::body::{Body, Bytes, HttpBody};
use axum::http::{Request, Response, Version};
use url::Url;

use crate::error::{ConfigurationError, DispatchError};

/// Executes one request against the network and returns the response head
/// with a streaming body.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: Request<Body>) -> Result<Response<Body>, DispatchError>;
}

/// `reqwest`-backed client; all traffic goes through `proxy` when set.
#[derive(Debug, Clone)]
pub struct ProxiedClient {
    inner: reqwest::Client,
    proxy: Option<Url>,
}

impl ProxiedClient {
    pub fn new(proxy: Option<Url>) -> Result<Self, ConfigurationError> {
        let builder = reqwest::Client::builder();
        let builder = match &proxy {
            Some(url) => builder.proxy(reqwest::Proxy::all(url.as_str())?),
            None => builder.no_proxy(),
        };

        Ok(Self {
            inner: builder.build()?,
            proxy,
        })
    }

    /// Client connecting straight to the target.
    pub fn direct() -> Result<Self, ConfigurationError> {
        Self::new(None)
    }

    pub fn proxy(&self) -> Option<&Url> {
        self.proxy.as_ref()
    }
}

#[async_trait]
impl HttpClient for ProxiedClient {
    async fn execute(&self, request: Request<Body>) -> Result<Response<Body>, DispatchError> {
        let (mut parts, body) = request.into_parts();
        parts.version = Version::HTTP_11;

        let body = if body.is_end_stream() {
            reqwest::Body::from(Bytes::new())
        } else {
            reqwest::Body::wrap_stream(body.into_data_stream())
        };
        let request = reqwest::Request::try_from(Request::from_parts(parts, body))
            .map_err(DispatchError::upstream)?;

        let mut upstream = self
            .inner
            .execute(request)
            .await
            .map_err(DispatchError::upstream)?;

        let mut response = Response::new(Body::empty());
        *response.status_mut() = upstream.status();
        *response.version_mut() = upstream.version();
        *response.headers_mut() = std::mem::take(upstream.headers_mut());
        *response.body_mut() = Body::from_stream(upstream.bytes_stream());

        Ok(response)
    }
}
