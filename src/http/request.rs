//! Outbound request construction.
//!
//! # Responsibilities
//! - Parse the target and proxy URLs once, at construction
//! - Redirect an inbound URI to the target's scheme and authority
//! - Resolve the Host header the caller addressed
//!
//! # Design Decisions
//! - The inbound request is consumed: headers, body and extensions move
//!   into the outbound request, nothing is deep-copied
//! - Path and query are reused as the inbound `PathAndQuery`, never re-encoded
//! - Userinfo never reaches the wire URI; it becomes a Basic `Authorization`
//!   value, sent only when the caller supplied none
//! - An explicit port is kept as written, default ports included

use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::{HeaderValue, Uri};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::percent_decode_str;
use url::{Position, Url};

use crate::error::{ConfigurationError, DispatchError};

/// Parse the upstream proxy URL. Empty means a direct connection.
pub fn parse_proxy(raw: &str) -> Result<Option<Url>, ConfigurationError> {
    if raw.is_empty() {
        return Ok(None);
    }
    Url::parse(raw)
        .map(Some)
        .map_err(|source| ConfigurationError::InvalidProxyUrl {
            url: raw.to_string(),
            source,
        })
}

/// The destination every inbound request is redirected to.
#[derive(Debug, Clone)]
pub struct Target {
    url: Url,
    scheme: Scheme,
    authority: Authority,
    host_header: HeaderValue,
    credentials: Option<HeaderValue>,
}

impl Target {
    pub fn parse(raw: &str) -> Result<Self, ConfigurationError> {
        if raw.is_empty() {
            return Err(ConfigurationError::MissingTargetHost);
        }

        let url = Url::parse(raw).map_err(|source| ConfigurationError::InvalidTargetUrl {
            url: raw.to_string(),
            source,
        })?;

        if !matches!(url.host_str(), Some(host) if !host.is_empty()) {
            return Err(ConfigurationError::TargetWithoutHost(raw.to_string()));
        }

        let invalid = |reason: String| ConfigurationError::InvalidTargetAuthority {
            url: raw.to_string(),
            reason,
        };

        let scheme = Scheme::try_from(url.scheme()).map_err(|e| invalid(e.to_string()))?;

        let host = &url[Position::BeforeHost..Position::AfterHost];
        let host_and_port = match url.port().or_else(|| explicit_port(raw)) {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        let authority =
            Authority::try_from(host_and_port.as_str()).map_err(|e| invalid(e.to_string()))?;
        let host_header =
            HeaderValue::try_from(host_and_port).map_err(|e| invalid(e.to_string()))?;
        let credentials = basic_credentials(&url).map_err(invalid)?;

        Ok(Self {
            url,
            scheme,
            authority,
            host_header,
            credentials,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// `host[:port]`; userinfo is split out into [`Target::credentials`].
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// `Basic` authorization built from the target's userinfo, if any.
    pub fn credentials(&self) -> Option<&HeaderValue> {
        self.credentials.as_ref()
    }

    /// `host[:port]`, as sent in the Host header.
    pub fn host_header(&self) -> &HeaderValue {
        &self.host_header
    }

    /// Point `uri` at this target, keeping its path and query byte-for-byte.
    pub fn rewrite_uri(&self, uri: &Uri) -> Result<Uri, DispatchError> {
        let path_and_query = uri
            .path_and_query()
            .cloned()
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(Uri::builder()
            .scheme(self.scheme.clone())
            .authority(self.authority.clone())
            .path_and_query(path_and_query)
            .build()?)
    }
}

/// Port written in `raw` that `url` normalised away because it is the
/// scheme default.
fn explicit_port(raw: &str) -> Option<u16> {
    raw.parse::<Uri>().ok()?.port_u16()
}

fn basic_credentials(url: &Url) -> Result<Option<HeaderValue>, String> {
    if url.username().is_empty() && url.password().is_none() {
        return Ok(None);
    }
    let decode = |part: &str| {
        percent_decode_str(part)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
            .map_err(|e| e.to_string())
    };
    let user = decode(url.username())?;
    let password = decode(url.password().unwrap_or_default())?;

    let encoded = STANDARD.encode(format!("{user}:{password}"));
    let mut value =
        HeaderValue::try_from(format!("Basic {encoded}")).map_err(|e| e.to_string())?;
    value.set_sensitive(true);
    Ok(Some(value))
}

/// The host the caller addressed: the Host header, or the URI authority
/// when the header is absent (HTTP/2 `:authority`, absolute-form targets).
pub fn inbound_host(parts: &Parts) -> Option<HeaderValue> {
    if let Some(host) = parts.headers.get(HOST) {
        return Some(host.clone());
    }
    let authority = parts.uri.authority()?;
    let host = match authority.port_u16() {
        Some(port) => format!("{}:{}", authority.host(), port),
        None => authority.host().to_string(),
    };
    HeaderValue::try_from(host).ok()
}
