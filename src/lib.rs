//! Host-rewriting forwarding middleware.
//!
//! Redirects every inbound request to one target authority, optionally
//! through an upstream HTTP proxy, and relays the response back.

pub mod config;
pub mod error;
pub mod http;
pub mod observability;

pub use config::ForwarderConfig;
pub use error::{ConfigurationError, DispatchError};
pub use http::{Forwarder, ForwarderLayer, ForwarderService, HttpClient, HttpServer, ProxiedClient};
pub use observability::{LogLevel, LogSink, Logger, MemorySink, StdoutSink};
