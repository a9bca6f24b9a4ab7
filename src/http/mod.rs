//! HTTP forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → layer.rs (chain integration, tower Service)
//!     → forwarder.rs (orchestration)
//!     → request.rs (target URI, Host header policy)
//!     → client.rs (round trip, optionally via an upstream proxy)
//!     → response.rs (status, headers, bounded body relay)
//!     → caller
//! ```

pub mod client;
pub mod forwarder;
pub mod layer;
pub mod request;
pub mod response;
pub mod server;

pub use client::{HttpClient, ProxiedClient};
pub use forwarder::Forwarder;
pub use layer::{ForwarderLayer, ForwarderService};
pub use request::Target;
pub use response::RELAY_BUFFER_SIZE;
pub use server::HttpServer;
