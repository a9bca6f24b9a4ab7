//! Configuration schema definitions.
//!
//! [`ForwarderConfig`] is the record a host runtime hands to the forwarder
//! (camelCase keys, as embedding runtimes pass it as JSON). [`HostConfig`]
//! wraps it with the settings of the standalone host binary.

use serde::{Deserialize, Serialize};

use crate::observability::LogLevel;

/// Forwarder configuration, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ForwarderConfig {
    /// Upstream HTTP proxy every request is tunneled through. Empty = direct.
    pub proxy: String,

    /// URL whose scheme and authority replace the inbound ones.
    pub target_host: String,

    /// Forward the caller's Host header instead of the target's.
    pub keep_host_header: bool,

    /// Component log threshold (1 = debug .. 5 = off).
    pub log_level: LogLevel,
}

impl ForwarderConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Root configuration for the host binary.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HostConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// The forwarder installed on every request.
    pub forwarder: ForwarderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Name the forwarder instance logs under.
    pub instance_name: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            instance_name: "forwarder".to_string(),
        }
    }
}

/// Where component log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSink {
    #[default]
    Stdout,
    Tracing,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Sink for the forwarder's own log lines.
    pub component_sink: ComponentSink,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "host_forwarder=info,tower_http=info".to_string(),
            component_sink: ComponentSink::Stdout,
        }
    }
}
