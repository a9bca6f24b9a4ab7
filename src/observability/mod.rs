//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Forwarder
//!     → logging.rs (leveled, colorized lines)
//!     → LogSink (rendered to stdout or memory, or leveled tracing events)
//!
//! Host process
//!     → tracing events with structured fields
//!     → subscriber.rs (EnvFilter + fmt layer)
//! ```
//!
//! # Design Decisions
//! - The component logger has no global state; every forwarder owns one
//! - Sinks are injected, so tests capture output deterministically

pub mod level;
pub mod logging;
pub mod subscriber;

pub use level::{InvalidLogLevel, LogLevel};
pub use logging::{LogSink, Logger, MemorySink, Record, StdoutSink, TracingSink};
