//! Leveled, colorized component logger.
//!
//! # Responsibilities
//! - Filter messages against a configured threshold
//! - Tag each line with a severity color, the component tag and the instance name
//! - Hand records to an injectable sink
//!
//! # Design Decisions
//! - Messages are `fmt::Arguments`; placeholder/argument mismatches fail at compile time
//! - Formatting is deferred until a message passes the threshold
//! - The sink is shared behind `Arc`, so cloning a logger is cheap

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::observability::level::LogLevel;

/// Fixed tag printed in front of every line.
pub const COMPONENT: &str = "forwarder";

/// ANSI SGR sequences used when rendering.
pub mod palette {
    pub const RED: &str = "\x1b[0;31m";
    pub const ORANGE: &str = "\x1b[0;33m";
    pub const GREEN: &str = "\x1b[0;32m";
    pub const BLUE: &str = "\x1b[0;34m";
    pub const CYAN: &str = "\x1b[0;36m";
    pub const CLEAR: &str = "\x1b[0m";
}

/// One message that passed the threshold.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub severity: LogLevel,
    pub name: &'a str,
    pub message: &'a str,
}

impl Record<'_> {
    /// Colorized line, newline included.
    pub fn render(&self) -> String {
        let (color, tag) = match self.severity {
            LogLevel::Error => (palette::RED, "ERR"),
            LogLevel::Warn => (palette::ORANGE, "WARN"),
            LogLevel::Debug => (palette::GREEN, "DEBUG"),
            _ => (palette::BLUE, "INFO"),
        };
        format!(
            "{cyan}[{COMPONENT}]{clear} {name} - {color}[{tag}]{clear} {message}\n",
            cyan = palette::CYAN,
            clear = palette::CLEAR,
            name = self.name,
            message = self.message,
        )
    }
}

/// Destination for log records.
///
/// Write failures are the sink's concern; the logger never observes them.
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record<'_>);
}

/// Writes rendered lines to the process standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write(&self, record: &Record<'_>) {
        let _ = std::io::stdout()
            .lock()
            .write_all(record.render().as_bytes());
    }
}

/// In-memory sink of rendered lines; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &Record<'_>) {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_str(&record.render());
    }
}

/// Target of events emitted by [`TracingSink`].
pub const TRACING_TARGET: &str = "host_forwarder::component";

/// Hands records to the process-wide `tracing` subscriber as uncolored
/// events at the matching level, with the instance name as a field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: &Record<'_>) {
        let (instance, message) = (record.name, record.message);
        match record.severity {
            LogLevel::Error => tracing::error!(target: TRACING_TARGET, instance, "{message}"),
            LogLevel::Warn => tracing::warn!(target: TRACING_TARGET, instance, "{message}"),
            LogLevel::Debug => tracing::debug!(target: TRACING_TARGET, instance, "{message}"),
            _ => tracing::info!(target: TRACING_TARGET, instance, "{message}"),
        }
    }
}

/// Leveled logger bound to one forwarder instance.
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    level: LogLevel,
    sink: Arc<dyn LogSink>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger at `Info` writing to standard output.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_level(name, Arc::new(StdoutSink), LogLevel::Info)
    }

    pub fn with_level(name: impl Into<String>, sink: Arc<dyn LogSink>, level: LogLevel) -> Self {
        Self {
            name: Arc::from(name.into()),
            level,
            sink,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a message at `severity` would be written.
    pub fn enabled(&self, severity: LogLevel) -> bool {
        self.level <= severity
    }

    pub fn error(&self, message: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, message);
    }

    fn log(&self, severity: LogLevel, message: fmt::Arguments<'_>) {
        if self.enabled(severity) {
            let message = message.to_string();
            self.sink.write(&Record {
                severity,
                name: &self.name,
                message: &message,
            });
        }
    }
}
