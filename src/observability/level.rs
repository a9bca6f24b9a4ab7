//! Log severity levels.
//!
//! Levels are totally ordered from most to least verbose. A message at
//! severity `S` passes a threshold `T` iff `T <= S`, so `Debug` lets
//! everything through and `Off` silences every severity.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity threshold, serialized as its ordinal (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum LogLevel {
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

/// Returned when an ordinal outside 1-5 is converted into a [`LogLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("log level must be between 1 (debug) and 5 (off), got {0}")]
pub struct InvalidLogLevel(pub u8);

impl TryFrom<u8> for LogLevel {
    type Error = InvalidLogLevel;

    fn try_from(value: u8) -> Result<Self, InvalidLogLevel> {
        match value {
            1 => Ok(LogLevel::Debug),
            2 => Ok(LogLevel::Info),
            3 => Ok(LogLevel::Warn),
            4 => Ok(LogLevel::Error),
            5 => Ok(LogLevel::Off),
            other => Err(InvalidLogLevel(other)),
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level as u8
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
