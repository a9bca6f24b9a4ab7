//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the listener address and the forwarder URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - URL checks reuse the forwarder's own parsing, so a config that
//!   validates also constructs

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

use crate::config::schema::HostConfig;
use crate::error::ConfigurationError;
use crate::http::request::{parse_proxy, Target};

/// A single semantic problem in a [`HostConfig`].
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address {address:?}: {source}")]
    BindAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },

    #[error("instance name must not be empty")]
    EmptyInstanceName,

    #[error(transparent)]
    Forwarder(#[from] ConfigurationError),
}

pub fn validate_config(config: &HostConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(source) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::BindAddress {
            address: config.listener.bind_address.clone(),
            source,
        });
    }

    if config.listener.instance_name.trim().is_empty() {
        errors.push(ValidationError::EmptyInstanceName);
    }

    if let Err(err) = parse_proxy(&config.forwarder.proxy) {
        errors.push(err.into());
    }

    if let Err(err) = Target::parse(&config.forwarder.target_host) {
        errors.push(err.into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
