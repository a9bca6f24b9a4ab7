//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! runtime JSON record ──────────────┐
//!                                   ▼
//! config file (TOML)          ForwarderConfig
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → HostConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::ComponentSink;
pub use schema::ForwarderConfig;
pub use schema::HostConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
