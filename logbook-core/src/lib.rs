//! logbook-core: ambient infrastructure shared by the logbook binaries
//!
//! - Layered configuration (defaults, TOML file, env, flags)
//! - Tracing initialization with optional OTLP export
//! - Structured configuration errors

pub mod config;
pub mod error;
pub mod tracing_setup;

pub use config::{LogbookConfig, ProbeSettings, ServerSettings};
pub use error::{ConfigError, Result};
