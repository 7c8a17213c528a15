//! Error types for the connection probe

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProbeError>;

/// Anything that stops the probe from reporting a count
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Table name is not a plain (optionally schema-qualified) identifier
    #[error("invalid table name '{0}'")]
    InvalidTable(String),

    /// Connecting or querying failed
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}
