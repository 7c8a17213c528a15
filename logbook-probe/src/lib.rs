//! logbook-probe: one-shot Postgres connectivity check
//!
//! Opens a pool, runs a single `COUNT(*)` and reports the result.
//! The `pgprobe` binary maps the outcome to exit code 0 or 1.

pub mod db;
pub mod error;
pub mod probe;

pub use error::{ProbeError, Result};
pub use probe::{count_rows, failure_message, run_probe, ProbeReport, TableName};
