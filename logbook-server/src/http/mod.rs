//! HTTP server layer
//!
//! Axum server with:
//! - `GET /` entry logging
//! - `GET /health` liveness
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server};
