//! API error type with IntoResponse
//!
//! Clients only ever see a fixed plain-text message; the cause is logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::StoreError;

/// Body sent with every failed entry write
pub const ENTRY_FAILED: &str = "Error occurred";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Persistence failed (500, logged)
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!(error = %e, "failed to save entry");
                (StatusCode::INTERNAL_SERVER_ERROR, ENTRY_FAILED).into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
