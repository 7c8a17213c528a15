//! Entry logging endpoint

use axum::{extract::State, routing::get, Router};
use logbook_core::config::DEFAULT_ENTRY_TEXT;

use crate::http::error::ApiError;
use crate::models::Entry;
use crate::state::AppState;

/// Body sent after a successful write
pub const ENTRY_ADDED: &str = "Entry added!";

/// GET / - record one fixed entry
async fn record_entry(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    let entry = Entry::new(DEFAULT_ENTRY_TEXT);
    state.store().insert(&entry).await?;

    tracing::info!(date = %entry.date, "entry added");
    Ok(ENTRY_ADDED)
}

/// Entry routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(record_entry))
}
