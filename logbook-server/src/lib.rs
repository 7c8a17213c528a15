//! logbook-server: HTTP entry logger
//!
//! Every `GET /` stores one fixed [`Entry`](models::Entry) in MongoDB and
//! answers with plain text.

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

use std::sync::Arc;

use logbook_core::ServerSettings;

pub use db::{EntryStore, MongoEntryStore, StoreError};
pub use error::{Result, ServerError};
pub use state::AppState;

/// Connect the document store and serve until shutdown
pub async fn serve(settings: &ServerSettings) -> Result<()> {
    let store = MongoEntryStore::connect(settings).await?;

    match store.ping().await {
        Ok(()) => tracing::info!(
            database = %settings.database,
            collection = %settings.collection,
            "connected to MongoDB"
        ),
        // Requests will answer 500 until the store comes back
        Err(e) => tracing::warn!(error = %e, "MongoDB not reachable at startup"),
    }

    let state = AppState::new(Arc::new(store));
    http::run_server(state, settings.bind).await?;

    Ok(())
}
