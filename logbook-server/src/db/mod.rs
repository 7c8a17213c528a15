//! Document store layer
//!
//! Handlers only see the [`EntryStore`] trait; `main` decides which
//! implementation backs it.

pub mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Entry;

pub use mongo::MongoEntryStore;

/// Persistence failure
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Somewhere entries can be written
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Persist one entry. Any error means nothing was written.
    async fn insert(&self, entry: &Entry) -> Result<(), StoreError>;
}
