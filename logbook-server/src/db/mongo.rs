//! MongoDB-backed entry store

use std::time::Duration;

use async_trait::async_trait;
use bson::doc;
use logbook_core::ServerSettings;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use super::{EntryStore, StoreError};
use crate::models::Entry;

const APP_NAME: &str = "logbook-server";

/// Entry store writing to a single MongoDB collection
#[derive(Clone)]
pub struct MongoEntryStore {
    client: Client,
    entries: Collection<Entry>,
}

impl MongoEntryStore {
    /// Build a client from the server settings.
    ///
    /// The driver connects lazily, so this succeeds while MongoDB is down;
    /// writes then fail after `selection_timeout_secs`.
    pub async fn connect(settings: &ServerSettings) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&settings.mongo_uri).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout =
            Some(Duration::from_secs(settings.selection_timeout_secs));

        let client = Client::with_options(options)?;
        let entries = client
            .database(&settings.database)
            .collection::<Entry>(&settings.collection);

        Ok(Self { client, entries })
    }

    /// Round-trip a `ping` command to check the server is reachable
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl EntryStore for MongoEntryStore {
    async fn insert(&self, entry: &Entry) -> Result<(), StoreError> {
        let result = self.entries.insert_one(entry).await?;
        tracing::debug!(id = %result.inserted_id, "entry inserted");
        Ok(())
    }
}
