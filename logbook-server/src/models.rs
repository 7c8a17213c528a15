//! Document types persisted by the server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged note.
///
/// `date` is stored as a native BSON datetime (millisecond precision)
/// so it sorts and filters as a date inside MongoDB.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub text: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
}

impl Entry {
    /// Create an entry stamped with the current time
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            date: Utc::now(),
        }
    }
}
