//! Pool construction for the probe
//!
//! The pool is sized and timed from `[probe]` settings and tags its
//! connections with an application name so they show up in `pg_stat_activity`.

use std::str::FromStr;
use std::time::Duration;

use logbook_core::ProbeSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::error::Result;

const APPLICATION_NAME: &str = "pgprobe";

/// Parse the connection string and tag the session
pub fn connect_options(settings: &ProbeSettings) -> Result<PgConnectOptions> {
    let options = PgConnectOptions::from_str(&settings.database_url)?;
    Ok(options.application_name(APPLICATION_NAME))
}

/// Pool limits taken from the settings
pub fn pool_options(settings: &ProbeSettings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
}

/// Open the probe's pool.
///
/// Fails on a malformed URL before any network traffic, otherwise on the
/// first connection attempt.
pub async fn connect(settings: &ProbeSettings) -> Result<PgPool> {
    let options = connect_options(settings)?;
    let pool = pool_options(settings).connect_with(options).await?;
    Ok(pool)
}
