//! logbook-server binary
//!
//! Records a fixed entry in MongoDB on every `GET /`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use logbook_core::tracing_setup::{self, TracingConfig};
use logbook_core::{LogbookConfig, ServerSettings};

#[derive(Parser, Debug)]
#[command(
    name = "logbook-server",
    author,
    version,
    about = "HTTP entry logger: every GET / stores one entry in MongoDB"
)]
struct Cli {
    /// Path to a logbook.toml config file
    #[arg(long, env = "LOGBOOK_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Address to bind to (default: 0.0.0.0:3000)
    #[arg(long, short = 'b', env = "LOGBOOK_BIND")]
    bind: Option<SocketAddr>,

    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI")]
    mongo_uri: Option<String>,

    /// MongoDB database name
    #[arg(long, env = "LOGBOOK_DATABASE")]
    database: Option<String>,

    /// Collection entries are written to
    #[arg(long, env = "LOGBOOK_COLLECTION")]
    collection: Option<String>,

    /// Seconds a write waits for a reachable MongoDB server
    #[arg(long = "selection-timeout", env = "LOGBOOK_SELECTION_TIMEOUT", value_name = "SECS")]
    selection_timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long)]
    otel: bool,
}

impl Cli {
    /// Flags and env vars win over the config file
    fn apply(self, settings: &mut ServerSettings) {
        if let Some(bind) = self.bind {
            settings.bind = bind;
        }
        if let Some(uri) = self.mongo_uri {
            settings.mongo_uri = uri;
        }
        if let Some(database) = self.database {
            settings.database = database;
        }
        if let Some(collection) = self.collection {
            settings.collection = collection;
        }
        if let Some(secs) = self.selection_timeout {
            settings.selection_timeout_secs = secs;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        service: "logbook-server",
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let mut config =
        LogbookConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config.server);
    config.server.validate().context("Invalid configuration")?;

    let result = logbook_server::serve(&config.server)
        .await
        .context("Server error");

    tracing_setup::shutdown_otel();
    result
}
