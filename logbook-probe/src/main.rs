//! pgprobe - check that a Postgres database answers a COUNT query
//!
//! Exit codes: 0 when the query succeeds, 1 on any failure.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use logbook_core::tracing_setup::{self, TracingConfig};
use logbook_core::{LogbookConfig, ProbeSettings};
use logbook_probe::{failure_message, run_probe};

#[derive(Parser, Debug)]
#[command(
    name = "pgprobe",
    author,
    version,
    about = "One-shot Postgres connection probe: counts rows in a table and exits"
)]
struct Cli {
    /// Path to a logbook.toml config file
    #[arg(long, env = "LOGBOOK_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Table to count rows in (name or schema.name)
    #[arg(long, short = 't', env = "PGPROBE_TABLE")]
    table: Option<String>,

    /// Maximum pool connections
    #[arg(long)]
    max_connections: Option<u32>,

    /// Seconds to wait for a connection
    #[arg(long = "acquire-timeout", value_name = "SECS")]
    acquire_timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long)]
    otel: bool,
}

impl Cli {
    /// Flags and env vars win over the config file
    fn apply(self, settings: &mut ProbeSettings) {
        if let Some(url) = self.database_url {
            settings.database_url = url;
        }
        if let Some(table) = self.table {
            settings.table = table;
        }
        if let Some(max) = self.max_connections {
            settings.max_connections = max;
        }
        if let Some(secs) = self.acquire_timeout {
            settings.acquire_timeout_secs = secs;
        }
    }
}

fn load_settings(cli: Cli) -> Result<ProbeSettings> {
    let mut config =
        LogbookConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config.probe);
    config.probe.validate().context("Invalid configuration")?;
    Ok(config.probe)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        service: "pgprobe",
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let settings = match load_settings(cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let code = match run_probe(&settings).await {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "probe failed");
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    };

    tracing_setup::shutdown_otel();
    code
}
