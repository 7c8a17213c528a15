//! The probe itself: validate, connect, count, close.

use std::fmt;

use logbook_core::ProbeSettings;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::PgPool;

use crate::db;
use crate::error::{ProbeError, Result};

/// `name` or `schema.name`, unquoted
static TABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)?$").expect("valid regex")
});

/// A table name safe to splice into SQL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn parse(raw: &str) -> Result<Self> {
        if TABLE_NAME.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ProbeError::InvalidTable(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a successful probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub table: TableName,
    pub count: i64,
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ SUCCESS! Connected to database")?;
        write!(f, "   {} count: {}", self.table, self.count)
    }
}

/// Render a probe failure the way it is printed to stderr
pub fn failure_message(err: &ProbeError) -> String {
    format!("❌ FAILED! Could not connect\n   Error: {}", err)
}

/// Run `SELECT COUNT(*)` against `table`
pub async fn count_rows(pool: &PgPool, table: &TableName) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;
    Ok(count)
}

/// Connect, count rows once, close the pool.
///
/// The table name is checked before any connection is attempted.
pub async fn run_probe(settings: &ProbeSettings) -> Result<ProbeReport> {
    let table = TableName::parse(&settings.table)?;

    tracing::debug!(table = %table, "connecting");
    let pool = db::connect(settings).await?;

    let count = count_rows(&pool, &table).await;
    pool.close().await;

    Ok(ProbeReport {
        table,
        count: count?,
    })
}
