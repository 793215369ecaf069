//! SQLite-backed ledger.
//!
//! Layout: a single `history` table. `AUTOINCREMENT` keeps ids strictly
//! increasing even if rows are ever removed by hand.

use super::{HistoryRecord, Ledger, LedgerError};
use crate::config::LedgerConfig;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};

const CREATE_HISTORY_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        expression TEXT,
        recorded_at TEXT
    )";

const SELECT_RECORDS: &str = "SELECT id, expression, recorded_at FROM history";

type RawRecord = (i64, Option<String>, Option<String>);

/// Ledger stored in a local SQLite database.
///
/// The connection is opened once and held for the lifetime of the value.
pub struct SqliteLedger {
    conn: Connection,
}

impl SqliteLedger {
    /// Open the ledger at the configured location.
    pub fn from_config(config: &LedgerConfig) -> Result<Self, LedgerError> {
        Self::open(config.path())
    }

    /// Open or create a ledger file.
    ///
    /// Missing parent directories and the schema are created; existing
    /// records are never touched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let ledger = Self::with_connection(Connection::open(path)?)?;
        info!(path = %path.display(), "Opened history ledger");
        Ok(ledger)
    }

    /// Open a ledger that disappears when dropped.
    pub fn open_in_memory() -> Result<Self, LedgerError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, LedgerError> {
        conn.execute_batch(CREATE_HISTORY_TABLE)?;
        migrate_recorded_at(&conn)?;
        Ok(Self { conn })
    }
}

/// Stores written before timestamps were tracked lack the column.
fn migrate_recorded_at(conn: &Connection) -> Result<(), LedgerError> {
    let present = conn
        .query_row(
            "SELECT 1 FROM pragma_table_info('history') WHERE name = 'recorded_at'",
            [],
            |_| Ok(()),
        )
        .optional()?
        .is_some();

    if !present {
        conn.execute_batch("ALTER TABLE history ADD COLUMN recorded_at TEXT")?;
        info!("Added recorded_at column to existing history table");
    }
    Ok(())
}

fn read_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRecord> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn into_record((id, expression, recorded_at): RawRecord) -> Result<HistoryRecord, LedgerError> {
    let recorded_at = recorded_at
        .map(|value| {
            DateTime::parse_from_rfc3339(&value)
                .map(|ts| ts.with_timezone(&Utc))
                .map_err(|_| LedgerError::CorruptTimestamp { id, value })
        })
        .transpose()?;

    Ok(HistoryRecord {
        id,
        expression: expression.unwrap_or_default(),
        recorded_at,
    })
}

impl Ledger for SqliteLedger {
    fn append(&mut self, expression: &str) -> Result<HistoryRecord, LedgerError> {
        let recorded_at = Utc::now();

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO history (expression, recorded_at) VALUES (?1, ?2)",
            params![expression, recorded_at.to_rfc3339()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, expression, "Appended history record");
        Ok(HistoryRecord {
            id,
            expression: expression.to_string(),
            recorded_at: Some(recorded_at),
        })
    }

    fn list_all(&self) -> Result<Vec<HistoryRecord>, LedgerError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_RECORDS} ORDER BY id DESC"))?;
        let rows = stmt
            .query_map([], read_raw)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(into_record).collect()
    }

    fn latest(&self) -> Result<Option<HistoryRecord>, LedgerError> {
        self.conn
            .query_row(
                &format!("{SELECT_RECORDS} ORDER BY id DESC LIMIT 1"),
                [],
                read_raw,
            )
            .optional()?
            .map(into_record)
            .transpose()
    }

    fn count(&self) -> Result<usize, LedgerError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
