//! Durable, append-only history of completed calculations.
//!
//! The [`Ledger`] trait is the seam between the calculator shell and
//! storage. [`SqliteLedger`] keeps records in a local SQLite file that
//! survives restarts; [`MemoryLedger`] keeps them for the lifetime of the
//! process only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;
mod memory;
mod sqlite;

pub use error::LedgerError;
pub use memory::MemoryLedger;
pub use sqlite::SqliteLedger;

/// One completed calculation.
///
/// Records are immutable once written. Ids are assigned by the ledger,
/// strictly increase and are never reused.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Ledger-assigned identifier
    pub id: i64,

    /// Human-readable line, e.g. `"3 + 4 = 7"`
    pub expression: String,

    /// When the record was written. `None` for rows carried over from
    /// stores that predate timestamps.
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Append-only log of completed calculations.
///
/// # Example
///
/// ```rust
/// use calcledger::ledger::{Ledger, MemoryLedger};
///
/// let mut ledger = MemoryLedger::new();
/// ledger.append("1 + 1 = 2").unwrap();
/// ledger.append("2 × 3 = 6").unwrap();
///
/// let records = ledger.list_all().unwrap();
/// assert_eq!(records[0].expression, "2 × 3 = 6");
/// assert_eq!(records[1].expression, "1 + 1 = 2");
/// ```
pub trait Ledger {
    /// Assign the next id to `expression` and persist it.
    ///
    /// Either the whole record is written or nothing is.
    fn append(&mut self, expression: &str) -> Result<HistoryRecord, LedgerError>;

    /// All records, newest first.
    ///
    /// Each call reflects the ledger as it is at that moment.
    fn list_all(&self) -> Result<Vec<HistoryRecord>, LedgerError>;

    /// The most recent record, if any.
    fn latest(&self) -> Result<Option<HistoryRecord>, LedgerError> {
        Ok(self.list_all()?.into_iter().next())
    }

    /// Number of stored records.
    fn count(&self) -> Result<usize, LedgerError> {
        Ok(self.list_all()?.len())
    }
}

/// Render every record, newest first, as a pretty-printed JSON array.
pub fn export_json<L: Ledger + ?Sized>(ledger: &L) -> Result<String, LedgerError> {
    let records = ledger.list_all()?;
    serde_json::to_string_pretty(&records)
        .map_err(|e| LedgerError::SerializationFailed(e.to_string()))
}
