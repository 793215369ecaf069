//! In-process ledger backed by a `Vec`.

use super::{HistoryRecord, Ledger, LedgerError};
use chrono::Utc;

/// Ledger that lives only as long as the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryLedger {
    records: Vec<HistoryRecord>,
    last_id: i64,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ledger for MemoryLedger {
    fn append(&mut self, expression: &str) -> Result<HistoryRecord, LedgerError> {
        let record = HistoryRecord {
            id: self.last_id + 1,
            expression: expression.to_string(),
            recorded_at: Some(Utc::now()),
        };
        self.records.push(record.clone());
        self.last_id = record.id;
        Ok(record)
    }

    fn list_all(&self) -> Result<Vec<HistoryRecord>, LedgerError> {
        Ok(self.records.iter().rev().cloned().collect())
    }

    fn latest(&self) -> Result<Option<HistoryRecord>, LedgerError> {
        Ok(self.records.last().cloned())
    }

    fn count(&self) -> Result<usize, LedgerError> {
        Ok(self.records.len())
    }
}
