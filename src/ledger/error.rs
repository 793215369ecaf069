//! Ledger error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the ledger
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The SQLite store rejected an operation
    #[error("Storage failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The storage location could not be prepared
    #[error("Storage location unavailable: {0}")]
    Io(#[from] std::io::Error),

    /// A stored timestamp could not be parsed
    #[error("Record {id} has an unreadable timestamp '{value}'")]
    CorruptTimestamp { id: i64, value: String },

    /// Records could not be rendered for export
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
