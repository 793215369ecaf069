//! Errors surfaced by the calculator shell.

use crate::core::ArithmeticError;
use crate::ledger::LedgerError;
use thiserror::Error;

/// Errors a key press can report to the UI.
///
/// Both variants are recoverable; the calculator stays usable.
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// The pending operation could not be computed
    #[error("Calculation failed: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// The result was computed and displayed but not recorded
    #[error("Computed '{expression}' but could not record it: {source}")]
    Storage {
        expression: String,
        #[source]
        source: LedgerError,
    },
}
