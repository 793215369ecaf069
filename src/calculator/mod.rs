//! Imperative shell around the pure engine.
//!
//! A [`Calculator`] owns one [`EngineState`], one [`Ledger`] and the
//! history line shown above the display. Key presses are dispatched to the
//! pure engine; only `=` touches storage.

mod error;

pub use error::CalculatorError;

use crate::config::LedgerConfig;
use crate::core::{EngineState, Evaluation, Key, Operator};
use crate::ledger::{HistoryRecord, Ledger, LedgerError, MemoryLedger, SqliteLedger};
use tracing::{debug, info, warn};

/// A single calculator session bound to a ledger.
///
/// # Example
///
/// ```rust
/// use calcledger::calculator::Calculator;
///
/// let mut calc = Calculator::in_memory();
/// for label in ["3", "+", "4", "="] {
///     calc.press_label(label).unwrap();
/// }
///
/// assert_eq!(calc.display(), "7");
/// assert_eq!(calc.history_line(), Some("3 + 4 = 7"));
/// ```
pub struct Calculator<L: Ledger> {
    state: EngineState,
    ledger: L,
    history_line: Option<String>,
}

impl Calculator<SqliteLedger> {
    /// Open a calculator backed by the configured SQLite ledger.
    pub fn open(config: &LedgerConfig) -> Result<Self, LedgerError> {
        Ok(Self::new(SqliteLedger::from_config(config)?))
    }
}

impl Calculator<MemoryLedger> {
    /// Calculator whose history is discarded at exit.
    pub fn in_memory() -> Self {
        Self::new(MemoryLedger::new())
    }
}

impl<L: Ledger> Calculator<L> {
    pub fn new(ledger: L) -> Self {
        Self {
            state: EngineState::new(),
            ledger,
            history_line: None,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Text for the main display.
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Expression of the most recent computation, until cleared.
    pub fn history_line(&self) -> Option<&str> {
        self.history_line.as_deref()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// All recorded computations, newest first.
    pub fn history(&self) -> Result<Vec<HistoryRecord>, LedgerError> {
        self.ledger.list_all()
    }

    /// Dispatch one key press.
    ///
    /// Returns the new history record when the press completed a
    /// calculation.
    pub fn press(&mut self, key: Key) -> Result<Option<HistoryRecord>, CalculatorError> {
        debug!(key = %key.label(), "Key pressed");
        match key {
            Key::Digit(symbol) => self.input_digit(symbol),
            Key::Operator(operator) => self.choose_operator(operator),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Clear => self.clear(),
            Key::Equals => return self.calculate(),
        }
        Ok(None)
    }

    /// Dispatch a keypad label. Unknown labels are ignored.
    pub fn press_label(&mut self, label: &str) -> Result<Option<HistoryRecord>, CalculatorError> {
        match Key::from_label(label) {
            Some(key) => self.press(key),
            None => {
                debug!(label, "Ignoring unknown key label");
                Ok(None)
            }
        }
    }

    pub fn input_digit(&mut self, symbol: char) {
        self.transition(self.state.input_digit(symbol));
    }

    /// Reset the engine and the history line. Ledger rows are kept.
    pub fn clear(&mut self) {
        self.transition(self.state.clear());
        self.history_line = None;
    }

    pub fn toggle_sign(&mut self) {
        self.transition(self.state.toggle_sign());
    }

    pub fn percent(&mut self) {
        self.transition(self.state.percent());
    }

    pub fn choose_operator(&mut self, operator: Operator) {
        self.transition(self.state.choose_operator(operator));
    }

    /// Evaluate the pending operation and record it.
    ///
    /// Returns `Ok(None)` without touching anything when no operator is
    /// pending. On an arithmetic failure the display shows the error
    /// sentinel and nothing is recorded.
    ///
    /// A storage failure does not roll back the computation: the display
    /// and history line still show the result and the error is returned so
    /// the caller can report the missing record.
    pub fn calculate(&mut self) -> Result<Option<HistoryRecord>, CalculatorError> {
        match self.state.evaluate() {
            Evaluation::Idle => {
                debug!("Nothing pending, equals ignored");
                Ok(None)
            }
            Evaluation::Failed { error, next } => {
                warn!(%error, "Calculation failed");
                self.transition(next);
                Err(error.into())
            }
            Evaluation::Computed {
                expression, next, ..
            } => {
                self.transition(next);
                self.history_line = Some(expression.clone());

                match self.ledger.append(&expression) {
                    Ok(record) => {
                        info!(id = record.id, expression = %record.expression, "Recorded calculation");
                        Ok(Some(record))
                    }
                    Err(source) => {
                        warn!(%expression, error = %source, "Calculation not recorded");
                        Err(CalculatorError::Storage { expression, source })
                    }
                }
            }
        }
    }

    fn transition(&mut self, next: EngineState) {
        if next != self.state {
            debug!(
                display = next.display(),
                phase = next.phase().name(),
                "Engine state changed"
            );
        }
        self.state = next;
    }
}
