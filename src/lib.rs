//! Calcledger: a four-function calculator engine with a durable history
//!
//! Calcledger follows a "pure core, imperative shell" layout. The engine
//! state and every keypad operation are pure values and functions; the
//! only side effect, appending a completed calculation to the ledger,
//! lives in the shell.
//!
//! # Core Concepts
//!
//! - **Engine**: [`EngineState`] holds the current entry and at most one
//!   pending operation
//! - **Ledger**: [`Ledger`] is an append-only log of completed
//!   calculations, listed newest first
//! - **Calculator**: [`Calculator`] dispatches [`Key`] presses and records
//!   results
//!
//! Only one operation is ever pending. Choosing a second operator before
//! `=` replaces the first one rather than evaluating it, so `9 × × =`
//! computes `9 × 9`.
//!
//! # Example
//!
//! ```rust
//! use calcledger::{Calculator, Key, Ledger, Operator, SqliteLedger};
//!
//! let ledger = SqliteLedger::open_in_memory().unwrap();
//! let mut calc = Calculator::new(ledger);
//!
//! calc.press(Key::Digit('3')).unwrap();
//! calc.press(Key::Operator(Operator::Add)).unwrap();
//! calc.press(Key::Digit('4')).unwrap();
//! let record = calc.press(Key::Equals).unwrap().unwrap();
//!
//! assert_eq!(calc.display(), "7");
//! assert_eq!(record.expression, "3 + 4 = 7");
//! assert_eq!(calc.ledger().latest().unwrap(), Some(record));
//! ```

pub mod calculator;
pub mod config;
pub mod core;
pub mod ledger;

// Re-export commonly used types
pub use crate::calculator::{Calculator, CalculatorError};
pub use crate::config::LedgerConfig;
pub use crate::core::{EngineState, Evaluation, Key, Operator, Phase};
pub use crate::ledger::{HistoryRecord, Ledger, LedgerError, MemoryLedger, SqliteLedger};
