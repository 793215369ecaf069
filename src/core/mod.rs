//! Pure calculator engine.
//!
//! This module contains the side-effect-free core of the calculator:
//! - The [`EngineState`] value and its transitions
//! - The four [`Operator`]s and their evaluation
//! - Display formatting and parsing of numeric literals
//! - The keypad input alphabet
//!
//! Persisting completed computations is left to the shell in
//! [`crate::calculator`].

mod arithmetic;
mod format;
mod keypad;
mod state;

pub use arithmetic::{ArithmeticError, Operator};
pub use format::{
    format_operand, format_result, parse_entry, OPERAND_SIGNIFICANT_DIGITS,
    RESULT_FRACTION_DIGITS,
};
pub use keypad::Key;
pub use state::{EngineState, Evaluation, Phase, ERROR_SENTINEL};
