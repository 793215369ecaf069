//! The four binary operators and their evaluation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while applying an operator.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFinite,
}

/// A binary operator on the keypad.
///
/// Evaluation is an explicit dispatch over the four variants; no
/// expression text is ever built and evaluated.
///
/// # Example
///
/// ```rust
/// use calcledger::core::{ArithmeticError, Operator};
///
/// assert_eq!(Operator::Add.apply(3.0, 4.0), Ok(7.0));
/// assert_eq!(Operator::Divide.apply(5.0, 0.0), Err(ArithmeticError::DivisionByZero));
/// assert_eq!(Operator::Subtract.glyph(), "−");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order, bottom to top.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Get the operator's name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Glyph used on the keypad and in history expressions.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] when dividing by zero
    /// (of either sign) and with [`ArithmeticError::NonFinite`] when the
    /// result overflows the `f64` range.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ArithmeticError::NonFinite)
        }
    }
}
