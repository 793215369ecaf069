//! The keypad input alphabet.
//!
//! Twelve distinct symbols reach the engine: digits (with the decimal
//! point), the four operators, sign toggle, percent, clear and equals.

use super::arithmetic::Operator;
use serde::{Deserialize, Serialize};

/// A single keypad press.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operator),
    ToggleSign,
    Percent,
    Clear,
    Equals,
}

impl Key {
    /// Build a digit key, rejecting anything but `0`-`9` and `.`.
    pub fn digit(symbol: char) -> Option<Self> {
        (symbol.is_ascii_digit() || symbol == '.').then_some(Self::Digit(symbol))
    }

    /// Map a keypad label to its key.
    ///
    /// Accepts the labels printed on the keypad (`AC`, `±`, `%`, `÷`, `×`,
    /// `−`, `+`, `=`, digits and `.`) as well as the ASCII operator aliases
    /// `-`, `*` and `/`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcledger::core::{Key, Operator};
    ///
    /// assert_eq!(Key::from_label("×"), Some(Key::Operator(Operator::Multiply)));
    /// assert_eq!(Key::from_label("7"), Some(Key::Digit('7')));
    /// assert_eq!(Key::from_label("sqrt"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        let key = match label {
            "AC" => Self::Clear,
            "±" => Self::ToggleSign,
            "%" => Self::Percent,
            "=" => Self::Equals,
            "+" => Self::Operator(Operator::Add),
            "−" | "-" => Self::Operator(Operator::Subtract),
            "×" | "*" => Self::Operator(Operator::Multiply),
            "÷" | "/" => Self::Operator(Operator::Divide),
            _ => {
                let mut chars = label.chars();
                return match (chars.next(), chars.next()) {
                    (Some(symbol), None) => Self::digit(symbol),
                    _ => None,
                };
            }
        };
        Some(key)
    }

    /// The label printed on the keypad for this key.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(symbol) => symbol.to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}
