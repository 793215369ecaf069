//! Engine state and its pure transitions.
//!
//! Every operation borrows the current [`EngineState`] and returns the next
//! one. Nothing here touches storage or global state, so the whole
//! calculator can be exercised without a ledger.

use super::arithmetic::{ArithmeticError, Operator};
use super::format::{format_operand, format_result, parse_entry};
use serde::{Deserialize, Serialize};

/// Display text shown after a failed computation.
pub const ERROR_SENTINEL: &str = "Error";

/// Coarse position of the engine in its state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No operation is pending.
    Idle,
    /// An operand and operator are waiting for `=`.
    OperandPending,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::OperandPending => "OperandPending",
        }
    }
}

/// Outcome of [`EngineState::evaluate`].
#[derive(Clone, Debug, PartialEq)]
pub enum Evaluation {
    /// No operator was pending; the state is unchanged.
    Idle,

    /// The pending operation produced a result.
    Computed {
        /// Human-readable line such as `"3 + 4 = 7"`.
        expression: String,
        /// The formatted result, now the current entry.
        result: String,
        next: EngineState,
    },

    /// The pending operation could not be computed.
    Failed {
        error: ArithmeticError,
        next: EngineState,
    },
}

/// The complete state of one calculator.
///
/// The entry is always a valid numeric literal: digits, at most one
/// decimal point and an optional leading minus.
///
/// # Example
///
/// ```rust
/// use calcledger::core::{EngineState, Evaluation, Operator};
///
/// let state = EngineState::new()
///     .input_digit('3')
///     .choose_operator(Operator::Add)
///     .input_digit('4');
///
/// match state.evaluate() {
///     Evaluation::Computed { expression, result, .. } => {
///         assert_eq!(expression, "3 + 4 = 7");
///         assert_eq!(result, "7");
///     }
///     other => panic!("unexpected evaluation: {other:?}"),
/// }
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EngineState {
    entry: String,
    pending_operand: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_fresh_entry: bool,
    faulted: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// Create the start-up state: entry `"0"`, nothing pending.
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_entry: false,
            faulted: false,
        }
    }

    /// The entry currently being composed or shown.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Numeric value of the entry.
    ///
    /// Fails with [`ArithmeticError::NonFinite`] when the typed literal is
    /// too large to represent as an `f64`.
    pub fn entry_value(&self) -> Result<f64, ArithmeticError> {
        parse_entry(&self.entry).ok_or(ArithmeticError::NonFinite)
    }

    /// Left operand captured by the last operator, if one is pending.
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    /// Operator waiting for `=`, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit starts a new number.
    pub fn awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    /// Whether the last computation failed and the display shows the
    /// error sentinel.
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// Whether an operation is pending.
    pub fn phase(&self) -> Phase {
        if self.pending_operator.is_some() {
            Phase::OperandPending
        } else {
            Phase::Idle
        }
    }

    /// Text for the main display.
    pub fn display(&self) -> &str {
        if self.faulted {
            ERROR_SENTINEL
        } else {
            &self.entry
        }
    }

    /// Append a digit or the decimal point to the entry.
    ///
    /// A fresh entry is started first when one is awaited. A second
    /// decimal point, or any symbol other than `0`-`9` and `.`, leaves the
    /// state unchanged.
    pub fn input_digit(&self, symbol: char) -> Self {
        if !(symbol.is_ascii_digit() || symbol == '.') {
            return self.clone();
        }

        let mut next = self.clone();
        if next.awaiting_fresh_entry {
            next.entry = "0".to_string();
            next.awaiting_fresh_entry = false;
            next.faulted = false;
        }

        if symbol == '.' && next.entry.contains('.') {
            return next;
        }

        if next.entry == "0" && symbol != '.' {
            next.entry = symbol.to_string();
        } else {
            next.entry.push(symbol);
        }
        next
    }

    /// Return to the start-up state from anywhere.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Add or strip a leading minus. No-op on `"0"`.
    pub fn toggle_sign(&self) -> Self {
        if self.entry == "0" {
            return self.clone();
        }

        let mut next = self.clone();
        next.entry = match self.entry.strip_prefix('-') {
            Some(magnitude) => magnitude.to_string(),
            None => format!("-{}", self.entry),
        };
        next
    }

    /// Replace the entry with one hundredth of its value.
    ///
    /// This is one-way: applying it and multiplying back by 100 need not
    /// reproduce the starting entry once digits beyond the eighth
    /// fractional place are dropped.
    ///
    /// An entry too large to represent faults the engine.
    pub fn percent(&self) -> Self {
        let Ok(value) = self.entry_value() else {
            return self.fault();
        };

        let mut next = self.clone();
        next.entry = format_result(value / 100.0);
        next.faulted = false;
        next
    }

    /// Capture the entry as the left operand and remember `operator`.
    ///
    /// A previously pending operator is discarded, not evaluated: only one
    /// operation is ever pending. An entry too large to represent faults
    /// the engine instead of becoming the operand.
    pub fn choose_operator(&self, operator: Operator) -> Self {
        let Ok(operand) = self.entry_value() else {
            return self.fault();
        };

        let mut next = self.clone();
        next.pending_operand = Some(operand);
        next.pending_operator = Some(operator);
        next.awaiting_fresh_entry = true;
        next
    }

    /// Evaluate the pending operation against the entry.
    ///
    /// Pure: the caller decides what to do with the expression (typically
    /// log it) and adopts `next` as the new state.
    pub fn evaluate(&self) -> Evaluation {
        let (Some(operator), Some(lhs)) = (self.pending_operator, self.pending_operand) else {
            return Evaluation::Idle;
        };
        let value = self
            .entry_value()
            .and_then(|rhs| operator.apply(lhs, rhs).map(|value| (rhs, value)));

        match value {
            Ok((rhs, value)) => {
                let result = format_result(value);
                let expression = format!(
                    "{} {} {} = {}",
                    format_operand(lhs),
                    operator.glyph(),
                    format_operand(rhs),
                    result
                );
                let next = Self {
                    entry: result.clone(),
                    pending_operand: None,
                    pending_operator: None,
                    awaiting_fresh_entry: true,
                    faulted: false,
                };
                Evaluation::Computed {
                    expression,
                    result,
                    next,
                }
            }
            Err(error) => Evaluation::Failed {
                error,
                next: self.fault(),
            },
        }
    }

    fn fault(&self) -> Self {
        Self {
            entry: "0".to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_entry: true,
            faulted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(state: EngineState, digits: &str) -> EngineState {
        digits.chars().fold(state, |s, d| s.input_digit(d))
    }

    fn computed(evaluation: Evaluation) -> (String, String, EngineState) {
        match evaluation {
            Evaluation::Computed {
                expression,
                result,
                next,
            } => (expression, result, next),
            other => panic!("Expected Computed, got {other:?}"),
        }
    }

    #[test]
    fn new_state_is_idle_zero() {
        let state = EngineState::new();
        assert_eq!(state.entry(), "0");
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending_operand(), None);
        assert_eq!(state.pending_operator(), None);
        assert!(!state.awaiting_fresh_entry());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn leading_zero_is_replaced() {
        let state = type_digits(EngineState::new(), "05");
        assert_eq!(state.entry(), "5");
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let state = type_digits(EngineState::new(), "1.5.2");
        assert_eq!(state.entry(), "1.52");
    }

    #[test]
    fn point_on_zero_keeps_the_zero() {
        let state = type_digits(EngineState::new(), ".5");
        assert_eq!(state.entry(), "0.5");
    }

    #[test]
    fn non_digit_symbols_are_ignored() {
        let state = type_digits(EngineState::new(), "1");
        assert_eq!(state.input_digit('x'), state);
        assert_eq!(state.input_digit('-'), state);
    }

    #[test]
    fn input_is_pure() {
        let state = EngineState::new();
        let next = state.input_digit('9');
        assert_eq!(state.entry(), "0");
        assert_eq!(next.entry(), "9");
    }

    #[test]
    fn toggle_sign_adds_and_strips_minus() {
        let state = type_digits(EngineState::new(), "12");
        let negated = state.toggle_sign();
        assert_eq!(negated.entry(), "-12");
        assert_eq!(negated.toggle_sign().entry(), "12");
    }

    #[test]
    fn toggle_sign_on_zero_is_noop() {
        let state = EngineState::new();
        assert_eq!(state.toggle_sign(), state);
    }

    #[test]
    fn percent_divides_by_hundred() {
        let state = type_digits(EngineState::new(), "50").percent();
        assert_eq!(state.entry(), "0.5");

        let state = type_digits(EngineState::new(), "0").percent();
        assert_eq!(state.entry(), "0");
    }

    #[test]
    fn choose_operator_captures_operand() {
        let state = type_digits(EngineState::new(), "3").choose_operator(Operator::Add);
        assert_eq!(state.pending_operand(), Some(3.0));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert!(state.awaiting_fresh_entry());
        assert_eq!(state.phase(), Phase::OperandPending);
        assert_eq!(state.display(), "3");
    }

    #[test]
    fn digit_after_operator_starts_fresh_entry() {
        let state = type_digits(EngineState::new(), "3").choose_operator(Operator::Add);
        let state = state.input_digit('4');
        assert_eq!(state.entry(), "4");
        assert!(!state.awaiting_fresh_entry());
    }

    #[test]
    fn evaluate_without_operator_is_idle() {
        let state = type_digits(EngineState::new(), "1.50");
        assert_eq!(state.evaluate(), Evaluation::Idle);
        assert_eq!(state.entry(), "1.50");
        assert_eq!(state.entry_value(), Ok(1.5));
    }

    #[test]
    fn evaluate_produces_expression_and_result() {
        let state = type_digits(EngineState::new(), "3")
            .choose_operator(Operator::Add)
            .input_digit('4');

        let (expression, result, next) = computed(state.evaluate());
        assert_eq!(expression, "3 + 4 = 7");
        assert_eq!(result, "7");
        assert_eq!(next.entry(), "7");
        assert_eq!(next.phase(), Phase::Idle);
        assert!(next.awaiting_fresh_entry());
    }

    #[test]
    fn evaluate_uses_operator_glyphs() {
        let state = type_digits(EngineState::new(), "1")
            .choose_operator(Operator::Divide)
            .input_digit('8');
        let (expression, result, _) = computed(state.evaluate());
        assert_eq!(expression, "1 ÷ 8 = 0.125");
        assert_eq!(result, "0.125");

        let state = type_digits(EngineState::new(), "2")
            .choose_operator(Operator::Subtract)
            .input_digit('5');
        let (expression, _, _) = computed(state.evaluate());
        assert_eq!(expression, "2 − 5 = -3");
    }

    #[test]
    fn second_operator_overwrites_first() {
        let state = type_digits(EngineState::new(), "9")
            .choose_operator(Operator::Add)
            .choose_operator(Operator::Multiply);

        let (expression, result, _) = computed(state.evaluate());
        assert_eq!(expression, "9 × 9 = 81");
        assert_eq!(result, "81");
    }

    #[test]
    fn division_by_zero_faults() {
        let state = type_digits(EngineState::new(), "5")
            .choose_operator(Operator::Divide)
            .input_digit('0');

        let Evaluation::Failed { error, next } = state.evaluate() else {
            panic!("Expected Failed evaluation");
        };
        assert_eq!(error, ArithmeticError::DivisionByZero);
        assert!(next.is_faulted());
        assert_eq!(next.display(), ERROR_SENTINEL);
        assert_eq!(next.phase(), Phase::Idle);
        assert!(next.awaiting_fresh_entry());
    }

    #[test]
    fn digit_after_fault_starts_fresh() {
        let state = type_digits(EngineState::new(), "5")
            .choose_operator(Operator::Divide)
            .input_digit('0');
        let Evaluation::Failed { next, .. } = state.evaluate() else {
            panic!("Expected Failed evaluation");
        };

        let recovered = next.input_digit('2');
        assert!(!recovered.is_faulted());
        assert_eq!(recovered.display(), "2");
    }

    #[test]
    fn oversized_entry_fails_instead_of_reading_zero() {
        let huge = type_digits(EngineState::new(), &"9".repeat(400));
        assert_eq!(huge.entry_value(), Err(ArithmeticError::NonFinite));

        let state = huge.choose_operator(Operator::Add);
        assert!(state.is_faulted());
        assert_eq!(state.display(), ERROR_SENTINEL);
        assert_eq!(state.pending_operator(), None);

        let state = huge.percent();
        assert!(state.is_faulted());
        assert_eq!(state.display(), ERROR_SENTINEL);
    }

    #[test]
    fn oversized_right_operand_is_not_division_by_zero() {
        let state = type_digits(EngineState::new(), "5").choose_operator(Operator::Divide);
        let state = type_digits(state, &"9".repeat(400));

        let Evaluation::Failed { error, next } = state.evaluate() else {
            panic!("Expected Failed evaluation");
        };
        assert_eq!(error, ArithmeticError::NonFinite);
        assert_eq!(next.display(), ERROR_SENTINEL);
        assert_eq!(next.phase(), Phase::Idle);
    }

    #[test]
    fn large_but_finite_entry_is_used_as_typed() {
        let state = type_digits(EngineState::new(), &"9".repeat(300))
            .choose_operator(Operator::Divide)
            .input_digit('9');

        let (_, result, _) = computed(state.evaluate());
        assert!(parse_entry(&result).unwrap() > 1e298);
    }

    #[test]
    fn clear_returns_to_start() {
        let state = type_digits(EngineState::new(), "42")
            .choose_operator(Operator::Multiply)
            .input_digit('3');
        assert_eq!(state.clear(), EngineState::new());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = type_digits(EngineState::new(), "3").choose_operator(Operator::Add);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
