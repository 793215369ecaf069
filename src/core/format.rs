//! Numeric formatting and parsing for display literals.
//!
//! Two renderings exist. Results shown on the display follow the result
//! rule (integers bare, otherwise at most eight fractional digits). Operands
//! echoed in a history expression use the compact general format, the same
//! one C's `%g` produces.

/// Maximum number of fractional digits kept when rendering a result.
pub const RESULT_FRACTION_DIGITS: usize = 8;

/// Significant digits used when rendering an operand in an expression.
pub const OPERAND_SIGNIFICANT_DIGITS: usize = 6;

/// Render a computed value for the display.
///
/// Integral values are rendered without a decimal point. Anything else is
/// rounded to [`RESULT_FRACTION_DIGITS`] fractional digits, after which
/// trailing zeros and a dangling point are removed. Negative zero renders
/// as `"0"`.
///
/// The value must be finite; the engine never formats `inf` or `NaN`.
///
/// # Example
///
/// ```rust
/// use calcledger::core::format_result;
///
/// assert_eq!(format_result(7.0), "7");
/// assert_eq!(format_result(0.5), "0.5");
/// assert_eq!(format_result(1.0 / 3.0), "0.33333333");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// ```
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    let fixed = format!("{value:.prec$}", prec = RESULT_FRACTION_DIGITS);
    normalize_zero(trim_fraction(&fixed))
}

/// Render an operand in the compact general format.
///
/// Six significant digits, fixed notation for decimal exponents in
/// `[-4, 6)` and scientific notation (`1.23457e+06`) outside of it.
/// Trailing zeros are always trimmed.
///
/// # Example
///
/// ```rust
/// use calcledger::core::format_operand;
///
/// assert_eq!(format_operand(3.0), "3");
/// assert_eq!(format_operand(1.5), "1.5");
/// assert_eq!(format_operand(1234567.0), "1.23457e+06");
/// assert_eq!(format_operand(0.00001), "1e-05");
/// ```
pub fn format_operand(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Rounding to the significant digits first decides the exponent, so
    // 999999.5 correctly switches to scientific notation.
    let scientific = format!("{value:.prec$e}", prec = OPERAND_SIGNIFICANT_DIGITS - 1);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let significant = OPERAND_SIGNIFICANT_DIGITS as i32;
    if exponent < -4 || exponent >= significant {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (significant - 1 - exponent) as usize;
        normalize_zero(trim_fraction(&format!("{value:.decimals$}")))
    }
}

/// Parse a display literal back into a number.
///
/// Accepts everything the engine can put on the display, including
/// partially typed entries such as `"1."` or `"-0."`. Returns `None` for
/// anything that is not a finite decimal number.
///
/// # Example
///
/// ```rust
/// use calcledger::core::parse_entry;
///
/// assert_eq!(parse_entry("1.50"), Some(1.5));
/// assert_eq!(parse_entry("3."), Some(3.0));
/// assert_eq!(parse_entry("Error"), None);
/// ```
pub fn parse_entry(literal: &str) -> Option<f64> {
    literal
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn trim_fraction(literal: &str) -> String {
    if literal.contains('.') {
        literal
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        literal.to_string()
    }
}

fn normalize_zero(literal: String) -> String {
    if literal == "-0" {
        "0".to_string()
    } else {
        literal
    }
}
