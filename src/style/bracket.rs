// ============================================================================
// Bracket Notation
// "1.346[20] m": error as an integer scaled to the value's last digit
// ============================================================================

use std::fmt::Write;

use crate::codec::{floor_log10, format_f64, pow10_f64, FormatResult};
use crate::domain::{Amount, AmountValue};
use crate::interfaces::UnitFormat;

use super::{auto_scientific, format_exact, significant_digits};

/// Formats `amount` with the error spliced in as `[NN]`.
///
/// The value keeps its trailing zeros so the bracket always refers to its
/// last printed digit. The bracketed integer is the error rescaled to
/// `error_digits` significant digits; in scientific notation the bracket
/// sits before the exponent marker.
pub(super) fn format<F: UnitFormat>(
    amount: &Amount<F::Unit>,
    error_digits: u32,
    units: &F,
    out: &mut String,
) -> FormatResult<()> {
    match *amount.value() {
        AmountValue::Exact(value) => format_exact(value, amount.unit(), units, out),
        AmountValue::Measured { estimate, error } => {
            let error_digits = error_digits.clamp(1, 19);
            let digits = significant_digits(estimate, error, error_digits)?;

            let mut rendered = String::new();
            format_f64(estimate, digits, auto_scientific(estimate), true, &mut rendered)?;

            let scale = error_digits as i32 - 1 - floor_log10(error);
            let bracket_error = (error * pow10_f64(scale)).round() as u64;

            let split = rendered.find('E').unwrap_or(rendered.len());
            out.push_str(&rendered[..split]);
            let _ = write!(out, "[{bracket_error}]");
            out.push_str(&rendered[split..]);
            out.push(' ');
            units.format_unit(amount.unit(), out);
            Ok(())
        },
    }
}
