// ============================================================================
// Exact-Digits Notation
// "1.34 m": only digits guaranteed exact, the error stays implicit
// ============================================================================

use crate::codec::{format_f64, FormatResult};
use crate::domain::{Amount, AmountValue};
use crate::interfaces::UnitFormat;

use super::{auto_scientific, format_exact, significant_digits};

/// Formats `amount` truncated to its exactly-known digits.
///
/// The digit count is the value/error magnitude gap with no extra error
/// digits; at least one digit is always printed, even when the error
/// swamps the value. Trailing zeros are kept, since here precision is the
/// only carrier of the uncertainty.
pub(super) fn format<F: UnitFormat>(
    amount: &Amount<F::Unit>,
    units: &F,
    out: &mut String,
) -> FormatResult<()> {
    match *amount.value() {
        AmountValue::Exact(value) => format_exact(value, amount.unit(), units, out),
        AmountValue::Measured { estimate, error } => {
            let digits = significant_digits(estimate, error, 0)?;
            format_f64(estimate, digits, auto_scientific(estimate), true, out)?;
            out.push(' ');
            units.format_unit(amount.unit(), out);
            Ok(())
        },
    }
}
