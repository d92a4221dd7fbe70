// ============================================================================
// Plus-Minus Notation
// "(1.34 ± 0.01) m": the only notation that both formats and parses
// ============================================================================

use crate::codec::{
    format_f64, parse_f64_at, parse_i64_at, Cursor, FormatResult, ParseResult,
};
use crate::domain::{Amount, AmountValue};
use crate::interfaces::UnitFormat;

use super::{auto_scientific, format_exact, significant_digits};

/// Formats `amount` as `(value ± error) unit`, or `value unit` when exact.
///
/// The value carries every digit known exactly plus `error_digits` more;
/// the error itself carries `error_digits` significant digits. Each side
/// switches to scientific notation on its own magnitude.
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
            out.push('(');
            format_f64(estimate, digits, auto_scientific(estimate), false, out)?;
            out.push_str(" ± ");
            format_f64(error, error_digits as i32, auto_scientific(error), false, out)?;
            out.push_str(") ");
            units.format_unit(amount.unit(), out);
            Ok(())
        },
    }
}

/// Parses a plus-minus quantity at the cursor.
///
/// Grammar: `'(' value [' ± ' error] ') ' unit` for measured quantities
/// (the error defaults to zero when omitted), or the bare
/// `integer ' ' unit` for exact ones. On failure the cursor is rolled back
/// to the expression start, the failure offset stays recorded, and `None`
/// is returned.
pub fn parse<F: UnitFormat>(
    text: &str,
    cursor: &mut Cursor,
    units: &F,
) -> Option<Amount<F::Unit>> {
    let start = cursor.index();
    match parse_inner(text, cursor, units) {
        Ok(amount) => Some(amount),
        Err(err) => {
            cursor.set_index(start);
            cursor.set_error_index(err.offset);
            tracing::debug!(offset = err.offset, kind = %err.kind, "amount rejected");
            None
        },
    }
}

fn parse_inner<F: UnitFormat>(
    text: &str,
    cursor: &mut Cursor,
    units: &F,
) -> ParseResult<Amount<F::Unit>> {
    if cursor.peek(text) == Some('(') {
        cursor.increment(1);

        // A parenthesized exact integer is tolerated on input even though
        // the formatter never writes one. Attempted on a scratch cursor so
        // a miss leaves no trace.
        let mut attempt = cursor.clone();
        if let Ok(exact) = parse_exact_tail(text, &mut attempt, units) {
            *cursor = attempt;
            return Ok(exact);
        }

        let estimate = parse_f64_at(text, cursor)?;
        let mut error = 0.0;
        let mut tail = cursor.clone();
        if tail.skip(" ± ", text).is_ok() {
            error = parse_f64_at(text, &mut tail)?;
            *cursor = tail;
        }
        cursor.skip(") ", text)?;
        let unit = units.parse_unit(text, cursor)?;
        return Ok(Amount::measured(estimate, error, unit));
    }

    parse_exact_tail(text, cursor, units)
}

// `integer ' ' unit`, shared by the bare and parenthesized exact forms.
fn parse_exact_tail<F: UnitFormat>(
    text: &str,
    cursor: &mut Cursor,
    units: &F,
) -> ParseResult<Amount<F::Unit>> {
    let value = parse_i64_at(text, 10, cursor)?;
    cursor.skip(" ", text)?;
    let unit = units.parse_unit(text, cursor)?;
    Ok(Amount::exact(value, unit))
}
