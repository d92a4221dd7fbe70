// ============================================================================
// Style Module
// The three uncertainty notations and their shared digit-count derivation
// ============================================================================

mod bracket;
mod exact_digits;
mod plus_minus;

use crate::codec::{floor_log10, format_i64, Cursor, FormatError, FormatResult};
use crate::domain::Amount;
use crate::interfaces::UnitFormat;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a quantity's uncertainty is written out.
///
/// The set is closed: every notation is a variant here, and dispatch is a
/// plain match. The default is the plus-minus notation with two error
/// digits.
///
/// # Example
/// ```
/// use amount_format::prelude::*;
///
/// let style = AmountStyle::default();
/// let amount = Amount::measured(1.34, 0.01, "m".to_string());
/// let text = style.format(&amount, &SymbolUnits).unwrap();
/// assert_eq!(text, "(1.34 ± 0.01) m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AmountStyle {
    /// `(1.34 ± 0.01) m`: error stated explicitly after the value.
    /// Formats and parses.
    PlusMinus {
        /// Number of significant digits shown for the error (at least 1)
        error_digits: u32,
    },

    /// `1.346[20] m`: error as a bracketed integer scaled to the last
    /// significant digit of the value. Formats only.
    Bracket {
        /// Number of significant digits carried by the bracketed error
        error_digits: u32,
    },

    /// `1.34 m`: only digits guaranteed exact are written; the error is
    /// implied by the precision itself. Formats only.
    ExactDigits,
}

impl Default for AmountStyle {
    fn default() -> Self {
        AmountStyle::PlusMinus { error_digits: 2 }
    }
}

impl AmountStyle {
    /// Plus-minus notation with the given number of error digits
    /// (raised to 1 if below).
    pub fn plus_minus(error_digits: u32) -> Self {
        AmountStyle::PlusMinus {
            error_digits: error_digits.max(1),
        }
    }

    /// Bracket notation with the given number of error digits
    /// (raised to 1 if below).
    pub fn bracket(error_digits: u32) -> Self {
        AmountStyle::Bracket {
            error_digits: error_digits.max(1),
        }
    }

    /// Exact-digits-only notation.
    pub fn exact_digits() -> Self {
        AmountStyle::ExactDigits
    }

    /// Formats `amount` under this notation, delegating unit text to the
    /// unit service.
    ///
    /// # Errors
    /// `DegenerateError` if a measured amount carries an absolute error of
    /// zero; the digit-count derivation is undefined there.
    pub fn format<F: UnitFormat>(
        &self,
        amount: &Amount<F::Unit>,
        units: &F,
    ) -> FormatResult<String> {
        let mut out = String::new();
        match *self {
            AmountStyle::PlusMinus { error_digits } => {
                plus_minus::format(amount, error_digits, units, &mut out)?
            },
            AmountStyle::Bracket { error_digits } => {
                bracket::format(amount, error_digits, units, &mut out)?
            },
            AmountStyle::ExactDigits => exact_digits::format(amount, units, &mut out)?,
        }
        Ok(out)
    }

    /// Parses a quantity expression at the cursor.
    ///
    /// Returns `Ok(None)` on malformed input, with the cursor restored to
    /// the expression start and the failure offset recorded. Only the
    /// plus-minus notation supports parsing; the others return
    /// `Unsupported` (their text does not carry enough information to
    /// recover the error).
    pub fn parse<F: UnitFormat>(
        &self,
        text: &str,
        cursor: &mut Cursor,
        units: &F,
    ) -> FormatResult<Option<Amount<F::Unit>>> {
        match self {
            AmountStyle::PlusMinus { .. } => Ok(plus_minus::parse(text, cursor, units)),
            AmountStyle::Bracket { .. } | AmountStyle::ExactDigits => {
                Err(FormatError::Unsupported)
            },
        }
    }

    /// Whole-string parse: the expression must span the entire input.
    pub fn parse_str<F: UnitFormat>(
        &self,
        text: &str,
        units: &F,
    ) -> FormatResult<Option<Amount<F::Unit>>> {
        let mut cursor = Cursor::new();
        let parsed = self.parse(text, &mut cursor, units)?;
        if parsed.is_some() && cursor.index() != text.len() {
            tracing::debug!(index = cursor.index(), "trailing input after amount");
            return Ok(None);
        }
        Ok(parsed)
    }
}

/// Scientific notation kicks in outside the comfortable fixed range.
pub(crate) fn auto_scientific(value: f64) -> bool {
    value.abs() >= 1e6 || value.abs() < 1e-6
}

/// Significant digits to print, derived from the value/error magnitudes:
/// digits known exactly, plus `error_digits` more. Clamped to the codec's
/// digit-count contract.
///
/// A zero, negative or non-finite error has no magnitude to derive from
/// and is rejected. A non-finite estimate renders as its special literal
/// regardless of digit count, so any valid count works; one is returned.
pub(crate) fn significant_digits(
    estimate: f64,
    error: f64,
    error_digits: u32,
) -> FormatResult<i32> {
    if !(error > 0.0) || error.is_infinite() {
        return Err(FormatError::DegenerateError);
    }
    if !estimate.is_finite() {
        return Ok(1);
    }
    let log10_value = if estimate == 0.0 {
        0
    } else {
        floor_log10(estimate.abs())
    };
    let exact = log10_value - floor_log10(error) - 1;
    Ok((exact + error_digits as i32).clamp(1, 19))
}

/// Exact quantities render the same under every notation:
/// the integer, a space, the unit text.
pub(crate) fn format_exact<F: UnitFormat>(
    value: i64,
    unit: &F::Unit,
    units: &F,
    out: &mut String,
) -> FormatResult<()> {
    format_i64(value, 10, out)?;
    out.push(' ');
    units.format_unit(unit, out);
    Ok(())
}
