// ============================================================================
// Unit Format Interface
// Defines the contract for the external unit service
// ============================================================================

use crate::codec::{Cursor, ParseError, ParseErrorKind, ParseResult};

/// The unit service seam.
///
/// The amount formatters treat units as opaque: a unit is formatted to
/// text exactly once per quantity, after the numeric portion, and parsed
/// from the cursor position at the same point of the grammar. Unit
/// algebra, conversion and naming all live behind this trait.
pub trait UnitFormat {
    /// The opaque unit handle carried by amounts.
    type Unit;

    /// Appends the textual form of `unit` to the sink.
    fn format_unit(&self, unit: &Self::Unit, out: &mut String);

    /// Parses a unit at the cursor, advancing past the consumed symbol.
    /// A failure records its offset through the shared cursor.
    fn parse_unit(&self, text: &str, cursor: &mut Cursor) -> ParseResult<Self::Unit>;
}

/// Unit service over plain symbol strings, for tests and simple hosts.
///
/// Formats the symbol verbatim and parses a maximal run of unit-symbol
/// characters (letters, digits, and the product/quotient/exponent marks
/// common in unit notation).
pub struct SymbolUnits;

fn is_unit_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '/' | '·' | '*' | '^' | '-' | '°' | 'µ' | '%')
}

impl UnitFormat for SymbolUnits {
    type Unit = String;

    fn format_unit(&self, unit: &String, out: &mut String) {
        out.push_str(unit);
    }

    fn parse_unit(&self, text: &str, cursor: &mut Cursor) -> ParseResult<String> {
        let start = cursor.index();
        let rest = text.get(start..).unwrap_or("");
        let len: usize = rest
            .chars()
            .take_while(|&c| is_unit_char(c))
            .map(char::len_utf8)
            .sum();
        if len == 0 {
            cursor.set_error_index(start);
            return Err(ParseError::new(ParseErrorKind::InvalidUnit, start));
        }
        cursor.increment(len);
        Ok(rest[..len].to_string())
    }
}
