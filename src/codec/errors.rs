// ============================================================================
// Codec Errors
// Error types for parsing and formatting operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ways a parse can fail.
///
/// Every variant corresponds to a malformed-input condition; the offset at
/// which the condition was detected travels with the [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseErrorKind {
    /// Input is not "true" or "false" (case-insensitive)
    InvalidBoolean,
    /// No digit valid in the requested radix was consumed
    InvalidInteger,
    /// Integer accumulation exceeded the i64 range
    Overflow,
    /// Neither a digit nor a decimal point at the scan position
    InvalidNumber,
    /// Decimal mantissa accumulation exceeded the i64 range
    MantissaOverflow,
    /// Exponent accumulation exceeded the i32 range
    ExponentOverflow,
    /// Exponent marker present with no following digit
    InvalidExponent,
    /// Whole-string parse left unconsumed input
    TrailingInput,
    /// Expected literal token not found at the scan position
    MalformedInput,
    /// No unit symbol recognized at the scan position
    InvalidUnit,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::InvalidBoolean => write!(f, "invalid boolean representation"),
            ParseErrorKind::InvalidInteger => write!(f, "invalid integer representation"),
            ParseErrorKind::Overflow => write!(f, "integer overflow during accumulation"),
            ParseErrorKind::InvalidNumber => write!(f, "digit or decimal point required"),
            ParseErrorKind::MantissaOverflow => write!(f, "too many mantissa digits"),
            ParseErrorKind::ExponentOverflow => write!(f, "exponent overflow"),
            ParseErrorKind::InvalidExponent => write!(f, "exponent marker without digits"),
            ParseErrorKind::TrailingInput => write!(f, "extraneous trailing input"),
            ParseErrorKind::MalformedInput => write!(f, "expected literal not found"),
            ParseErrorKind::InvalidUnit => write!(f, "unrecognized unit symbol"),
        }
    }
}

/// A parse failure carrying the offset of the offending input.
///
/// The cursor that observed the failure is left with its index at the start
/// of the failed token and its error index set to `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.offset)
    }
}

impl std::error::Error for ParseError {}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised by formatting on malformed call arguments.
///
/// These are contract violations by the caller, not data errors; they
/// propagate immediately and are never recovered into partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatError {
    /// Value passed to an integer formatter has a fractional part
    NotAnInteger,
    /// Radix outside the supported 2..=36 range
    InvalidRadix(u32),
    /// Significant-digit count outside {-1} union 1..=19
    InvalidDigitCount(i32),
    /// The notation does not support the requested operation
    Unsupported,
    /// A measured amount whose absolute error is zero or non-finite has
    /// no defined digit count
    DegenerateError,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::NotAnInteger => write!(f, "value has a fractional part"),
            FormatError::InvalidRadix(radix) => write!(f, "radix out of range: {}", radix),
            FormatError::InvalidDigitCount(digits) => {
                write!(f, "digit count out of range: {}", digits)
            },
            FormatError::Unsupported => write!(f, "operation not supported by this notation"),
            FormatError::DegenerateError => {
                write!(f, "absolute error of zero leaves the digit count undefined")
            },
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(ParseErrorKind::Overflow, 7);
        assert_eq!(err.to_string(), "integer overflow during accumulation at offset 7");
        assert_eq!(
            ParseErrorKind::InvalidBoolean.to_string(),
            "invalid boolean representation"
        );
    }

    #[test]
    fn test_format_error_display() {
        assert_eq!(FormatError::InvalidRadix(37).to_string(), "radix out of range: 37");
        assert_eq!(
            FormatError::InvalidDigitCount(20).to_string(),
            "digit count out of range: 20"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ParseError::new(ParseErrorKind::Overflow, 0),
            ParseError::new(ParseErrorKind::Overflow, 0)
        );
        assert_ne!(FormatError::NotAnInteger, FormatError::Unsupported);
    }
}
