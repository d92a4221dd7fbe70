// ============================================================================
// Codec Module
// Generic parse/format engine for booleans, radix integers and decimals
// ============================================================================
//
// This module provides:
// - Cursor: a mutable scan position shared across composed parses
// - parse_*: incremental parsers that advance a cursor, plus whole-string
//   variants that reject trailing input
// - format_*: significant-digit aware formatters appending to a String
//
// Design principles:
// - No built-in float formatting; exponents and mantissas are derived
//   through the power-of-ten table
// - Failures are values: every parse returns a Result carrying the
//   offending offset, never a panic
// - All loops are bounded by input length

mod cursor;
mod errors;
mod format;
mod parse;

pub use cursor::Cursor;
pub use errors::{FormatError, FormatResult, ParseError, ParseErrorKind, ParseResult};
pub use format::{
    digit_length, format_bool, format_f64, format_i64, format_integer, format_value,
};
pub use parse::{
    parse_bool, parse_bool_at, parse_f64, parse_f64_at, parse_i64, parse_i64_at, MAX_RADIX,
    MIN_RADIX,
};

pub(crate) use format::{floor_log10, pow10_f64};
