// ============================================================================
// Numeric Parsing
// Cursor-based incremental parsers for booleans, radix integers and decimals
// ============================================================================

use super::cursor::Cursor;
use super::errors::{ParseError, ParseErrorKind, ParseResult};
use super::format::pow10_f64;

/// Minimum supported radix
pub const MIN_RADIX: u32 = 2;
/// Maximum supported radix (digits 0-9 then a-z)
pub const MAX_RADIX: u32 = 36;

// Records the failure on the cursor and leaves its index untouched, so the
// caller can recover or report from the failure start.
fn fail<T>(cursor: &mut Cursor, kind: ParseErrorKind, offset: usize) -> ParseResult<T> {
    cursor.set_error_index(offset);
    tracing::trace!(?kind, offset, "parse failure");
    Err(ParseError::new(kind, offset))
}

// Whole-string mode: the parse must consume the entire input.
fn parse_whole<T>(
    text: &str,
    parse: impl FnOnce(&str, &mut Cursor) -> ParseResult<T>,
) -> ParseResult<T> {
    let mut cursor = Cursor::new();
    let value = parse(text, &mut cursor)?;
    if cursor.index() != text.len() {
        return Err(ParseError::new(ParseErrorKind::TrailingInput, cursor.index()));
    }
    Ok(value)
}

/// Parses the entire input as a boolean.
///
/// Fails with `TrailingInput` if characters remain after the literal.
pub fn parse_bool(text: &str) -> ParseResult<bool> {
    parse_whole(text, parse_bool_at)
}

/// Parses a case-insensitive `"true"`/`"false"` literal at the cursor.
///
/// Advances the cursor by the matched length; on failure the cursor index
/// is unmoved and `InvalidBoolean` is returned.
pub fn parse_bool_at(text: &str, cursor: &mut Cursor) -> ParseResult<bool> {
    let start = cursor.index();
    let rest = match text.get(start..) {
        Some(rest) => rest,
        None => return fail(cursor, ParseErrorKind::InvalidBoolean, start),
    };
    if rest
        .get(..4)
        .is_some_and(|head| head.eq_ignore_ascii_case("true"))
    {
        cursor.increment(4);
        return Ok(true);
    }
    if rest
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case("false"))
    {
        cursor.increment(5);
        return Ok(false);
    }
    fail(cursor, ParseErrorKind::InvalidBoolean, start)
}

/// Parses the entire input as a signed integer in `radix`.
pub fn parse_i64(text: &str, radix: u32) -> ParseResult<i64> {
    parse_whole(text, |text, cursor| parse_i64_at(text, radix, cursor))
}

/// Parses a signed integer in `radix` (2..=36) at the cursor.
///
/// Accepts an optional leading `+`/`-`, then one or more digits valid in
/// the radix. The magnitude is accumulated negatively so `i64::MIN` never
/// overflows mid-scan; `Overflow` is returned if the checked accumulation
/// wraps, `InvalidInteger` if no digit was consumed.
///
/// # Panics
/// Panics if `radix` is outside 2..=36 (caller contract).
pub fn parse_i64_at(text: &str, radix: u32, cursor: &mut Cursor) -> ParseResult<i64> {
    assert!(
        (MIN_RADIX..=MAX_RADIX).contains(&radix),
        "radix out of range: {radix}"
    );
    let start = cursor.index();
    let bytes = text.as_bytes();
    let end = bytes.len();
    let mut i = start;
    let mut negative = false;
    // Accumulates negatively to keep i64::MIN reachable.
    let mut result: i64 = 0;
    let mut digits = 0usize;
    while i < end {
        let byte = bytes[i];
        if let Some(digit) = (byte as char).to_digit(radix) {
            result = match result
                .checked_mul(radix as i64)
                .and_then(|acc| acc.checked_sub(digit as i64))
            {
                Some(acc) => acc,
                None => return fail(cursor, ParseErrorKind::Overflow, start),
            };
            digits += 1;
        } else if byte == b'-' && i == start {
            negative = true;
        } else if byte == b'+' && i == start {
            // Explicit positive sign.
        } else {
            break;
        }
        i += 1;
    }
    if digits == 0 {
        return fail(cursor, ParseErrorKind::InvalidInteger, start);
    }
    if result == i64::MIN && !negative {
        return fail(cursor, ParseErrorKind::Overflow, start);
    }
    cursor.set_index(i);
    Ok(if negative { result } else { -result })
}

/// Parses the entire input as a decimal floating value.
pub fn parse_f64(text: &str) -> ParseResult<f64> {
    parse_whole(text, parse_f64_at)
}

/// Parses a decimal floating value at the cursor.
///
/// Recognizes `NaN`, optionally-signed `Infinity`, or a decimal literal
/// `[sign] digits [ '.' digits ] [ ('e'|'E') [sign] digits ]` with at
/// least one digit or a decimal point. The integer mantissa and the
/// exponent accumulate separately and combine as
/// `mantissa * 10^(exponent - fraction_len)`.
pub fn parse_f64_at(text: &str, cursor: &mut Cursor) -> ParseResult<f64> {
    let start = cursor.index();
    let bytes = text.as_bytes();
    let end = bytes.len();
    let mut i = start;

    if matches_at(bytes, i, b"NaN") {
        cursor.increment(3);
        return Ok(f64::NAN);
    }

    let mut negative = false;
    if i < end && (bytes[i] == b'-' || bytes[i] == b'+') {
        negative = bytes[i] == b'-';
        i += 1;
    }

    if matches_at(bytes, i, b"Infinity") {
        cursor.set_index(i + 8);
        return Ok(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if i >= end || (!bytes[i].is_ascii_digit() && bytes[i] != b'.') {
        return fail(cursor, ParseErrorKind::InvalidNumber, start);
    }

    // Mantissa and fraction.
    let mut mantissa: i64 = 0;
    let mut point: Option<usize> = None;
    while i < end {
        let byte = bytes[i];
        if byte.is_ascii_digit() {
            mantissa = match mantissa
                .checked_mul(10)
                .and_then(|acc| acc.checked_add((byte - b'0') as i64))
            {
                Some(acc) => acc,
                None => return fail(cursor, ParseErrorKind::MantissaOverflow, start),
            };
        } else if byte == b'.' && point.is_none() {
            point = Some(i);
        } else {
            break;
        }
        i += 1;
    }
    let fraction_len = point.map_or(0, |p| i - p - 1) as i32;

    // Exponent.
    let mut exponent: i32 = 0;
    if i < end && (bytes[i] == b'e' || bytes[i] == b'E') {
        let marker = i;
        i += 1;
        let mut exp_negative = false;
        if i < end && (bytes[i] == b'-' || bytes[i] == b'+') {
            exp_negative = bytes[i] == b'-';
            i += 1;
        }
        if i >= end || !bytes[i].is_ascii_digit() {
            return fail(cursor, ParseErrorKind::InvalidExponent, marker);
        }
        while i < end && bytes[i].is_ascii_digit() {
            exponent = match exponent
                .checked_mul(10)
                .and_then(|acc| acc.checked_add((bytes[i] - b'0') as i32))
            {
                Some(acc) => acc,
                None => return fail(cursor, ParseErrorKind::ExponentOverflow, start),
            };
            i += 1;
        }
        if exp_negative {
            exponent = -exponent;
        }
    }

    cursor.set_index(i);
    // Saturated scales are far past the f64 range and become 0 or
    // infinity in pow10_f64.
    let magnitude = mantissa as f64 * pow10_f64(exponent.saturating_sub(fraction_len));
    Ok(if negative { -magnitude } else { magnitude })
}

fn matches_at(bytes: &[u8], start: usize, literal: &[u8]) -> bool {
    bytes.len() >= start + literal.len() && &bytes[start..start + literal.len()] == literal
}
