// ============================================================================
// Numeric Formatting
// Radix integers and decimals with significant-digit and notation control
// ============================================================================

use super::errors::{FormatError, FormatResult};
use arrayvec::ArrayVec;
use std::fmt::Write;

/// Digit alphabet shared by all radixes
const DIGIT_TO_CHAR: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Powers of ten up to the largest that fits a u64 mantissa
const POW10: [u64; 20] = {
    let mut table = [1u64; 20];
    let mut i = 1;
    while i < 20 {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// 10^n as an f64, exact for |n| <= 19.
pub(crate) fn pow10_f64(n: i32) -> f64 {
    if (0..20).contains(&n) {
        POW10[n as usize] as f64
    } else if (-19..0).contains(&n) {
        1.0 / POW10[(-n) as usize] as f64
    } else {
        10f64.powi(n)
    }
}

/// Base-10 exponent `e` such that `10^e <= value < 10^(e+1)`.
///
/// `value` must be positive and finite. The float log is corrected against
/// the power table so exact powers of ten land on the right side; the raw
/// log is clamped to the f64 exponent range so the corrections cannot
/// overflow.
pub(crate) fn floor_log10(value: f64) -> i32 {
    let mut e = (value.log10().floor() as i32).clamp(-350, 350);
    if pow10_f64(e + 1) <= value {
        e += 1;
    } else if pow10_f64(e) > value {
        e -= 1;
    }
    e
}

/// Appends `"true"`/`"false"`.
pub fn format_bool(value: bool, out: &mut String) {
    out.push_str(if value { "true" } else { "false" });
}

/// Appends the representation of `value` in `radix` (2..=36).
///
/// Radix 10 uses the value's natural decimal text. Other radixes peel
/// digits through a bounded buffer; `i64::MIN` is handled through the
/// unsigned magnitude so negation cannot overflow.
pub fn format_i64(value: i64, radix: u32, out: &mut String) -> FormatResult<()> {
    if !(2..=36).contains(&radix) {
        return Err(FormatError::InvalidRadix(radix));
    }
    if radix == 10 {
        let _ = write!(out, "{value}");
        return Ok(());
    }
    if value < 0 {
        out.push('-');
    }
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        out.push('0');
        return Ok(());
    }
    // 64 binary digits bound the longest possible rendering.
    let mut buffer = ArrayVec::<u8, 64>::new();
    while magnitude > 0 {
        buffer.push(DIGIT_TO_CHAR[(magnitude % radix as u64) as usize]);
        magnitude /= radix as u64;
    }
    for &digit in buffer.iter().rev() {
        out.push(digit as char);
    }
    Ok(())
}

/// Appends an integral `f64` in `radix`.
///
/// Fails with `NotAnInteger` if the value has a fractional part, is not
/// finite, or falls outside the i64 range.
pub fn format_integer(value: f64, radix: u32, out: &mut String) -> FormatResult<()> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(FormatError::NotAnInteger);
    }
    if value >= i64::MAX as f64 || value < i64::MIN as f64 {
        return Err(FormatError::NotAnInteger);
    }
    format_i64(value as i64, radix, out)
}

/// Appends `value` with formatting control.
///
/// `digits` is the significant-digit count (excluding the exponent):
/// `-1` picks the natural precision that round-trips the value, preferring
/// 16 digits over 17 when both reproduce it exactly; otherwise 1..=19.
/// `scientific` forces `D.FFF...E<exp>` notation; it is also selected
/// whenever the magnitude would push the decimal point past the digit
/// count. `show_zeros` pads trailing fractional zeros out to exactly
/// `digits` significant digits instead of stripping them.
///
/// # Example
/// ```
/// use amount_format::codec::format_f64;
///
/// let mut out = String::new();
/// format_f64(0.2, 4, true, false, &mut out).unwrap();
/// assert_eq!(out, "2.0E-1");
/// ```
pub fn format_f64(
    value: f64,
    digits: i32,
    scientific: bool,
    show_zeros: bool,
    out: &mut String,
) -> FormatResult<()> {
    if digits < -1 || digits == 0 || digits > 19 {
        return Err(FormatError::InvalidDigitCount(digits));
    }
    if value.is_nan() {
        out.push_str("NaN");
        return Ok(());
    }
    if value == f64::INFINITY {
        out.push_str("Infinity");
        return Ok(());
    }
    if value == f64::NEG_INFINITY {
        out.push_str("-Infinity");
        return Ok(());
    }
    if value == 0.0 {
        if digits < 0 {
            out.push_str("0.0");
            return Ok(());
        }
        out.push('0');
        if show_zeros && digits > 1 {
            out.push('.');
            for _ in 1..digits {
                out.push('0');
            }
        }
        return Ok(());
    }

    let mut value = value;
    if value < 0.0 {
        out.push('-');
        value = -value;
    }

    // Exponent e such that value == x.xxx * 10^e.
    let mut e = floor_log10(value);

    let (mut digits, mut mantissa) = if digits < 0 {
        // Natural precision: 17 digits always round-trip; drop to 16 when
        // the truncated mantissa still reproduces the value.
        let m17 = round_scaled(value, 16 - e);
        let m16 = m17 / 10;
        if m16 as f64 * pow10_f64(e - 15) == value {
            (16usize, m16)
        } else {
            (17usize, m17)
        }
    } else {
        (digits as usize, round_scaled(value, digits - 1 - e))
    };

    // Rounding may carry into one extra digit (e.g. 9.99 at 2 digits), and
    // at extreme exponents the scaling can land one digit short.
    if mantissa >= POW10[digits] {
        mantissa /= 10;
        e += 1;
    } else if mantissa < POW10[digits - 1] {
        mantissa *= 10;
        e -= 1;
    }

    if scientific || e >= digits as i32 {
        let leading = mantissa / POW10[digits - 1];
        out.push((b'0' + leading as u8) as char);
        append_fraction(mantissa % POW10[digits - 1], digits - 1, show_zeros, out);
        out.push('E');
        let _ = write!(out, "{e}");
    } else {
        let fraction_digits = (digits as i32 - e - 1) as usize;
        if fraction_digits < POW10.len() {
            let _ = write!(out, "{}", mantissa / POW10[fraction_digits]);
            append_fraction(mantissa % POW10[fraction_digits], fraction_digits, show_zeros, out);
        } else {
            // The whole mantissa sits below the decimal point.
            out.push('0');
            append_fraction(mantissa, fraction_digits, show_zeros, out);
        }
    }
    Ok(())
}

/// Appends `value` with default rules: integral values in the i64 range
/// render as plain integers, everything else at natural precision with
/// scientific notation outside `[1e-4, 1e7)`.
pub fn format_value(value: f64, out: &mut String) -> FormatResult<()> {
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        format_i64(value as i64, 10, out)
    } else {
        let scientific = value.abs() >= 1e7 || value.abs() < 1e-4;
        format_f64(value, -1, scientific, false, out)
    }
}

/// Number of decimal digits in the magnitude of `value`.
///
/// For negative values this is the digit count of `-(value + 1)`, the
/// minimal ten's-complement convention, so it can differ from the rendered
/// length at exact powers of ten. Matches `format_i64(value, 10, ..)`
/// output length (sign excluded) everywhere else, including zero.
pub fn digit_length(value: i64) -> u32 {
    if value == 0 {
        return 1;
    }
    let magnitude = if value < 0 {
        (-(value + 1)) as u64
    } else {
        value as u64
    };
    decimal_digits(magnitude) as u32
}

fn decimal_digits(magnitude: u64) -> usize {
    let mut length = 1;
    while length < POW10.len() && magnitude >= POW10[length] {
        length += 1;
    }
    length
}

// round(value * 10^scale) as an unsigned mantissa; value is positive.
// Scales past 10^308 are applied in two steps so the factor itself stays
// representable.
fn round_scaled(value: f64, scale: i32) -> u64 {
    let scaled = if scale > 308 {
        value * pow10_f64(scale - 308) * pow10_f64(308)
    } else {
        value * pow10_f64(scale)
    };
    scaled.round() as u64
}

// Appends the decimal point and the fractional part of a mantissa,
// padding leading zeros out to `digits` positions and then either
// stripping or keeping trailing zeros.
fn append_fraction(mut fraction: u64, digits: usize, show_zeros: bool, out: &mut String) {
    out.push('.');
    if fraction == 0 {
        if show_zeros {
            for _ in 0..digits {
                out.push('0');
            }
        } else {
            out.push('0');
        }
        return;
    }
    for _ in decimal_digits(fraction)..digits {
        out.push('0');
    }
    if !show_zeros {
        while fraction % 10 == 0 {
            fraction /= 10;
        }
    }
    let _ = write!(out, "{fraction}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn fmt_f64(value: f64, digits: i32, scientific: bool, show_zeros: bool) -> String {
        let mut out = String::new();
        format_f64(value, digits, scientific, show_zeros, &mut out).unwrap();
        out
    }

    fn fmt_i64(value: i64, radix: u32) -> String {
        let mut out = String::new();
        format_i64(value, radix, &mut out).unwrap();
        out
    }

    #[test]
    fn test_format_bool() {
        let mut out = String::new();
        format_bool(true, &mut out);
        format_bool(false, &mut out);
        assert_eq!(out, "truefalse");
    }

    #[test]
    fn test_format_i64_radix_10() {
        assert_eq!(fmt_i64(0, 10), "0");
        assert_eq!(fmt_i64(42, 10), "42");
        assert_eq!(fmt_i64(-42, 10), "-42");
        assert_eq!(fmt_i64(i64::MIN, 10), "-9223372036854775808");
    }

    #[test]
    fn test_format_i64_other_radixes() {
        assert_eq!(fmt_i64(-128, 2), "-10000000");
        assert_eq!(fmt_i64(255, 16), "ff");
        assert_eq!(fmt_i64(35, 36), "z");
        assert_eq!(fmt_i64(0, 2), "0");
        assert_eq!(fmt_i64(i64::MIN, 16), "-8000000000000000");
        assert_eq!(
            fmt_i64(i64::MIN, 2),
            format!("-1{}", "0".repeat(63))
        );
    }

    #[test]
    fn test_format_i64_invalid_radix() {
        let mut out = String::new();
        assert_eq!(format_i64(1, 1, &mut out), Err(FormatError::InvalidRadix(1)));
        assert_eq!(format_i64(1, 37, &mut out), Err(FormatError::InvalidRadix(37)));
    }

    #[test]
    fn test_format_integer_contract() {
        let mut out = String::new();
        assert_eq!(format_integer(1.5, 10, &mut out), Err(FormatError::NotAnInteger));
        assert_eq!(format_integer(f64::NAN, 10, &mut out), Err(FormatError::NotAnInteger));
        assert_eq!(format_integer(1e300, 10, &mut out), Err(FormatError::NotAnInteger));
        format_integer(-128.0, 2, &mut out).unwrap();
        assert_eq!(out, "-10000000");
    }

    // The five examples from the original fixed/scientific contract.
    #[test]
    fn test_format_f64_doc_examples() {
        assert_eq!(fmt_f64(0.2, -1, false, false), "0.2");
        assert_eq!(fmt_f64(0.2, 4, false, false), "0.2");
        assert_eq!(fmt_f64(0.2, 4, false, true), "0.2000");
        assert_eq!(fmt_f64(0.2, 4, true, false), "2.0E-1");
        assert_eq!(fmt_f64(0.2, 4, true, true), "2.000E-1");
    }

    #[test]
    fn test_format_f64_specials() {
        assert_eq!(fmt_f64(f64::NAN, 4, false, false), "NaN");
        assert_eq!(fmt_f64(f64::INFINITY, 4, false, false), "Infinity");
        assert_eq!(fmt_f64(f64::NEG_INFINITY, 4, false, false), "-Infinity");
        assert_eq!(fmt_f64(0.0, -1, false, false), "0.0");
        assert_eq!(fmt_f64(0.0, 4, false, false), "0");
        assert_eq!(fmt_f64(0.0, 4, false, true), "0.000");
    }

    #[test]
    fn test_format_f64_fixed() {
        assert_eq!(fmt_f64(1.34, 3, false, false), "1.34");
        assert_eq!(fmt_f64(-1.34, 3, false, false), "-1.34");
        assert_eq!(fmt_f64(0.01, 2, false, false), "0.01");
        assert_eq!(fmt_f64(0.01, 2, false, true), "0.010");
        assert_eq!(fmt_f64(1234.5, 5, false, false), "1234.5");
    }

    #[test]
    fn test_format_f64_scientific_switch() {
        // Exponent at or past the digit count forces scientific notation.
        assert_eq!(fmt_f64(123456.0, 3, false, false), "1.23E5");
        assert_eq!(fmt_f64(1.5e-7, 3, true, false), "1.5E-7");
        assert_eq!(fmt_f64(2.5e6, 2, false, false), "2.5E6");
    }

    #[test]
    fn test_format_f64_rounding_carry() {
        assert_eq!(fmt_f64(9.99, 2, true, false), "1.0E1");
        assert_eq!(fmt_f64(0.999, 1, true, false), "1.0E0");
    }

    #[test]
    fn test_format_f64_invalid_digit_count() {
        let mut out = String::new();
        assert_eq!(
            format_f64(1.0, 20, false, false, &mut out),
            Err(FormatError::InvalidDigitCount(20))
        );
        assert_eq!(
            format_f64(1.0, 0, false, false, &mut out),
            Err(FormatError::InvalidDigitCount(0))
        );
        assert_eq!(
            format_f64(1.0, -2, false, false, &mut out),
            Err(FormatError::InvalidDigitCount(-2))
        );
    }

    #[test]
    fn test_format_value_dispatch() {
        let mut out = String::new();
        format_value(5.0, &mut out).unwrap();
        assert_eq!(out, "5");

        let mut out = String::new();
        format_value(1.5, &mut out).unwrap();
        assert_eq!(out, "1.5");

        let mut out = String::new();
        format_value(2.5e-7, &mut out).unwrap();
        assert_eq!(out, "2.5E-7");
    }

    #[test]
    fn test_floor_log10() {
        assert_eq!(floor_log10(1.0), 0);
        assert_eq!(floor_log10(9.999), 0);
        assert_eq!(floor_log10(10.0), 1);
        assert_eq!(floor_log10(0.1), -1);
        assert_eq!(floor_log10(0.01), -2);
        assert_eq!(floor_log10(0.001), -3);
        assert_eq!(floor_log10(1e15), 15);
        assert_eq!(floor_log10(9.5e-7), -7);
        assert_eq!(floor_log10(f64::MAX), 308);
        assert_eq!(floor_log10(f64::MIN_POSITIVE), -308);
    }

    #[test]
    fn test_digit_length() {
        assert_eq!(digit_length(0), 1);
        assert_eq!(digit_length(9), 1);
        assert_eq!(digit_length(10), 2);
        assert_eq!(digit_length(999), 3);
        assert_eq!(digit_length(1000), 4);
        assert_eq!(digit_length(i64::MAX), 19);
        // Ten's-complement convention for negatives.
        assert_eq!(digit_length(-128), 3);
        assert_eq!(digit_length(-999), 3);
        assert_eq!(digit_length(i64::MIN), 19);
        // The convention diverges from rendered length only at -10^k.
        assert_eq!(digit_length(-10), 1);
    }

    #[test]
    fn test_natural_precision_round_trip() {
        for &value in &[0.2, 1.34, -1.5, 0.001, 1234.5678, 123456789.25, 5.0e14] {
            let mut out = String::new();
            format_f64(value, -1, false, false, &mut out).unwrap();
            assert_eq!(crate::codec::parse_f64(&out).unwrap(), value, "text: {out}");
        }
    }

    quickcheck! {
        fn qc_digit_length_matches_rendered(value: i64) -> bool {
            let magnitude = if value < 0 { -(value + 1) } else { value };
            digit_length(value) as usize == fmt_i64(magnitude, 10).len()
        }

        fn qc_format_parse_round_trip_radix(value: i64) -> bool {
            [2u32, 8, 10, 16, 36].iter().all(|&radix| {
                crate::codec::parse_i64(&fmt_i64(value, radix), radix) == Ok(value)
            })
        }
    }
}
