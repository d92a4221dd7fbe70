// ============================================================================
// Basic Usage Example
// ============================================================================

use amount_format::prelude::*;

fn main() {
    println!("=== Amount Format Example ===\n");

    // Plain values: radix integers and significant-digit decimals
    println!("Formatting values...");
    let mut out = String::new();
    format_i64(255, 16, &mut out).unwrap();
    println!("  255 in hex:         {}", out);

    out.clear();
    format_f64(1234.56789, 4, false, false, &mut out).unwrap();
    println!("  1234.56789 @ 4 sig: {}", out);

    out.clear();
    format_f64(0.000125, 2, true, true, &mut out).unwrap();
    println!("  0.000125 sci:       {}", out);

    // Incremental parsing: one cursor threads through several values
    println!("\nParsing a record...");
    let record = "true 3f -2.5E3";
    let mut cursor = Cursor::new();
    let flag = parse_bool_at(record, &mut cursor).unwrap();
    cursor.skip(" ", record).unwrap();
    let count = parse_i64_at(record, 16, &mut cursor).unwrap();
    cursor.skip(" ", record).unwrap();
    let reading = parse_f64_at(record, &mut cursor).unwrap();
    println!("  flag={} count={} reading={}", flag, count, reading);

    // Measured quantities under the three uncertainty notations
    println!("\n=== Uncertainty Notations ===");
    let units = SymbolUnits;
    let length = Amount::measured(1.3456, 0.002, "m".to_string());

    for (name, style) in [
        ("plus-minus  ", AmountStyle::plus_minus(2)),
        ("bracket     ", AmountStyle::bracket(2)),
        ("exact digits", AmountStyle::exact_digits()),
    ] {
        println!("  {}: {}", name, style.format(&length, &units).unwrap());
    }

    // Plus-minus is the notation that also reads quantities back
    println!("\n=== Round Trip ===");
    let style = AmountStyle::plus_minus(2);
    let text = style.format(&length, &units).unwrap();
    match style.parse_str(&text, &units).unwrap() {
        Some(parsed) => println!(
            "  {:?} ± {:?} {}",
            parsed.estimated_value(),
            parsed.absolute_error(),
            parsed.unit()
        ),
        None => println!("  rejected"),
    }

    // Malformed input reports where scanning failed
    let bad = "(1.34 ± oops) m";
    let mut cursor = Cursor::new();
    if style.parse(bad, &mut cursor, &units).unwrap().is_none() {
        println!(
            "  {:?} rejected at offset {:?}",
            bad,
            cursor.error_index().unwrap()
        );
    }
}
