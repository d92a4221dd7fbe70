// ============================================================================
// Amount Format Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Decimal Formatting - format_f64 across digit counts and notations
// 2. Decimal Parsing - parse_f64 over representative literals
// 3. Radix Integers - format/parse in binary, decimal and hex
// 4. Quantity Styles - end-to-end format and parse of measured amounts
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use amount_format::prelude::*;

// ============================================================================
// Decimal Formatting Benchmarks
// ============================================================================

fn benchmark_format_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_f64");

    for digits in [2i32, 8, 17].iter() {
        group.bench_with_input(BenchmarkId::new("fixed", digits), digits, |b, &digits| {
            let mut out = String::with_capacity(32);
            b.iter(|| {
                out.clear();
                format_f64(black_box(1234.56789), digits, false, false, &mut out).unwrap();
                black_box(out.len())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("scientific", digits),
            digits,
            |b, &digits| {
                let mut out = String::with_capacity(32);
                b.iter(|| {
                    out.clear();
                    format_f64(black_box(6.62607015e-34), digits, true, false, &mut out)
                        .unwrap();
                    black_box(out.len())
                });
            },
        );
    }

    group.bench_function("natural_precision", |b| {
        let mut out = String::with_capacity(32);
        b.iter(|| {
            out.clear();
            format_f64(black_box(0.1234567890123456), -1, false, false, &mut out).unwrap();
            black_box(out.len())
        });
    });

    group.finish();
}

// ============================================================================
// Decimal Parsing Benchmarks
// ============================================================================

fn benchmark_parse_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_f64");

    for text in ["42", "1234.56789", "-6.62607015E-34"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(text), text, |b, text| {
            b.iter(|| black_box(parse_f64(black_box(text)).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Radix Integer Benchmarks
// ============================================================================

fn benchmark_radix_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix_integers");

    for radix in [2u32, 10, 16].iter() {
        group.bench_with_input(BenchmarkId::new("format", radix), radix, |b, &radix| {
            let mut out = String::with_capacity(72);
            b.iter(|| {
                out.clear();
                format_i64(black_box(0x7edc_ba98_7654_3210), radix, &mut out).unwrap();
                black_box(out.len())
            });
        });
    }

    group.bench_function("parse_hex", |b| {
        b.iter(|| black_box(parse_i64(black_box("7edcba9876543210"), 16).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Quantity Style Benchmarks
// End-to-end formatting and parsing of measured amounts
// ============================================================================

fn benchmark_quantity_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantity_styles");
    let units = SymbolUnits;
    let amount = Amount::measured(1.3456, 0.002, "m".to_string());

    for (name, style) in [
        ("plus_minus", AmountStyle::plus_minus(2)),
        ("bracket", AmountStyle::bracket(2)),
        ("exact_digits", AmountStyle::exact_digits()),
    ] {
        group.bench_function(BenchmarkId::new("format", name), |b| {
            b.iter(|| black_box(style.format(black_box(&amount), &units).unwrap()));
        });
    }

    group.bench_function("parse_plus_minus", |b| {
        let style = AmountStyle::plus_minus(2);
        let text = style.format(&amount, &units).unwrap();
        b.iter(|| black_box(style.parse_str(black_box(&text), &units).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_format_f64,
    benchmark_parse_f64,
    benchmark_radix_integers,
    benchmark_quantity_styles
);
criterion_main!(benches);
