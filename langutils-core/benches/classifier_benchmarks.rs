//! Throughput of string classification and length counting
//!
//! Run with: cargo bench --bench classifier_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use langutils_core::{length_escaped, string_class, Encoding, EscapeEncoding, EscapeSpec, Language};
use std::hint::black_box;

/// Generate lowercase Spanish text of the given byte size
fn generate_text(size: usize) -> String {
    let base = "elniñoquierecomerpiñaconazúcar";
    let mut text = base.repeat(size / base.len() + 1);
    while text.len() > size {
        text.pop();
    }
    text
}

/// Benchmark whole-string predicates per encoding
fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("lower_case_in_alphabet");

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("utf8", size), &text, |b, text| {
            b.iter(|| {
                string_class::is_lower_case_in_alphabet(
                    black_box(text.as_bytes()),
                    Encoding::Utf8Binary,
                    Language::Spanish,
                )
            });
        });

        let latin1: Vec<u8> = text.chars().map(|ch| ch as u8).collect();
        group.bench_with_input(BenchmarkId::new("latin1", size), &latin1, |b, bytes| {
            b.iter(|| {
                string_class::is_lower_case_in_alphabet(
                    black_box(bytes),
                    Encoding::Iso8859_1,
                    Language::Spanish,
                )
            });
        });
    }

    group.finish();
}

/// Benchmark plain, visible and escaped length
fn bench_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("length");
    let text = generate_text(102_400);
    let escaped = "abc\\u00f1def".repeat(8_192);
    let spec = EscapeSpec::new("\\u", EscapeEncoding::AsciiHex);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("length", |b| {
        b.iter(|| string_class::length(black_box(text.as_bytes()), Encoding::Utf8Binary))
    });
    group.bench_function("visible_length", |b| {
        b.iter(|| string_class::visible_length(black_box(text.as_bytes()), Encoding::Utf8Binary))
    });

    group.throughput(Throughput::Bytes(escaped.len() as u64));
    group.bench_function("length_escaped", |b| {
        b.iter(|| length_escaped(black_box(escaped.as_bytes()), Encoding::Ascii, &spec))
    });

    group.finish();
}

criterion_group!(benches, bench_predicates, bench_lengths);
criterion_main!(benches);
