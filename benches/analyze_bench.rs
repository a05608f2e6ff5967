//! Benchmarks for buffer analysis and conversion throughput.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docprops::{analyze, convert, AnalysisOptions, ConvertOptions, Defaults, EolStyle, IndentStyle, Verdict};
use std::hint::black_box;

/// Builds a code-like buffer of `lines` lines indented with `unit`.
fn synthetic_buffer(lines: usize, unit: &str) -> String {
    let mut out = String::with_capacity(lines * 32);
    for i in 0..lines {
        let depth = [0, 1, 2, 3, 2, 1][i % 6];
        out.push_str(&unit.repeat(depth));
        match i % 10 {
            0 => out.push_str("# comment line\n"),
            5 => out.push_str("call(a, \\\n"),
            _ => out.push_str("let value = compute(i);\n"),
        }
    }
    out
}

fn benchmark_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let defaults = Defaults::default();

    for &(name, unit) in &[("tabs", "\t"), ("spaces", "    ")] {
        for &size in &[1_000, 10_000, 100_000] {
            let buffer = synthetic_buffer(size, unit);
            group.throughput(Throughput::Bytes(buffer.len() as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &buffer, |b, buffer| {
                b.iter(|| black_box(analyze(buffer, AnalysisOptions::default(), &defaults)));
            });
        }
    }

    group.finish();
}

fn benchmark_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    let from = Verdict::new(EolStyle::Unix, IndentStyle::Tabs, 4, 4);
    let to = Verdict::new(EolStyle::Dos, IndentStyle::Spaces, 4, 4);

    for &size in &[1_000, 10_000, 100_000] {
        let buffer = synthetic_buffer(size, "\t");
        group.throughput(Throughput::Bytes(buffer.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &buffer, |b, buffer| {
            b.iter(|| black_box(convert(buffer, &from, &to, ConvertOptions::default())));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_analyze, benchmark_convert);
criterion_main!(benches);
