//! Parsing and throughput benchmarks.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use bytechart::parser::parse_log;
use bytechart::throughput::ThroughputStats;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Generate a log of `lines` entries, one malformed line in every ten.
fn generate_log(lines: usize) -> String {
    let mut text = String::with_capacity(lines * 56);
    for i in 0..lines {
        if i % 10 == 9 {
            text.push_str("Connection reset by peer\n");
            continue;
        }
        let secs = i % 60;
        let micros = (i * 7919) % 1_000_000;
        let status = if i % 3 == 0 { "Bad" } else { "Ok" };
        text.push_str(&format!(
            "Time: 2024-12-14 16:30:{:02}.{:06}; Byte's: {}; {}.\n",
            secs,
            micros,
            300 + i % 20_000,
            status
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = generate_log(200_000);
    c.bench_function("parse_log_200k_lines", |b| {
        b.iter(|| parse_log(black_box(&text)))
    });
}

fn bench_throughput(c: &mut Criterion) {
    let records = parse_log(&generate_log(200_000));
    c.bench_function("throughput_200k_records", |b| {
        b.iter(|| ThroughputStats::from_records(black_box(&records)))
    });
}

criterion_group!(benches, bench_parse, bench_throughput);
criterion_main!(benches);
