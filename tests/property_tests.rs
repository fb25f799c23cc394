//! Property-based tests for parser and throughput invariants.
//!
//! Tests validate:
//! 1. Well-formed lines parse to exactly their timestamp and byte count
//! 2. Parsing preserves line order and is idempotent
//! 3. Total bytes is the sum of byte counts for any permutation
//! 4. Throughput falls back to zero for short or inverted logs

use bytechart::model::LogRecord;
use bytechart::parser::{parse_line, parse_log};
use bytechart::throughput::ThroughputStats;
use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

// ===== Strategies =====

fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (
        1970i32..2100,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1_000_000,
    )
        .prop_map(|(y, mo, d, h, mi, s, micro)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_micro_opt(h, mi, s, micro)
                .unwrap()
        })
}

fn record() -> impl Strategy<Value = LogRecord> {
    (timestamp(), any::<u64>()).prop_map(|(ts, bytes)| LogRecord::new(ts, bytes))
}

fn format_line(record: &LogRecord, trailer: &str) -> String {
    format!(
        "Time: {}; Byte's: {};{}",
        record.timestamp().format("%Y-%m-%d %H:%M:%S%.6f"),
        record.byte_count(),
        trailer
    )
}

// ===== Property 1: Parse correctness =====

proptest! {
    #[test]
    fn well_formed_line_parses_to_its_fields(
        rec in record(),
        trailer in "[ -~]{0,20}",
    ) {
        let line = format_line(&rec, &trailer);
        prop_assert_eq!(parse_line(&line), Some(rec));
    }

    #[test]
    fn lines_without_time_token_never_parse(line in "[^T].{0,60}") {
        prop_assert!(parse_line(&line).is_none());
    }

    #[test]
    fn arbitrary_text_never_panics(text in any::<String>()) {
        let _ = parse_log(&text);
    }
}

// ===== Property 2: Order preservation =====

proptest! {
    #[test]
    fn parse_preserves_order_and_skips_noise(
        records in prop::collection::vec(record(), 0..30),
        noise in prop::collection::vec("[a-z ]{0,30}", 0..30),
    ) {
        let mut lines = Vec::new();
        for (i, rec) in records.iter().enumerate() {
            lines.push(format_line(rec, " Ok."));
            if let Some(junk) = noise.get(i) {
                lines.push(junk.clone());
            }
        }
        let text = lines.join("\n");

        let parsed = parse_log(&text);
        prop_assert_eq!(&parsed, &records);

        // Re-parsing the same text is idempotent
        prop_assert_eq!(parse_log(&text), parsed);
    }
}

// ===== Property 3: Sum correctness =====

proptest! {
    #[test]
    fn total_bytes_is_sum_for_any_permutation(
        records in prop::collection::vec(record(), 2..40),
        seed in any::<u64>(),
    ) {
        let expected: u128 = records.iter().map(|r| u128::from(r.byte_count())).sum();

        // Permute byte counts while keeping the timestamps in place
        let mut counts: Vec<u64> = records.iter().map(LogRecord::byte_count).collect();
        let len = counts.len();
        counts.rotate_left((seed as usize) % len);
        counts.reverse();
        let permuted: Vec<LogRecord> = records
            .iter()
            .zip(counts)
            .map(|(r, bytes)| LogRecord::new(r.timestamp(), bytes))
            .collect();

        let in_order = ThroughputStats::from_records(&records).unwrap();
        let shuffled = ThroughputStats::from_records(&permuted).unwrap();
        prop_assert_eq!(in_order.total_bytes, expected);
        prop_assert_eq!(shuffled.total_bytes, expected);
        prop_assert_eq!(in_order.duration_secs, shuffled.duration_secs);
    }
}

// ===== Property 4: Fallbacks =====

proptest! {
    #[test]
    fn fewer_than_two_records_have_no_stats(records in prop::collection::vec(record(), 0..2)) {
        prop_assert!(ThroughputStats::from_records(&records).is_none());
    }

    #[test]
    fn non_positive_span_gives_zero_throughput(
        a in record(),
        b in record(),
        middle in prop::collection::vec(record(), 0..5),
    ) {
        // Order the endpoints so the last is not after the first
        let (first, last) = if a.timestamp() >= b.timestamp() { (a, b) } else { (b, a) };
        let mut records = vec![first];
        records.extend(middle);
        records.push(last);

        let stats = ThroughputStats::from_records(&records).unwrap();
        prop_assert!(stats.duration_secs <= 0.0);
        prop_assert_eq!(stats.throughput, 0.0);
    }

    #[test]
    fn positive_span_gives_total_over_duration(
        a in record(),
        b in record(),
    ) {
        prop_assume!(a.timestamp() != b.timestamp());
        let (first, last) = if a.timestamp() < b.timestamp() { (a, b) } else { (b, a) };

        let stats = ThroughputStats::from_records(&[first, last]).unwrap();
        prop_assert!(stats.duration_secs > 0.0);
        let expected = stats.total_bytes as f64 / stats.duration_secs;
        prop_assert_eq!(stats.throughput, expected);
    }
}
