//! Line parser for byte-count logs.
//!
//! This module provides pure parsing functions for converting log text into
//! [`LogRecord`]s. The accepted line grammar is fixed:
//!
//! ```text
//! Time: YYYY-MM-DD HH:MM:SS.f+; Byte's: <digits>;<anything>
//! ```
//!
//! Matching is anchored at the start of the line and case-sensitive. Lines
//! that do not match are dropped without error.

use crate::model::{LogRecord, ParsedLog};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

// Literal tokens of the line grammar
const TIME_TOKEN: &str = "Time: ";
const BYTES_TOKEN: &str = "; Byte's: ";
const FIELD_TERMINATOR: &str = ";";

/// Length of `YYYY-MM-DD HH:MM:SS.` (everything before the fraction digits).
const TIMESTAMP_PREFIX_LEN: usize = 20;

/// Fraction digits kept; the rest are truncated.
const MAX_FRACTION_DIGITS: usize = 6;

/// Record separators other than `\n` and `\r\n`, which `str::lines` handles.
fn is_record_break(c: char) -> bool {
    matches!(
        c,
        '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `line` on the less common record separators (lone `\r`, form feed,
/// Unicode line and paragraph separators).
fn split_records(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_record_break)
}

/// Parse log text into records, preserving line order.
///
/// Malformed lines are skipped. Empty text yields an empty vector. Besides
/// `\n` and `\r\n`, a lone `\r` and the Unicode line separators also end a
/// record.
///
/// # Examples
///
/// ```
/// use bytechart::parser::parse_log;
///
/// let text = "Time: 2024-12-14 16:30:16.000000; Byte's: 100; Ok.\nnoise\n";
/// let records = parse_log(text);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].byte_count(), 100);
/// ```
pub fn parse_log(text: &str) -> Vec<LogRecord> {
    text.lines()
        .flat_map(split_records)
        .filter_map(parse_line)
        .collect()
}

/// Parse log text, also counting the lines that were dropped.
///
/// Blank lines are ignored and not counted as skipped. Each skipped line is
/// reported as a `debug` tracing event with its 1-based line number, counted
/// in `\n` lines.
pub fn parse_log_detailed(text: &str) -> ParsedLog {
    let mut parsed = ParsedLog::default();

    for (index, line) in text.lines().enumerate() {
        for record_text in split_records(line) {
            match parse_line(record_text) {
                Some(record) => parsed.records.push(record),
                None if record_text.trim().is_empty() => {}
                None => {
                    parsed.skipped_lines += 1;
                    debug!(
                        line_number = index + 1,
                        line = record_text,
                        "Skipping malformed log line"
                    );
                }
            }
        }
    }

    parsed
}

/// Parse a single log line.
///
/// Returns `None` when any part of the grammar is missing or malformed,
/// including timestamps that are well-shaped but not a real calendar
/// instant (month 13, Feb 30, hour 24). A byte count above `u64::MAX`
/// (16 EiB in a single event) also drops the line rather than being clamped.
/// Partial records are never produced.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let rest = line.strip_prefix(TIME_TOKEN)?;
    let (timestamp, rest) = take_timestamp(rest)?;
    let rest = rest.strip_prefix(BYTES_TOKEN)?;
    let (digits, rest) = take_digits(rest)?;
    rest.strip_prefix(FIELD_TERMINATOR)?;

    let byte_count = digits.parse::<u64>().ok()?;
    Some(LogRecord::new(timestamp, byte_count))
}

/// Split a leading `YYYY-MM-DD HH:MM:SS.f+` timestamp off `input`.
fn take_timestamp(input: &str) -> Option<(NaiveDateTime, &str)> {
    let bytes = input.as_bytes();
    if bytes.len() <= TIMESTAMP_PREFIX_LEN {
        return None;
    }

    // Separator positions within the fixed-width prefix
    let separators = [(4, b'-'), (7, b'-'), (10, b' '), (13, b':'), (16, b':'), (19, b'.')];
    if separators.iter().any(|&(pos, sep)| bytes[pos] != sep) {
        return None;
    }

    let year = number(bytes, 0, 4)?;
    let month = number(bytes, 5, 7)?;
    let day = number(bytes, 8, 10)?;
    let hour = number(bytes, 11, 13)?;
    let minute = number(bytes, 14, 16)?;
    let second = number(bytes, 17, 19)?;

    let fraction_len = bytes[TIMESTAMP_PREFIX_LEN..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if fraction_len == 0 {
        return None;
    }
    let kept = fraction_len.min(MAX_FRACTION_DIGITS);
    let micros = number(bytes, TIMESTAMP_PREFIX_LEN, TIMESTAMP_PREFIX_LEN + kept)?
        * 10u32.pow((MAX_FRACTION_DIGITS - kept) as u32);

    let timestamp = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?
        .and_hms_micro_opt(hour, minute, second, micros)?;

    // Every byte up to here is ASCII, so this is a char boundary
    Some((timestamp, &input[TIMESTAMP_PREFIX_LEN + fraction_len..]))
}

/// Split a non-empty run of ASCII digits off `input`.
fn take_digits(input: &str) -> Option<(&str, &str)> {
    let len = input.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    Some(input.split_at(len))
}

/// Decode `bytes[start..end]` as an unsigned decimal number.
///
/// Returns `None` if any byte in the range is not an ASCII digit.
fn number(bytes: &[u8], start: usize, end: usize) -> Option<u32> {
    bytes[start..end].iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
