//! Throughput calculation and the printed metrics report.
//!
//! [`ThroughputStats::from_records`] is the pure reduction;
//! [`compute_throughput`] wraps it with the diagnostics a user sees.

use crate::model::LogRecord;
use std::io::{self, Write};
use tracing::info;

/// Diagnostic printed when fewer than two records are available.
pub const INSUFFICIENT_DATA_MESSAGE: &str = "Not enough data to compute throughput.";

/// Aggregate throughput over a record sequence.
///
/// # Invariants
///
/// - `total_bytes` is the exact sum of every record's byte count; per-record
///   counts are `u64`, so the `u128` total cannot overflow
/// - `duration_secs` is measured from the first record *by position* to the
///   last record *by position*, so it is negative for a log that runs
///   backwards in time
/// - `throughput` is `total_bytes / duration_secs` when the duration is
///   positive, and `0.0` otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputStats {
    /// Sum of all byte counts.
    pub total_bytes: u128,
    /// Seconds from the first record to the last record.
    pub duration_secs: f64,
    /// Bytes per second, or `0.0` for a zero or negative duration.
    pub throughput: f64,
}

impl ThroughputStats {
    /// Reduce `records` to throughput statistics.
    ///
    /// Returns `None` when fewer than two records are supplied, since no
    /// time span exists.
    pub fn from_records(records: &[LogRecord]) -> Option<Self> {
        let (first, last) = match records {
            [first, .., last] => (first, last),
            _ => return None,
        };

        let total_bytes: u128 = records.iter().map(|r| u128::from(r.byte_count())).sum();

        let span = last.timestamp() - first.timestamp();
        let duration_secs = match span.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            // Only overflows for spans of ~292k years; second precision is plenty there
            None => span.num_seconds() as f64,
        };

        let throughput = if duration_secs > 0.0 {
            total_bytes as f64 / duration_secs
        } else {
            0.0
        };

        Some(Self {
            total_bytes,
            duration_secs,
            throughput,
        })
    }

    /// Write the three metric lines in fixed order.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total bytes: {} bytes", self.total_bytes)?;
        writeln!(out, "Total time: {:.2} seconds", self.duration_secs)?;
        writeln!(out, "Throughput: {:.2} bytes/second", self.throughput)
    }
}

/// Compute throughput for `records` and print the diagnostics to `out`.
///
/// With fewer than two records, prints the insufficient-data message and
/// returns `0.0`. Otherwise prints total bytes, duration and throughput and
/// returns the throughput.
///
/// # Errors
///
/// Only fails if writing to `out` fails.
///
/// # Examples
///
/// ```
/// use bytechart::parser::parse_log;
/// use bytechart::throughput::compute_throughput;
///
/// let records = parse_log(
///     "Time: 2024-12-14 16:30:16.000000; Byte's: 100; Ok.\n\
///      Time: 2024-12-14 16:30:18.000000; Byte's: 300; Ok.\n",
/// );
/// let mut out = Vec::new();
/// let throughput = compute_throughput(&records, &mut out).unwrap();
/// assert_eq!(throughput, 200.0);
/// ```
pub fn compute_throughput<W: Write>(records: &[LogRecord], out: &mut W) -> io::Result<f64> {
    let Some(stats) = ThroughputStats::from_records(records) else {
        writeln!(out, "{}", INSUFFICIENT_DATA_MESSAGE)?;
        info!(records = records.len(), "Not enough records for throughput");
        return Ok(0.0);
    };

    stats.write_report(out)?;
    info!(
        total_bytes = stats.total_bytes,
        duration_secs = stats.duration_secs,
        throughput = stats.throughput,
        "Throughput computed"
    );

    Ok(stats.throughput)
}
