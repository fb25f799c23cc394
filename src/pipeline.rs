//! Load → parse → throughput → chart.
//!
//! Wires the components together for one run. Each stage consumes the full
//! output of the previous one; nothing is shared beyond return values.

use crate::model::{AppError, LogRecord};
use crate::view::ChartOptions;
use crate::{parser, source, throughput, view};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// What a run produced, for callers that want the numbers without
/// re-reading the printed diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Parsed records in log order.
    pub records: Vec<LogRecord>,
    /// Non-blank lines dropped as malformed.
    pub skipped_lines: usize,
    /// Bytes per second, or `0.0` when it could not be computed.
    pub throughput: f64,
}

/// Analyse the log at `input` and render its chart.
///
/// Diagnostics (missing file, insufficient data, metrics, no data) are
/// written to `out`, as is a headless chart without an output file.
///
/// # Errors
///
/// Returns `AppError` only for environmental failures: writing to `out`,
/// writing the chart file, or driving the terminal. Log contents, including
/// a missing log, never cause an error.
pub fn run<W: Write>(
    input: &Path,
    chart: &ChartOptions,
    out: &mut W,
) -> Result<RunSummary, AppError> {
    info!(input = %input.display(), "Starting analysis");

    let text = source::load_log_text(input, out)?;

    let parsed = parser::parse_log_detailed(&text);
    info!(
        records = parsed.records.len(),
        skipped_lines = parsed.skipped_lines,
        "Parsed log"
    );

    let throughput = throughput::compute_throughput(&parsed.records, out)?;

    view::render(&parsed.records, chart, out)?;

    Ok(RunSummary {
        records: parsed.records,
        skipped_lines: parsed.skipped_lines,
        throughput,
    })
}
