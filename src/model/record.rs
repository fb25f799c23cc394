//! Byte-count log record.

use chrono::NaiveDateTime;
use std::fmt;

/// One byte-count event read from the log.
///
/// Records are immutable: fields are private and only exposed through
/// accessors. The timestamp carries microsecond precision and no timezone,
/// matching what the load generator writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogRecord {
    timestamp: NaiveDateTime,
    byte_count: u64,
}

impl LogRecord {
    /// Create a record from its timestamp and byte count.
    pub fn new(timestamp: NaiveDateTime, byte_count: u64) -> Self {
        Self {
            timestamp,
            byte_count,
        }
    }

    /// Instant at which the bytes were reported.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Number of bytes reported at [`timestamp`](Self::timestamp).
    pub fn byte_count(&self) -> u64 {
        self.byte_count
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} bytes",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.byte_count
        )
    }
}

/// Result of parsing a whole log with bookkeeping about dropped lines.
///
/// `records` is exactly what [`crate::parser::parse_log`] returns for the
/// same text; `skipped_lines` counts non-blank lines that did not match the
/// line grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLog {
    /// Parsed records in source line order.
    pub records: Vec<LogRecord>,
    /// Non-blank lines that were dropped as malformed.
    pub skipped_lines: usize,
}
