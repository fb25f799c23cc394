//! Log input sources.
//!
//! Loading never fails because of the log itself: a missing or unreadable
//! file is reported on the diagnostic stream and replaced by empty text, so
//! the downstream stages run their own "no data" branches.

use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

pub mod file;

pub use file::read_log_file;

/// Load the log at `path`, substituting empty text on failure.
///
/// Read failures are printed to `out` (for a missing file:
/// `Log file <path> not found.`) and logged at `warn`.
///
/// # Errors
///
/// Only fails if writing the diagnostic to `out` fails.
pub fn load_log_text<W: Write>(path: &Path, out: &mut W) -> io::Result<String> {
    match read_log_file(path) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(error = %err, "Continuing with empty log");
            writeln!(out, "{}", err)?;
            Ok(String::new())
        }
    }
}
