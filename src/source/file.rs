//! File-based log source.
//!
//! Reads the whole log into memory in one call; the file handle is closed
//! before the text is returned.

use crate::model::error::InputError;
use std::path::Path;
use tracing::debug;

/// Read the log file at `path` as UTF-8 text.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for any other failure, including invalid UTF-8.
pub fn read_log_file(path: &Path) -> Result<String, InputError> {
    let text = std::fs::read_to_string(path).map_err(|e| InputError::from_io(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "Read log file");
    Ok(text)
}
