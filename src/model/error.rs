//! Error types for bytechart.
//!
//! Log content never produces an error: malformed lines are dropped by the
//! parser and missing data is reported as a diagnostic. What remains are
//! environmental failures, grouped per layer with `thiserror` and composed
//! with `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by [`crate::pipeline::run`]
//!   - `std::io::Error` - Writing diagnostics failed
//!   - [`crate::view::ViewError`] - Chart rendering or terminal failures
//! - [`InputError`] - Reading the log file failed. Never fatal: the loader
//!   reports it and substitutes empty text.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level pipeline error.
///
/// Returned from [`crate::pipeline::run`]. Both variants describe the
/// environment (a closed stdout, an unwritable output path, a terminal that
/// refuses raw mode), never the contents of the log.
#[derive(Debug, Error)]
pub enum AppError {
    /// Writing diagnostics to the output stream failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Rendering the chart failed.
    #[error("Chart error: {0}")]
    Chart(#[from] crate::view::ViewError),
}

/// Errors encountered when reading the log file.
///
/// The loader in [`crate::source`] turns each variant into a printed
/// diagnostic and continues with empty input.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use bytechart::model::error::InputError;
///
/// let err = InputError::FileNotFound {
///     path: PathBuf::from("/tmp/missing.log"),
/// };
/// assert!(err.to_string().contains("/tmp/missing.log"));
/// ```
#[derive(Debug, Error)]
pub enum InputError {
    /// The log file does not exist.
    #[error("Log file {} not found.", path.display())]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The log file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Failed to read log file {}: {source}", path.display())]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::FileNotFound { path }
        } else {
            InputError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn not_found_io_error_becomes_file_not_found() {
        let err = InputError::from_io("LogFile.txt", Error::from(ErrorKind::NotFound));
        assert!(matches!(err, InputError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "Log file LogFile.txt not found.");
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let err = InputError::from_io(
            "LogFile.txt",
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        match err {
            InputError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("LogFile.txt"));
                assert_eq!(source.kind(), ErrorKind::PermissionDenied);
            }
            other => panic!("Expected Io variant, got {:?}", other),
        }
    }

    #[test]
    fn app_error_wraps_io_error() {
        let err: AppError = Error::new(ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(err.to_string().contains("pipe closed"));
    }
}
