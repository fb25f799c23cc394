//! Tracing to a log file.
//!
//! Standard output carries the user-facing diagnostics and the headless
//! chart, so tracing events go to a file instead. Follow them with `tail -f`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info";

/// Why the log file could not be set up.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The directory holding the log file could not be created
    #[error("Cannot create log directory {}: {source}", path.display())]
    DirectoryCreation {
        /// Directory that was being created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configured path does not end in a UTF-8 file name
    #[error("Log path {} has no usable file name", .0.display())]
    InvalidPath(PathBuf),

    /// Another global subscriber was installed first
    #[error("A tracing subscriber is already installed")]
    SubscriberAlreadySet,
}

/// Split `log_path` into the directory to create and the file name to
/// append to. A bare file name resolves to the current directory.
fn log_location(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok((directory, file_name))
}

/// Install a global subscriber that appends plain-text events to `log_path`.
///
/// The level comes from `RUST_LOG` and falls back to `info`. Missing parent
/// directories are created.
///
/// # Errors
///
/// Fails if the directory cannot be created, the path has no file name, or
/// a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = log_location(log_path)?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn bare_file_name_logs_to_current_directory() {
        let (directory, file_name) = log_location(Path::new("bytechart.log")).unwrap();
        assert_eq!(directory, Path::new("."));
        assert_eq!(file_name, "bytechart.log");
    }

    #[test]
    fn nested_path_splits_into_directory_and_file() {
        let (directory, file_name) = log_location(Path::new("/var/log/app/run.log")).unwrap();
        assert_eq!(directory, Path::new("/var/log/app"));
        assert_eq!(file_name, "run.log");
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("bytechart_test_logs_create");
        let log_file = test_dir.join("test.log");

        let _ = fs::remove_dir_all(&test_dir);

        // The directory is created before the subscriber is installed
        let _ = init(&log_file);

        assert!(
            test_dir.exists(),
            "Log directory should be created: {:?}",
            test_dir
        );

        // Cleanup
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_succeeds_when_directory_already_exists() {
        let test_dir = std::env::temp_dir().join("bytechart_test_logs_exists");
        let log_file = test_dir.join("test.log");

        let _ = fs::create_dir_all(&test_dir);

        let result = init(&log_file);

        assert!(
            matches!(result, Ok(()) | Err(LoggingError::SubscriberAlreadySet)),
            "Only a pre-existing subscriber may fail init, got: {:?}",
            result
        );

        // Cleanup
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn init_rejects_path_without_file_name() {
        let result = init(Path::new("/"));
        assert!(
            matches!(result, Err(LoggingError::InvalidPath(_))),
            "got: {:?}",
            result
        );
    }
}
