//! Domain model types (pure).
//!
//! All types in this module are plain data; parsing and I/O live elsewhere.

pub mod error;
pub mod record;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use record::{LogRecord, ParsedLog};
