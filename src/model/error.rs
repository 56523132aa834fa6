//! Error types for qlv.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose cleanly via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all shell failures
//!   - [`InputError`] - Question file loading failures (missing file, bad format, bad data)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing initialization failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! The question-list controller itself has no error domain: every intent is total, and
//! intents naming an unknown question or column are no-ops. Only the impure shell can
//! fail, and every shell failure is fatal: it is reported on stderr after the terminal
//! has been restored.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Domain-specific error types convert to `AppError` via `From`, enabling clean error
/// propagation with the `?` operator.
///
/// # Examples
///
/// ```no_run
/// use qlv::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     let _records = load_questions()?;
///     Ok(())
/// }
/// # fn load_questions() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load the question collection.
    ///
    /// **Recovery**: Display error to user and exit. The UI cannot start without data.
    #[error("Failed to load questions: {0}")]
    Input(#[from] InputError),

    /// Configuration file exists but is unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt graceful terminal cleanup, then exit. The error message is
    /// written to stderr after the alternate screen has been left.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading the question collection from a file.
///
/// Each variant carries the offending path so the message is actionable without
/// consulting the log file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The questions file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use qlv::model::error::InputError;
    ///
    /// let err = InputError::NotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("Questions file not found: {path}")]
    NotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("Failed to read questions file {path}: {source}")]
    Read {
        /// The path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON/TOML or does not match the record schema.
    ///
    /// `message` is the deserializer's error text, which includes line/column details.
    #[error("Invalid questions file {path}: {message}")]
    Parse {
        /// The file being parsed.
        path: PathBuf,
        /// Deserializer error text.
        message: String,
    },

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported questions file format (expected .json or .toml): {path}")]
    UnsupportedFormat {
        /// The rejected path.
        path: PathBuf,
    },

    /// Two records share the same id.
    ///
    /// Ids must be unique because selection and expansion are keyed by id.
    ///
    /// ```
    /// use qlv::model::error::InputError;
    ///
    /// let err = InputError::DuplicateId { id: 4 };
    /// assert_eq!(err.to_string(), "Duplicate question id: 4");
    /// ```
    #[error("Duplicate question id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: u32,
    },
}
