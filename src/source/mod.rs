//! Question sources.
//!
//! The question collection is supplied once at startup:
//! - the built-in 20-record sample set
//! - a `.json` / `.toml` questions file

use crate::model::error::InputError;
use crate::model::QuestionRecord;
use std::path::PathBuf;

pub mod file;
pub mod sample;

pub use file::{FileFormat, FileSource};
pub use sample::sample_questions;

/// Where the question collection comes from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    /// Built-in sample set.
    Builtin,
    /// Questions file chosen by CLI, environment or config.
    File(FileSource),
}

impl QuestionSource {
    /// Load the full, ordered collection.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for file sources that are missing or invalid.
    /// The built-in set never fails.
    pub fn load(&self) -> Result<Vec<QuestionRecord>, InputError> {
        match self {
            QuestionSource::Builtin => Ok(sample_questions()),
            QuestionSource::File(f) => f.load(),
        }
    }

    /// Human-readable description for logs.
    pub fn describe(&self) -> String {
        match self {
            QuestionSource::Builtin => "built-in sample".to_string(),
            QuestionSource::File(f) => f.path().display().to_string(),
        }
    }
}

/// Pick the source: a file when a path is configured, else the sample set.
pub fn detect_question_source(file: Option<PathBuf>) -> QuestionSource {
    match file {
        Some(path) => QuestionSource::File(FileSource::new(path)),
        None => QuestionSource::Builtin,
    }
}
