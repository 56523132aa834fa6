//! File-based question source.
//!
//! Reads a question collection from a `.json` file (top-level array of
//! records) or a `.toml` file (`[[questions]]` tables).

use crate::model::error::InputError;
use crate::model::QuestionRecord;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supported file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.json`: a top-level array of records.
    Json,
    /// `.toml`: `[[questions]]` tables.
    Toml,
}

impl FileFormat {
    /// Detect the format from the file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `InputError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            _ => Err(InputError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// TOML document shape: `[[questions]]` tables.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlQuestions {
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

/// A questions file on disk. Read once, at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source for `path`. Nothing is read until [`FileSource::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the questions file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse and validate the file.
    ///
    /// # Errors
    ///
    /// - `InputError::NotFound` if the file does not exist
    /// - `InputError::UnsupportedFormat` for unknown extensions
    /// - `InputError::Read` for I/O failures
    /// - `InputError::Parse` for malformed content (including a zero id)
    /// - `InputError::DuplicateId` if two records share an id
    pub fn load(&self) -> Result<Vec<QuestionRecord>, InputError> {
        if !self.path.exists() {
            return Err(InputError::NotFound {
                path: self.path.clone(),
            });
        }
        let format = FileFormat::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path).map_err(|source| InputError::Read {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = content.len(), "Read questions file");

        let records = parse_questions(&content, format, &self.path)?;
        info!(path = %self.path.display(), count = records.len(), "Loaded questions");
        Ok(records)
    }
}

/// Parse and validate file content.
///
/// `path` is only used for error messages.
pub fn parse_questions(
    content: &str,
    format: FileFormat,
    path: &Path,
) -> Result<Vec<QuestionRecord>, InputError> {
    let parse_error = |message: String| InputError::Parse {
        path: path.to_path_buf(),
        message,
    };
    let records: Vec<QuestionRecord> = match format {
        FileFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        FileFormat::Toml => {
            toml::from_str::<TomlQuestions>(content)
                .map_err(|e| parse_error(e.to_string()))?
                .questions
        }
    };
    validate_unique_ids(&records)?;
    Ok(records)
}

/// Reject collections in which two records share an id.
pub fn validate_unique_ids(records: &[QuestionRecord]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(InputError::DuplicateId {
                id: record.id().get(),
            });
        }
    }
    Ok(())
}
