//! Question records (immutable domain data).

use crate::model::QuestionId;
use serde::Deserialize;
use std::fmt;

// ===== QuestionType =====

/// Enumerated question type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// Pick one of several options.
    MultipleChoice,
    /// True or false.
    TrueFalse,
    /// A word or short phrase.
    ShortAnswer,
    /// Free-form prose.
    LongAnswer,
    /// A number.
    Numeric,
}

impl QuestionType {
    /// Short human-readable label used by the Type column.
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "MCQ",
            QuestionType::TrueFalse => "True/False",
            QuestionType::ShortAnswer => "Short",
            QuestionType::LongAnswer => "Long",
            QuestionType::Numeric => "Numeric",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== QuestionRecord =====

/// A single quiz/test question.
///
/// Records are immutable once loaded; the collection is fixed for the
/// lifetime of the application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    id: QuestionId,
    question: String,
    answer: String,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<QuestionType>,
    #[serde(default)]
    marks: Option<u32>,
}

impl QuestionRecord {
    /// Create a record with only the required fields.
    pub fn new(id: QuestionId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            owner: None,
            kind: None,
            marks: None,
        }
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the question type.
    pub fn with_type(mut self, kind: QuestionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the marks.
    pub fn with_marks(mut self, marks: u32) -> Self {
        self.marks = Some(marks);
        self
    }

    /// Unique id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Full question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Owner, if recorded.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Question type, if recorded.
    pub fn kind(&self) -> Option<QuestionType> {
        self.kind
    }

    /// Marks, if recorded.
    pub fn marks(&self) -> Option<u32> {
        self.marks
    }

    /// Case-insensitive substring match against question and answer text.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.question.to_lowercase().contains(needle_lower)
            || self.answer.to_lowercase().contains(needle_lower)
    }
}
