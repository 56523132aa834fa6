//! Search term state and the filter engine.
//!
//! Filtering is a pure function of the record collection and the search term:
//! case-insensitive substring matching against question and answer text,
//! preserving collection order.

use crate::model::{QuestionId, QuestionRecord};

// ===== Filter Engine =====

/// Return every record whose question or answer contains `term`,
/// case-insensitively, in original collection order.
///
/// An empty term matches all records. Idempotent: filtering the result
/// again with the same term yields the same records.
pub fn filtered<'a>(records: &'a [QuestionRecord], term: &str) -> Vec<&'a QuestionRecord> {
    let term_lower = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.matches_lowercase(&term_lower))
        .collect()
}

/// Positions (into `records`) of the records passing the filter.
///
/// Used by the controller to cache the filtered set without borrowing.
pub fn filtered_indices(records: &[QuestionRecord], term: &str) -> Vec<usize> {
    let term_lower = term.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.matches_lowercase(&term_lower))
        .map(|(i, _)| i)
        .collect()
}

/// Ids of the records passing the filter, in collection order.
pub fn filtered_ids(records: &[QuestionRecord], term: &str) -> Vec<QuestionId> {
    filtered(records, term).into_iter().map(|r| r.id()).collect()
}

// ===== SearchInput =====

/// Text box state for the search term.
///
/// `cursor` is a character index (not a byte index) in `0..=query.chars().count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// Current text.
    pub query: String,
    /// Cursor position in chars, `0..=query.chars().count()`.
    pub cursor: usize,
}

impl SearchInput {
    /// Input pre-filled with `query`, cursor at the end.
    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        let cursor = query.chars().count();
        Self { query, cursor }
    }

    /// True when no text has been typed.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Number of characters in the query.
    pub fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Byte offset of the character at `char_index` (or the end of the string).
    pub(crate) fn byte_offset(&self, char_index: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.query.len())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
