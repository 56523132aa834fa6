//! Expand / full-view state machine.
//!
//! ExpandState is a sum type over the three display modes:
//! - Collapsed: no answer shown
//! - OneExpanded: exactly one row shows its answer
//! - AllExpanded: full view, every row shows its answer

use crate::model::QuestionId;
use std::borrow::Cow;

/// Default character budget for collapsed question text.
pub const DEFAULT_TRUNCATE_AT: usize = 50;

/// Suffix appended to truncated question text.
pub const ELLIPSIS: &str = "...";

/// Answer visibility state.
/// Sum type enforces at most one single expansion, and none in full view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpandState {
    /// No answers shown.
    #[default]
    Collapsed,
    /// Only this row shows its answer.
    OneExpanded(QuestionId),
    /// Full view: every row shows its answer.
    AllExpanded,
}

impl ExpandState {
    /// `AllExpanded <-> Collapsed`. Any single expansion is dropped.
    pub fn toggle_full_view(self) -> Self {
        match self {
            ExpandState::AllExpanded => ExpandState::Collapsed,
            ExpandState::Collapsed | ExpandState::OneExpanded(_) => ExpandState::AllExpanded,
        }
    }

    /// Toggle the single expansion of `id`.
    ///
    /// Expanding a different row replaces the current one. No-op in full view.
    pub fn expand(self, id: QuestionId) -> Self {
        match self {
            ExpandState::AllExpanded => ExpandState::AllExpanded,
            ExpandState::OneExpanded(current) if current == id => ExpandState::Collapsed,
            ExpandState::Collapsed | ExpandState::OneExpanded(_) => ExpandState::OneExpanded(id),
        }
    }

    /// Whether this is full view.
    pub fn is_full_view(self) -> bool {
        matches!(self, ExpandState::AllExpanded)
    }

    /// The single expanded id, if any. Always None in full view.
    pub fn expanded_id(self) -> Option<QuestionId> {
        match self {
            ExpandState::OneExpanded(id) => Some(id),
            _ => None,
        }
    }

    /// Whether the row with `id` shows its answer.
    pub fn is_answer_visible(self, id: QuestionId) -> bool {
        match self {
            ExpandState::AllExpanded => true,
            ExpandState::OneExpanded(current) => current == id,
            ExpandState::Collapsed => false,
        }
    }
}

/// Question text as displayed in a row.
///
/// Collapsed rows show at most `budget` characters followed by `...`;
/// expanded rows show the full text. Counts chars, so multibyte text is
/// never split inside a character.
pub fn display_question(text: &str, budget: usize, expanded: bool) -> Cow<'_, str> {
    if expanded {
        return Cow::Borrowed(text);
    }
    match text.char_indices().nth(budget) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}
