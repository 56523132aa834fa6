//! Derived, read-only state handed to the renderer.

use crate::model::{ColumnVisibility, QuestionRecord};
use crate::state::expand::display_question;
use std::borrow::Cow;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    /// The underlying record.
    pub record: &'a QuestionRecord,
    /// Whether the row is checked.
    pub is_selected: bool,
    /// Whether the answer is shown under the question.
    pub is_expanded: bool,
    /// Question text after truncation for collapsed rows.
    pub question_text: Cow<'a, str>,
}

impl<'a> RowView<'a> {
    /// Derive a row, truncating the question unless expanded.
    pub fn new(
        record: &'a QuestionRecord,
        is_selected: bool,
        is_expanded: bool,
        truncate_at: usize,
    ) -> Self {
        Self {
            record,
            is_selected,
            is_expanded,
            question_text: display_question(record.question(), truncate_at, is_expanded),
        }
    }
}

/// Snapshot of the list state. Never mutated; rebuilt per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel<'a> {
    /// The first `shown` filtered rows, in collection order.
    pub visible_rows: Vec<RowView<'a>>,
    /// Header checkbox state.
    pub all_selected: bool,
    /// Whether Load More is offered.
    pub can_load_more: bool,
    /// Whether Show Less is offered.
    pub can_show_less: bool,
    /// Columns to draw.
    pub column_visibility: ColumnVisibility,
    /// Whether every row shows its answer.
    pub full_view: bool,
    /// `min(visible_count, total)`.
    pub shown: usize,
    /// Number of records passing the filter.
    pub total: usize,
}

impl ViewModel<'_> {
    /// Footer counter text.
    pub fn footer_text(&self) -> String {
        format!("Showing {} out of {} Tests", self.shown, self.total)
    }
}
