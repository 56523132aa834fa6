//! Question list controller.
//!
//! Owns the view state for the question list and exposes one method per
//! intent. Every derived value the renderer needs comes from
//! [`QuestionListController::view_model`].

use crate::model::{Column, ColumnVisibility, QuestionId, QuestionRecord};
use crate::state::column_menu::ColumnMenuState;
use crate::state::expand::{ExpandState, DEFAULT_TRUNCATE_AT};
use crate::state::pagination::{PageSize, Pagination};
use crate::state::search::filtered_indices;
use crate::state::selection::Selection;
use crate::state::view_model::{RowView, ViewModel};
use tracing::debug;

/// Construction-time options for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Rows revealed per Load More step.
    pub page_size: PageSize,
    /// Character budget for collapsed question text. Must be non-zero.
    pub truncate_at: usize,
    /// Start in full view.
    pub full_view: bool,
    /// Initial column visibility.
    pub columns: ColumnVisibility,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            truncate_at: DEFAULT_TRUNCATE_AT,
            full_view: false,
            columns: ColumnVisibility::default(),
        }
    }
}

/// View controller over a fixed, ordered record collection.
///
/// # Invariants
/// - `selection` is a subset of the filtered ids.
/// - `filtered` always equals `filtered_indices(records, search_term)`.
/// - An expanded id is always part of the filtered set.
#[derive(Debug, Clone)]
pub struct QuestionListController {
    records: Vec<QuestionRecord>,
    search_term: String,
    /// Cached positions of the records passing the current filter.
    filtered: Vec<usize>,
    selection: Selection,
    pagination: Pagination,
    expand: ExpandState,
    column_menu: ColumnMenuState,
    truncate_at: usize,
}

impl QuestionListController {
    /// Create a controller over a fixed collection.
    ///
    /// Starts with an empty search, nothing selected and the first page shown.
    pub fn new(records: Vec<QuestionRecord>, options: ControllerOptions) -> Self {
        let filtered = filtered_indices(&records, "");
        let expand = if options.full_view {
            ExpandState::AllExpanded
        } else {
            ExpandState::Collapsed
        };
        debug!(
            records = records.len(),
            page_size = options.page_size.get(),
            truncate_at = options.truncate_at,
            "Question list controller created"
        );
        Self {
            records,
            search_term: String::new(),
            filtered,
            selection: Selection::new(),
            pagination: Pagination::new(options.page_size),
            expand,
            column_menu: ColumnMenuState::new(options.columns),
            truncate_at: options.truncate_at.max(1),
        }
    }

    // ===== Accessors =====

    /// Every record, in collection order.
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Checked ids.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Pagination state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Expansion state.
    pub fn expand_state(&self) -> ExpandState {
        self.expand
    }

    /// Column menu state, including visibility.
    pub fn column_menu(&self) -> &ColumnMenuState {
        &self.column_menu
    }

    /// Character budget for collapsed question text.
    pub fn truncate_at(&self) -> usize {
        self.truncate_at
    }

    /// Number of records passing the filter.
    pub fn total_filtered(&self) -> usize {
        self.filtered.len()
    }

    /// Number of rows currently rendered.
    pub fn shown(&self) -> usize {
        self.pagination.shown(self.total_filtered())
    }

    /// Records passing the filter, in collection order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &QuestionRecord> + '_ {
        self.filtered.iter().map(|&i| &self.records[i])
    }

    /// Ids passing the filter, in collection order.
    pub fn filtered_ids(&self) -> Vec<QuestionId> {
        self.filtered_records().map(QuestionRecord::id).collect()
    }

    /// Id of the n-th rendered row.
    pub fn visible_id(&self, row: usize) -> Option<QuestionId> {
        if row >= self.shown() {
            return None;
        }
        self.filtered.get(row).map(|&i| self.records[i].id())
    }

    // ===== Search =====

    /// Replace the search term.
    ///
    /// On an actual change this recomputes the filter, drops stale
    /// selections, clears an expansion that left the filter and resets
    /// pagination to the first page.
    pub fn set_search_term(&mut self, term: &str) {
        if term == self.search_term {
            return;
        }
        self.search_term = term.to_string();
        self.filtered = filtered_indices(&self.records, &self.search_term);

        let ids = self.filtered_ids();
        self.selection.reconcile(&ids);
        if let Some(expanded) = self.expand.expanded_id() {
            if !ids.contains(&expanded) {
                self.expand = ExpandState::Collapsed;
            }
        }
        self.pagination.reset();

        debug!(
            term = %self.search_term,
            matches = self.filtered.len(),
            selected = self.selection.len(),
            "Search term changed"
        );
    }

    // ===== Selection =====

    /// Flip selection of `id`. Ignored for filtered-out ids.
    pub fn toggle_one(&mut self, id: QuestionId) {
        let ids = self.filtered_ids();
        self.selection.toggle_one(id, &ids);
        debug!(id = %id, selected = self.selection.is_selected(id), "Toggled row selection");
    }

    /// Select every filtered row, or clear when all are already selected.
    pub fn toggle_all(&mut self) {
        let ids = self.filtered_ids();
        self.selection.toggle_all(&ids);
        debug!(selected = self.selection.len(), "Toggled select-all");
    }

    /// Header checkbox state: non-empty filter, fully selected.
    pub fn all_selected(&self) -> bool {
        self.selection.all_selected(&self.filtered_ids())
    }

    // ===== Pagination =====

    /// Reveal the next page, capped at the filtered total.
    pub fn load_more(&mut self) {
        self.pagination.load_more(self.total_filtered());
        debug!(visible = self.pagination.visible_count(), "Load more");
    }

    /// Hide the last page, never below one page.
    pub fn show_less(&mut self) {
        self.pagination.show_less();
        debug!(visible = self.pagination.visible_count(), "Show less");
    }

    /// Whether filtered rows remain hidden.
    pub fn can_load_more(&self) -> bool {
        self.pagination.can_load_more(self.total_filtered())
    }

    /// Whether Show Less is offered instead of Load More.
    pub fn can_show_less(&self) -> bool {
        self.pagination.can_show_less(self.total_filtered())
    }

    // ===== Expand / full view =====

    /// Switch between full view and collapsed, clearing any single expansion.
    pub fn toggle_full_view(&mut self) {
        self.expand = self.expand.toggle_full_view();
        debug!(full_view = self.expand.is_full_view(), "Toggled full view");
    }

    /// Toggle the single expansion of `id`. Ignored for filtered-out ids.
    pub fn expand(&mut self, id: QuestionId) {
        if !self.filtered_records().any(|r| r.id() == id) {
            debug!(id = %id, "Ignoring expand for filtered-out id");
            return;
        }
        self.expand = self.expand.expand(id);
        debug!(id = %id, state = ?self.expand, "Toggled row expansion");
    }

    /// Whether every row shows its answer.
    pub fn is_full_view(&self) -> bool {
        self.expand.is_full_view()
    }

    // ===== Column menu =====

    /// Flip one column. Takes effect immediately.
    pub fn toggle_column(&mut self, column: Column) {
        self.column_menu.toggle(column);
    }

    /// Toggle a column by key. Returns false for unknown keys.
    pub fn toggle_column_key(&mut self, key: &str) -> bool {
        self.column_menu.toggle_key(key)
    }

    /// Open the column menu, or close it if open.
    pub fn toggle_view_menu(&mut self) {
        self.column_menu.toggle_open();
    }

    /// Open the column menu.
    pub fn open_view_menu(&mut self) {
        self.column_menu.open();
    }

    /// Close the column menu.
    pub fn close_view_menu(&mut self) {
        self.column_menu.close();
    }

    /// Apply button: dismisses the menu. Toggles are already live.
    pub fn apply_view_menu(&mut self) {
        self.column_menu.apply();
    }

    /// A pointer interaction outside the open menu closes it.
    pub fn pointer_outside_menu(&mut self) {
        self.column_menu.pointer_outside();
    }

    /// Move the menu cursor up.
    pub fn view_menu_prev(&mut self) {
        self.column_menu.select_prev();
    }

    /// Move the menu cursor down.
    pub fn view_menu_next(&mut self) {
        self.column_menu.select_next();
    }

    /// Flip the column under the menu cursor.
    pub fn view_menu_toggle_highlighted(&mut self) {
        self.column_menu.toggle_highlighted();
    }

    // ===== Rendering boundary =====

    /// Everything a renderer needs, derived from the current state.
    pub fn view_model(&self) -> ViewModel<'_> {
        let total = self.total_filtered();
        let shown = self.shown();
        let visible_rows = self
            .filtered_records()
            .take(shown)
            .map(|record| {
                let id = record.id();
                RowView::new(
                    record,
                    self.selection.is_selected(id),
                    self.expand.is_answer_visible(id),
                    self.truncate_at,
                )
            })
            .collect();

        ViewModel {
            visible_rows,
            all_selected: self.all_selected(),
            can_load_more: self.can_load_more(),
            can_show_less: self.can_show_less(),
            column_visibility: self.column_menu.visibility(),
            full_view: self.expand.is_full_view(),
            shown,
            total,
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
