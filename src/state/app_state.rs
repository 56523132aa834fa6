//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. The question
//! list itself is owned by [`QuestionListController`]; AppState adds the
//! terminal-only concerns around it (focus, row cursor, sidebar, overlays).

use crate::model::{QuestionId, TestInfo};
use crate::state::controller::QuestionListController;
use crate::state::search::SearchInput;
use tracing::debug;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Focus**: List ⇄ Sidebar via `cycle_focus` (Sidebar only while open);
///   Search is entered with `start_search` and left with `finish_search`.
/// - **Overlays**: help, the header navigation menu and the view menu are
///   independent toggles. The view menu lives in the controller.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The list controller. All list semantics live here.
    controller: QuestionListController,

    /// Static test metadata rendered in the sidebar.
    test_info: TestInfo,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Search box contents. Mirrors the controller's search term.
    search_input: SearchInput,

    /// Highlighted row among the rendered rows.
    /// Valid range: `0..controller.shown()` (0 when nothing is shown).
    row_cursor: usize,

    /// Whether the sidebar is expanded.
    pub sidebar_open: bool,

    /// Highlighted sidebar entry. Valid range: `0..sidebar_entry_count()`.
    sidebar_cursor: usize,

    /// Whether the collapsed header navigation is dropped down.
    pub nav_menu_open: bool,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// Fresh UI state: list focused, sidebar open, no overlays.
    pub fn new(controller: QuestionListController, test_info: TestInfo) -> Self {
        Self {
            controller,
            test_info,
            focus: FocusPane::List,
            search_input: SearchInput::default(),
            row_cursor: 0,
            sidebar_open: true,
            sidebar_cursor: 0,
            nav_menu_open: false,
            help_visible: false,
        }
    }

    /// The list controller.
    pub fn controller(&self) -> &QuestionListController {
        &self.controller
    }

    /// Mutable controller access. Callers must follow up with
    /// [`AppState::clamp_row_cursor`] if the visible rows may have changed.
    pub fn controller_mut(&mut self) -> &mut QuestionListController {
        &mut self.controller
    }

    /// Static header and sidebar content.
    pub fn test_info(&self) -> &TestInfo {
        &self.test_info
    }

    /// Search box contents and cursor.
    pub fn search_input(&self) -> &SearchInput {
        &self.search_input
    }

    // ===== Row cursor =====

    /// Index of the cursor among the visible rows.
    pub fn row_cursor(&self) -> usize {
        self.row_cursor
    }

    /// Id of the row under the cursor, if any row is shown.
    pub fn cursor_id(&self) -> Option<QuestionId> {
        self.controller.visible_id(self.row_cursor)
    }

    /// Move the cursor, clamped to the visible rows.
    pub fn set_row_cursor(&mut self, row: usize) {
        self.row_cursor = row;
        self.clamp_row_cursor();
    }

    /// Move the cursor down one row.
    pub fn next_row(&mut self) {
        self.set_row_cursor(self.row_cursor.saturating_add(1));
    }

    /// Move the cursor up one row.
    pub fn prev_row(&mut self) {
        self.set_row_cursor(self.row_cursor.saturating_sub(1));
    }

    /// Pull the cursor back into the rendered range.
    pub fn clamp_row_cursor(&mut self) {
        let last = self.controller.shown().saturating_sub(1);
        self.row_cursor = self.row_cursor.min(last);
    }

    // ===== Search =====

    /// Focus the search box. The existing term is kept for editing.
    pub fn start_search(&mut self) {
        self.focus = FocusPane::Search;
        debug!("Search box focused");
    }

    /// Leave the search box; the term stays applied.
    pub fn finish_search(&mut self) {
        if self.focus == FocusPane::Search {
            self.focus = FocusPane::List;
            debug!(term = %self.search_input.query, "Search box left");
        }
    }

    /// Apply an edit to the search box and filter live.
    pub fn edit_search(&mut self, edit: impl FnOnce(SearchInput) -> SearchInput) {
        let input = std::mem::take(&mut self.search_input);
        self.search_input = edit(input);
        self.controller.set_search_term(&self.search_input.query);
        self.clamp_row_cursor();
    }

    /// Replace the search term outright (used for `--search`).
    pub fn set_search(&mut self, term: &str) {
        self.edit_search(|_| SearchInput::with_query(term));
    }

    // ===== Focus =====

    /// List -> Sidebar -> List. Skips the sidebar while it is closed.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::List if self.sidebar_open => FocusPane::Sidebar,
            FocusPane::List => FocusPane::List,
            FocusPane::Sidebar | FocusPane::Search => FocusPane::List,
        };
        debug!(focus = ?self.focus, "Focus cycled");
    }

    // ===== Sidebar =====

    /// Show or hide the sidebar. Hiding it returns focus to the list.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        if !self.sidebar_open && self.focus == FocusPane::Sidebar {
            self.focus = FocusPane::List;
        }
        debug!(open = self.sidebar_open, "Sidebar toggled");
    }

    /// Index of the highlighted sidebar entry.
    pub fn sidebar_cursor(&self) -> usize {
        self.sidebar_cursor
    }

    /// `ADD QUESTION` plus one entry per section.
    pub fn sidebar_entry_count(&self) -> usize {
        1 + self.test_info.sections.len()
    }

    /// The actionable sidebar entry at `index`.
    pub fn sidebar_entry(&self, index: usize) -> Option<SidebarEntry> {
        match index {
            0 => Some(SidebarEntry::AddQuestion),
            i if i < self.sidebar_entry_count() => Some(SidebarEntry::Section(i - 1)),
            _ => None,
        }
    }

    /// Highlight the next sidebar entry.
    pub fn sidebar_next(&mut self) {
        let last = self.sidebar_entry_count().saturating_sub(1);
        self.sidebar_cursor = (self.sidebar_cursor + 1).min(last);
    }

    /// Highlight the previous sidebar entry.
    pub fn sidebar_prev(&mut self) {
        self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
    }

    /// Highlight `index`, clamped to the entries.
    pub fn set_sidebar_cursor(&mut self, index: usize) {
        let last = self.sidebar_entry_count().saturating_sub(1);
        self.sidebar_cursor = index.min(last);
    }

    // ===== Overlays =====

    /// Open or close the collapsed navigation menu.
    pub fn toggle_nav_menu(&mut self) {
        self.nav_menu_open = !self.nav_menu_open;
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Close the innermost open layer. Returns false when nothing was open.
    pub fn cancel(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
        } else if self.controller.column_menu().is_open() {
            self.controller.close_view_menu();
        } else if self.nav_menu_open {
            self.nav_menu_open = false;
        } else if self.focus != FocusPane::List {
            self.focus = FocusPane::List;
        } else {
            return false;
        }
        true
    }
}

// ===== FocusPane =====

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The question list.
    #[default]
    List,
    /// The search box; printable keys edit the term.
    Search,
    /// The sidebar entries.
    Sidebar,
}

// ===== SidebarEntry =====

/// An actionable sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    /// `ADD QUESTION` button. Inert.
    AddQuestion,
    /// Index into `TestInfo::sections`.
    Section(usize),
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
