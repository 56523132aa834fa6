//! Mouse event handler.
//!
//! The renderer records where every clickable element landed in a
//! [`HitMap`]. Clicks are resolved against the map into a [`ClickTarget`],
//! then applied to AppState by [`handle_click`].

use crate::model::{Column, QuestionId};
use crate::state::navigation::Navigator;
use crate::state::sidebar_handler::activate_sidebar_entry;
use crate::state::{AppState, FocusPane};
use ratatui::layout::Rect;
use tracing::debug;

/// Screen regions of one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    /// Position among the rendered rows.
    pub row: usize,
    /// Record drawn on this row.
    pub id: QuestionId,
    /// The whole row, including answer lines when expanded.
    pub area: Rect,
    /// The `[ ]` checkbox cell.
    pub checkbox: Rect,
}

/// Clickable regions from the last rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Rendered rows, top to bottom.
    pub rows: Vec<RowHit>,
    /// Select-all checkbox.
    pub header_checkbox: Option<Rect>,
    /// Search box.
    pub search_box: Option<Rect>,
    /// Full View button.
    pub full_view_button: Option<Rect>,
    /// View button.
    pub view_button: Option<Rect>,
    /// Load More / Show Less control, when one is offered.
    pub pager_button: Option<Rect>,
    /// Header sidebar toggle.
    pub sidebar_toggle: Option<Rect>,
    /// `(area, sidebar entry index)`.
    pub sidebar_entries: Vec<(Rect, usize)>,
    /// The whole view menu popup while open.
    pub view_menu: Option<Rect>,
    /// `(area, column)` for each menu entry.
    pub view_menu_entries: Vec<(Rect, Column)>,
    /// Apply button inside the menu.
    pub view_menu_apply: Option<Rect>,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Checkbox cell of a row.
    RowCheckbox {
        /// Index among the visible rows.
        row: usize,
        /// Record on that row.
        id: QuestionId,
    },
    /// Anywhere else on a row.
    Row {
        /// Index among the visible rows.
        row: usize,
        /// Record on that row.
        id: QuestionId,
    },
    /// Select-all checkbox.
    HeaderCheckbox,
    /// Search box.
    SearchBox,
    /// Full View button.
    FullViewButton,
    /// View button.
    ViewButton,
    /// Load More / Show Less.
    PagerButton,
    /// Header sidebar toggle.
    SidebarToggle,
    /// Sidebar entry by index.
    SidebarEntry(usize),
    /// Column menu entry.
    MenuEntry(Column),
    /// Apply button in the column menu.
    MenuApply,
    /// Inside the open menu but not on an entry.
    MenuBody,
    /// Outside the open menu. Closes it and is otherwise consumed.
    OutsideMenu,
    /// Nothing clickable.
    Nothing,
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}

fn hit(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|a| contains(a, x, y))
}

/// Resolve a click position against the hit map.
///
/// While the view menu is open, every click resolves to a menu target or
/// [`ClickTarget::OutsideMenu`].
pub fn detect_click(map: &HitMap, x: u16, y: u16) -> ClickTarget {
    if let Some(menu) = map.view_menu {
        if !contains(menu, x, y) {
            return ClickTarget::OutsideMenu;
        }
        if let Some((_, column)) = map.view_menu_entries.iter().find(|(a, _)| contains(*a, x, y)) {
            return ClickTarget::MenuEntry(*column);
        }
        if hit(map.view_menu_apply, x, y) {
            return ClickTarget::MenuApply;
        }
        return ClickTarget::MenuBody;
    }

    if let Some(row) = map.rows.iter().find(|r| contains(r.area, x, y)) {
        return if contains(row.checkbox, x, y) {
            ClickTarget::RowCheckbox {
                row: row.row,
                id: row.id,
            }
        } else {
            ClickTarget::Row {
                row: row.row,
                id: row.id,
            }
        };
    }
    if let Some((_, index)) = map.sidebar_entries.iter().find(|(a, _)| contains(*a, x, y)) {
        return ClickTarget::SidebarEntry(*index);
    }

    let buttons = [
        (map.header_checkbox, ClickTarget::HeaderCheckbox),
        (map.search_box, ClickTarget::SearchBox),
        (map.full_view_button, ClickTarget::FullViewButton),
        (map.view_button, ClickTarget::ViewButton),
        (map.pager_button, ClickTarget::PagerButton),
        (map.sidebar_toggle, ClickTarget::SidebarToggle),
    ];
    buttons
        .into_iter()
        .find(|(area, _)| hit(*area, x, y))
        .map(|(_, target)| target)
        .unwrap_or(ClickTarget::Nothing)
}

/// Apply a resolved click to the state.
pub fn handle_click(state: &mut AppState, target: ClickTarget, navigator: &mut dyn Navigator) {
    debug!(?target, "Mouse click");
    if !matches!(target, ClickTarget::SearchBox) {
        state.finish_search();
    }
    match target {
        ClickTarget::RowCheckbox { row, id } => {
            state.set_row_cursor(row);
            state.focus = FocusPane::List;
            state.controller_mut().toggle_one(id);
        }
        ClickTarget::Row { row, id } => {
            state.set_row_cursor(row);
            state.focus = FocusPane::List;
            // Expansion is hidden behind full view, so clicks do nothing there.
            if !state.controller().is_full_view() {
                state.controller_mut().expand(id);
            }
        }
        ClickTarget::HeaderCheckbox => state.controller_mut().toggle_all(),
        ClickTarget::SearchBox => state.start_search(),
        ClickTarget::FullViewButton => state.controller_mut().toggle_full_view(),
        ClickTarget::ViewButton => state.controller_mut().toggle_view_menu(),
        ClickTarget::PagerButton => {
            let controller = state.controller_mut();
            if controller.can_load_more() {
                controller.load_more();
            } else if controller.can_show_less() {
                controller.show_less();
            }
            state.clamp_row_cursor();
        }
        ClickTarget::SidebarToggle => state.toggle_sidebar(),
        ClickTarget::SidebarEntry(index) => {
            state.focus = FocusPane::Sidebar;
            activate_sidebar_entry(state, index, navigator);
        }
        ClickTarget::MenuEntry(column) => state.controller_mut().toggle_column(column),
        ClickTarget::MenuApply => state.controller_mut().apply_view_menu(),
        ClickTarget::MenuBody | ClickTarget::Nothing => {}
        ClickTarget::OutsideMenu => state.controller_mut().pointer_outside_menu(),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
