//! Keyboard actions on the sidebar.

use crate::model::KeyAction;
use crate::state::navigation::{section_fragment, Navigator};
use crate::state::{AppState, SidebarEntry};
use tracing::debug;

/// Apply a sidebar action.
///
/// `j/k` move the cursor; `Enter` or `Space` activate the entry under it.
pub fn handle_sidebar_action(
    state: &mut AppState,
    action: KeyAction,
    navigator: &mut dyn Navigator,
) {
    match action {
        KeyAction::NextRow => state.sidebar_next(),
        KeyAction::PrevRow => state.sidebar_prev(),
        KeyAction::ToggleExpand | KeyAction::ToggleSelect => {
            let index = state.sidebar_cursor();
            activate_sidebar_entry(state, index, navigator);
        }
        _ => {}
    }
}

/// Activate the sidebar entry at `index`.
///
/// Sections navigate to their fragment. `ADD QUESTION` only logs.
pub fn activate_sidebar_entry(
    state: &mut AppState,
    index: usize,
    navigator: &mut dyn Navigator,
) {
    state.set_sidebar_cursor(index);
    match state.sidebar_entry(index) {
        Some(SidebarEntry::AddQuestion) => {
            debug!("Add question requested; question editing is not available");
        }
        Some(SidebarEntry::Section(section)) => {
            if let Some(entry) = state.test_info().sections.get(section) {
                navigator.navigate(&section_fragment(entry.label()));
            }
        }
        None => {}
    }
}
