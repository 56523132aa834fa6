//! Keyboard actions while the view (column visibility) menu is open.

use crate::model::KeyAction;
use crate::state::AppState;

/// Route an action to the open view menu.
///
/// Returns true if the menu consumed the action. Quit and Help are left
/// for the caller.
pub fn handle_view_menu_action(state: &mut AppState, action: KeyAction) -> bool {
    if !state.controller().column_menu().is_open() {
        return false;
    }
    let controller = state.controller_mut();
    match action {
        KeyAction::NextRow => controller.view_menu_next(),
        KeyAction::PrevRow => controller.view_menu_prev(),
        KeyAction::ToggleSelect => controller.view_menu_toggle_highlighted(),
        KeyAction::ToggleExpand => controller.apply_view_menu(),
        KeyAction::Cancel | KeyAction::ToggleViewMenu => controller.close_view_menu(),
        KeyAction::Quit | KeyAction::Help => return false,
        _ => {}
    }
    true
}
