//! Keyboard actions on the question list.
//!
//! Pure function mapping a [`KeyAction`] onto controller intents for the
//! row under the cursor.

use crate::model::KeyAction;
use crate::state::AppState;

/// Apply a list action. Actions that are not list actions are ignored.
pub fn handle_list_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::NextRow => state.next_row(),
        KeyAction::PrevRow => state.prev_row(),
        KeyAction::ToggleSelect => {
            if let Some(id) = state.cursor_id() {
                state.controller_mut().toggle_one(id);
            }
        }
        KeyAction::ToggleSelectAll => state.controller_mut().toggle_all(),
        KeyAction::ToggleExpand => {
            if let Some(id) = state.cursor_id() {
                state.controller_mut().expand(id);
            }
        }
        KeyAction::ToggleFullView => state.controller_mut().toggle_full_view(),
        KeyAction::LoadMore => {
            state.controller_mut().load_more();
            state.clamp_row_cursor();
        }
        KeyAction::ShowLess => {
            state.controller_mut().show_less();
            state.clamp_row_cursor();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionId, TestInfo};
    use crate::source::sample_questions;
    use crate::state::controller::{ControllerOptions, QuestionListController};
    use crate::state::ExpandState;

    fn state() -> AppState {
        let controller =
            QuestionListController::new(sample_questions(), ControllerOptions::default());
        AppState::new(controller, TestInfo::default())
    }

    fn id(n: u32) -> QuestionId {
        QuestionId::new(n).unwrap()
    }

    #[test]
    fn toggle_select_uses_cursor_row() {
        let mut s = state();
        handle_list_action(&mut s, KeyAction::NextRow);
        handle_list_action(&mut s, KeyAction::NextRow);

        handle_list_action(&mut s, KeyAction::ToggleSelect);

        assert!(s.controller().selection().is_selected(id(3)));
    }

    #[test]
    fn toggle_expand_uses_cursor_row() {
        let mut s = state();
        handle_list_action(&mut s, KeyAction::NextRow);

        handle_list_action(&mut s, KeyAction::ToggleExpand);

        assert_eq!(s.controller().expand_state(), ExpandState::OneExpanded(id(2)));
    }

    #[test]
    fn toggle_select_on_empty_list_is_noop() {
        let mut s = state();
        s.set_search("xyzzy");

        handle_list_action(&mut s, KeyAction::ToggleSelect);
        handle_list_action(&mut s, KeyAction::ToggleExpand);

        assert!(s.controller().selection().is_empty());
        assert_eq!(s.controller().expand_state(), ExpandState::Collapsed);
    }

    #[test]
    fn load_more_lets_cursor_reach_second_page() {
        let mut s = state();
        handle_list_action(&mut s, KeyAction::LoadMore);

        for _ in 0..15 {
            handle_list_action(&mut s, KeyAction::NextRow);
        }

        assert_eq!(s.row_cursor(), 15);
    }

    #[test]
    fn show_less_clamps_cursor() {
        let mut s = state();
        handle_list_action(&mut s, KeyAction::LoadMore);
        s.set_row_cursor(19);

        handle_list_action(&mut s, KeyAction::ShowLess);

        assert_eq!(s.row_cursor(), 9);
    }

    #[test]
    fn full_view_and_select_all() {
        let mut s = state();

        handle_list_action(&mut s, KeyAction::ToggleFullView);
        handle_list_action(&mut s, KeyAction::ToggleSelectAll);

        assert!(s.controller().is_full_view());
        assert_eq!(s.controller().selection().len(), 20);
    }

    #[test]
    fn non_list_action_is_ignored() {
        let mut s = state();

        handle_list_action(&mut s, KeyAction::Quit);

        assert_eq!(s.row_cursor(), 0);
        assert!(s.controller().selection().is_empty());
    }
}
