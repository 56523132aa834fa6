//! Tests for mouse event handling.

use super::*;
use crate::model::TestInfo;
use crate::source::sample_questions;
use crate::state::controller::{ControllerOptions, QuestionListController};
use crate::state::navigation::FragmentLocation;
use crate::state::ExpandState;

// ===== Test Helpers =====

fn id(n: u32) -> QuestionId {
    QuestionId::new(n).unwrap()
}

fn state() -> AppState {
    let controller = QuestionListController::new(sample_questions(), ControllerOptions::default());
    AppState::new(controller, TestInfo::default())
}

/// Two rows at y=10 and y=11, 60 columns wide, checkbox in the first 3 cells.
fn list_map() -> HitMap {
    HitMap {
        rows: vec![
            RowHit {
                row: 0,
                id: id(1),
                area: Rect::new(20, 10, 60, 1),
                checkbox: Rect::new(20, 10, 3, 1),
            },
            RowHit {
                row: 1,
                id: id(2),
                area: Rect::new(20, 11, 60, 1),
                checkbox: Rect::new(20, 11, 3, 1),
            },
        ],
        header_checkbox: Some(Rect::new(20, 9, 3, 1)),
        view_button: Some(Rect::new(70, 5, 8, 1)),
        sidebar_entries: vec![(Rect::new(0, 8, 18, 1), 2)],
        ..HitMap::default()
    }
}

fn menu_map() -> HitMap {
    HitMap {
        view_menu: Some(Rect::new(60, 6, 20, 9)),
        view_menu_entries: vec![
            (Rect::new(61, 7, 18, 1), Column::Questions),
            (Rect::new(61, 8, 18, 1), Column::Owner),
        ],
        view_menu_apply: Some(Rect::new(61, 13, 18, 1)),
        ..list_map()
    }
}

// ===== detect_click =====

#[test]
fn click_on_checkbox_cell() {
    let target = detect_click(&list_map(), 21, 11);

    assert_eq!(target, ClickTarget::RowCheckbox { row: 1, id: id(2) });
}

#[test]
fn click_on_row_body() {
    let target = detect_click(&list_map(), 40, 10);

    assert_eq!(target, ClickTarget::Row { row: 0, id: id(1) });
}

#[test]
fn click_past_row_edge_is_nothing() {
    assert_eq!(detect_click(&list_map(), 80, 10), ClickTarget::Nothing);
}

#[test]
fn click_on_sidebar_entry() {
    assert_eq!(detect_click(&list_map(), 5, 8), ClickTarget::SidebarEntry(2));
}

#[test]
fn open_menu_captures_all_clicks() {
    let map = menu_map();

    assert_eq!(detect_click(&map, 62, 8), ClickTarget::MenuEntry(Column::Owner));
    assert_eq!(detect_click(&map, 62, 13), ClickTarget::MenuApply);
    assert_eq!(detect_click(&map, 62, 11), ClickTarget::MenuBody);
    assert_eq!(detect_click(&map, 40, 10), ClickTarget::OutsideMenu);
}

// ===== handle_click =====

#[test]
fn row_click_expands_and_moves_cursor() {
    let mut s = state();
    let mut location = FragmentLocation::new();

    handle_click(&mut s, ClickTarget::Row { row: 1, id: id(2) }, &mut location);

    assert_eq!(s.row_cursor(), 1);
    assert_eq!(s.controller().expand_state(), ExpandState::OneExpanded(id(2)));
}

#[test]
fn row_click_in_full_view_is_noop() {
    let mut s = state();
    s.controller_mut().toggle_full_view();
    let mut location = FragmentLocation::new();

    handle_click(&mut s, ClickTarget::Row { row: 0, id: id(1) }, &mut location);

    assert_eq!(s.controller().expand_state(), ExpandState::AllExpanded);
}

#[test]
fn checkbox_click_selects_without_expanding() {
    let mut s = state();
    let mut location = FragmentLocation::new();

    handle_click(&mut s, ClickTarget::RowCheckbox { row: 0, id: id(1) }, &mut location);

    assert!(s.controller().selection().is_selected(id(1)));
    assert_eq!(s.controller().expand_state(), ExpandState::Collapsed);
}

#[test]
fn outside_click_closes_menu() {
    let mut s = state();
    s.controller_mut().open_view_menu();
    let mut location = FragmentLocation::new();

    let target = detect_click(&menu_map(), 40, 10);
    handle_click(&mut s, target, &mut location);

    assert!(!s.controller().column_menu().is_open());
    assert_eq!(
        s.controller().expand_state(),
        ExpandState::Collapsed,
        "Outside click must not reach the row underneath"
    );
}

#[test]
fn menu_entry_click_toggles_column() {
    let mut s = state();
    s.controller_mut().open_view_menu();
    let mut location = FragmentLocation::new();

    handle_click(&mut s, ClickTarget::MenuEntry(Column::Owner), &mut location);

    assert!(s.controller().column_menu().visibility().owner);
    assert!(s.controller().column_menu().is_open());
}

#[test]
fn pager_click_loads_then_shows_less() {
    let mut s = state();
    let mut location = FragmentLocation::new();

    handle_click(&mut s, ClickTarget::PagerButton, &mut location);
    assert_eq!(s.controller().shown(), 20);

    handle_click(&mut s, ClickTarget::PagerButton, &mut location);
    assert_eq!(s.controller().shown(), 10);
}

#[test]
fn sidebar_entry_click_navigates() {
    let mut s = state();
    let mut location = FragmentLocation::new();

    handle_click(&mut s, ClickTarget::SidebarEntry(3), &mut location);

    assert_eq!(location.current(), Some("section-2"));
    assert_eq!(s.focus, FocusPane::Sidebar);
}

#[test]
fn search_box_click_focuses_search() {
    let mut s = state();
    let mut location = FragmentLocation::new();

    handle_click(&mut s, ClickTarget::SearchBox, &mut location);

    assert_eq!(s.focus, FocusPane::Search);
}
