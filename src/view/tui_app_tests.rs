//! Tests for key and mouse routing through the TUI shell.

use super::*;
use crate::model::{Column, QuestionId, TestInfo};
use crate::source::sample_questions;
use crate::state::{ControllerOptions, ExpandState, QuestionListController};
use crossterm::event::KeyModifiers;
use ratatui::backend::TestBackend;

// ===== Helpers =====

fn create_test_app() -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    let controller = QuestionListController::new(sample_questions(), ControllerOptions::default());
    let app_state = AppState::new(controller, TestInfo::default());
    TuiApp::new_for_test(terminal, app_state)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
    app.handle_key_test(key(code))
}

fn type_str(app: &mut TuiApp<TestBackend>, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn click(app: &mut TuiApp<TestBackend>, x: u16, y: u16) {
    app.handle_mouse_test(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    });
}

fn id(n: u32) -> QuestionId {
    QuestionId::new(n).unwrap()
}

fn screen(app: &TuiApp<TestBackend>) -> String {
    buffer_to_string(app.terminal().backend().buffer())
}

// ===== Errors =====

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

// ===== Quit =====

#[test]
fn handle_key_q_returns_true() {
    let mut app = create_test_app();
    assert!(press(&mut app, KeyCode::Char('q')), "'q' should trigger quit");
}

#[test]
fn handle_key_ctrl_c_returns_true() {
    let mut app = create_test_app();
    let quit = app.handle_key_test(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(quit, "Ctrl+C should trigger quit");
}

#[test]
fn unbound_key_is_ignored() {
    let mut app = create_test_app();
    assert!(!press(&mut app, KeyCode::Char('z')));
}

// ===== Search =====

#[test]
fn typing_in_search_filters_live() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "capital");

    let ids = app.app_state().controller().filtered_ids();
    assert_eq!(ids, vec![id(4), id(7), id(13), id(15), id(18)]);
    assert_eq!(app.app_state().search_input().query, "capital");
}

#[test]
fn q_while_searching_is_text_not_quit() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('/'));

    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.app_state().controller().search_term(), "q");
}

#[test]
fn backspace_widens_filter() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "capital of f");
    assert_eq!(app.app_state().controller().total_filtered(), 1);

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);

    assert_eq!(app.app_state().controller().search_term(), "capital of");
    assert_eq!(app.app_state().controller().total_filtered(), 5);
}

#[test]
fn enter_leaves_search_and_keeps_term() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "react");

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.app_state().focus, FocusPane::List);
    assert_eq!(app.app_state().controller().search_term(), "react");
}

#[test]
fn escape_leaves_search_and_keeps_term() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "react");

    press(&mut app, KeyCode::Esc);

    assert_eq!(app.app_state().focus, FocusPane::List);
    assert_eq!(app.app_state().controller().search_term(), "react");
}

#[test]
fn arrows_move_search_cursor() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "ab");
    press(&mut app, KeyCode::Left);
    type_str(&mut app, "x");

    assert_eq!(app.app_state().search_input().query, "axb");
}

// ===== List =====

#[test]
fn space_selects_cursor_row() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));

    assert!(app.app_state().controller().selection().is_selected(id(3)));
}

#[test]
fn a_selects_every_filtered_row() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('a'));

    assert!(app.app_state().controller().all_selected());
    assert_eq!(app.app_state().controller().selection().len(), 20);
}

#[test]
fn enter_expands_cursor_row() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.app_state().controller().expand_state(),
        ExpandState::OneExpanded(id(2))
    );
}

#[test]
fn f_toggles_full_view() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('f'));
    assert!(app.app_state().controller().is_full_view());

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.app_state().controller().expand_state(), ExpandState::Collapsed);
}

#[test]
fn m_and_shift_m_page() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.app_state().controller().shown(), 20);

    app.handle_key_test(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));
    assert_eq!(app.app_state().controller().shown(), 10);
}

// ===== View menu =====

#[test]
fn view_menu_keyboard_flow_toggles_owner() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('v'));
    assert!(app.app_state().controller().column_menu().is_open());

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    let menu = app.app_state().controller().column_menu();
    assert!(!menu.is_open());
    assert!(menu.visibility().is_visible(Column::Owner));
    assert_eq!(app.app_state().row_cursor(), 0, "menu keys must not move the list");
}

#[test]
fn escape_closes_view_menu_without_quitting() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('v'));

    assert!(!press(&mut app, KeyCode::Esc));
    assert!(!app.app_state().controller().column_menu().is_open());
}

// ===== Help =====

#[test]
fn help_blocks_list_keys() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.app_state().help_visible);

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.app_state().row_cursor(), 0);

    press(&mut app, KeyCode::Esc);
    assert!(!app.app_state().help_visible);
}

// ===== Sidebar =====

#[test]
fn sidebar_enter_navigates_to_section_fragment() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.app_state().focus, FocusPane::Sidebar);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.location().current(), Some("section-1"));
    assert_eq!(app.app_state().row_cursor(), 0, "sidebar keys must not move the list");
}

#[test]
fn b_hides_sidebar_and_returns_focus() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('b'));

    assert!(!app.app_state().sidebar_open);
    assert_eq!(app.app_state().focus, FocusPane::List);
}

// ===== Rendering & mouse =====

#[test]
fn draw_renders_panel() {
    let mut app = create_test_app();
    app.render_test().unwrap();

    let output = screen(&app);
    assert!(output.contains("Test 1 Questions"));
    assert!(output.contains("Showing 10 out of 20 Tests"));
}

#[test]
fn fragment_appears_after_navigation() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    app.render_test().unwrap();

    assert!(screen(&app).contains("#new-section"));
}

#[test]
fn click_on_row_expands_it() {
    let mut app = create_test_app();
    app.render_test().unwrap();
    let row = app.hit_map().rows[3];

    click(&mut app, row.area.x + 10, row.area.y);

    assert_eq!(
        app.app_state().controller().expand_state(),
        ExpandState::OneExpanded(row.id)
    );
    assert_eq!(app.app_state().row_cursor(), 3);
}

#[test]
fn click_on_checkbox_selects_row() {
    let mut app = create_test_app();
    app.render_test().unwrap();
    let row = app.hit_map().rows[1];

    click(&mut app, row.checkbox.x, row.checkbox.y);

    assert!(app.app_state().controller().selection().is_selected(row.id));
    assert_eq!(app.app_state().controller().expand_state(), ExpandState::Collapsed);
}

#[test]
fn click_outside_open_menu_closes_it_and_is_consumed() {
    let mut app = create_test_app();
    app.render_test().unwrap();
    let view_button = app.hit_map().view_button.unwrap();
    click(&mut app, view_button.x, view_button.y);
    assert!(app.app_state().controller().column_menu().is_open());

    app.render_test().unwrap();
    let menu = app.hit_map().view_menu.unwrap();
    let row = *app
        .hit_map()
        .rows
        .iter()
        .find(|r| r.area.y > menu.bottom())
        .unwrap();
    click(&mut app, row.checkbox.x, row.checkbox.y);

    assert!(!app.app_state().controller().column_menu().is_open());
    assert!(app.app_state().controller().selection().is_empty());
}

#[test]
fn clicking_menu_entry_toggles_column() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('v'));
    app.render_test().unwrap();
    let (area, column) = app.hit_map().view_menu_entries[4];
    assert_eq!(column, Column::Actions);

    click(&mut app, area.x, area.y);
    app.render_test().unwrap();

    assert!(app
        .app_state()
        .controller()
        .column_menu()
        .visibility()
        .is_visible(Column::Actions));
    assert!(screen(&app).contains("Edit | Delete"));
}

#[test]
fn click_on_pager_loads_more() {
    let mut app = create_test_app();
    app.render_test().unwrap();
    let pager = app.hit_map().pager_button.unwrap();

    click(&mut app, pager.x, pager.y);

    assert_eq!(app.app_state().controller().shown(), 20);
}

#[test]
fn click_closes_help() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('?'));

    click(&mut app, 0, 0);

    assert!(!app.app_state().help_visible);
}

#[test]
fn wheel_moves_row_cursor() {
    let mut app = create_test_app();
    app.handle_mouse_test(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 50,
        row: 20,
        modifiers: KeyModifiers::NONE,
    });

    assert_eq!(app.app_state().row_cursor(), 1);
}
