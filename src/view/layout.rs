//! Screen layout: header, optional sidebar, question panel and status bar.
//!
//! Rendering returns a [`HitMap`] of everything clickable so the mouse
//! handler can resolve clicks against the frame that was actually drawn.

use crate::state::{AppState, FocusPane, HitMap};
use crate::view::column_menu::render_column_menu;
use crate::view::constants::{HEADER_HEIGHT, SIDEBAR_WIDTH, STATUS_BAR_HEIGHT};
use crate::view::header::{nav_collapsed, render_header, render_nav_menu};
use crate::view::help::render_help_overlay;
use crate::view::question_list::render_question_panel;
use crate::view::sidebar::render_sidebar;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Top-level screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Top bar.
    pub header: Rect,
    /// Left sidebar, when open and there is room.
    pub sidebar: Option<Rect>,
    /// Question panel.
    pub panel: Rect,
    /// Bottom status line.
    pub status: Rect,
}

/// Split the frame. The sidebar is dropped when closed or when it would
/// leave no room for the panel.
pub fn calculate_layout(area: Rect, sidebar_open: bool) -> ScreenLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let body = vertical[1];
    let (sidebar, panel) = if sidebar_open && body.width > SIDEBAR_WIDTH * 2 {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(body);
        (Some(horizontal[0]), horizontal[1])
    } else {
        (None, body)
    };

    ScreenLayout {
        header: vertical[0],
        sidebar,
        panel,
        status: vertical[2],
    }
}

/// Context-sensitive key hints for the status bar.
pub fn status_hints(state: &AppState) -> &'static str {
    if state.help_visible {
        "Esc/?: close help"
    } else if state.controller().column_menu().is_open() {
        "j/k: move | Space: toggle column | Enter: apply | Esc: close"
    } else {
        match state.focus {
            FocusPane::Search => "type to filter | ←/→: cursor | Enter/Esc: done",
            FocusPane::Sidebar => "j/k: move | Enter: open section | Tab: list | b: hide",
            FocusPane::List => {
                "j/k: move | Space: select | Enter: expand | f: full view | /: search | v: view | ?: help | q: quit"
            }
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let selected = state.controller().selection().len();
    let mut spans = vec![Span::styled(status_hints(state), styles.muted)];
    if selected > 0 {
        spans.insert(0, Span::styled(format!(" {} selected ", selected), styles.badge));
        spans.insert(1, Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the whole screen and collect click targets.
///
/// Overlays (view menu, navigation menu, help) are drawn last so they sit
/// on top of the panel.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    fragment: Option<&str>,
    styles: &UiStyles,
) -> HitMap {
    let layout = calculate_layout(frame.area(), state.sidebar_open);
    let mut hits = HitMap::default();

    hits.sidebar_toggle = render_header(frame, layout.header, state, fragment, styles);
    if let Some(sidebar) = layout.sidebar {
        hits.sidebar_entries = render_sidebar(frame, sidebar, state, styles);
    }
    render_question_panel(frame, layout.panel, state, styles, &mut hits);
    render_status_bar(frame, layout.status, state, styles);

    let menu = state.controller().column_menu();
    if menu.is_open() {
        let anchor = hits
            .view_button
            .unwrap_or(Rect::new(layout.panel.x, layout.panel.y, 0, 1));
        render_column_menu(frame, anchor, menu, styles, &mut hits);
    }
    if state.nav_menu_open && nav_collapsed(layout.header.width) {
        render_nav_menu(frame, layout.header, styles);
    }
    if state.help_visible {
        render_help_overlay(frame, styles);
    }

    hits
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
