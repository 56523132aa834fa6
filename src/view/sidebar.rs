//! Sidebar: ADD QUESTION, SNAP SHOT, SECTIONS and TEST INFORMATION.

use crate::state::{AppState, FocusPane, SidebarEntry};
use crate::view::styles::UiStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One rendered sidebar line, tagged with the entry it activates.
struct SidebarLine<'a> {
    line: Line<'a>,
    entry: Option<usize>,
}

fn plain(line: Line<'_>) -> SidebarLine<'_> {
    SidebarLine { line, entry: None }
}

fn build_lines<'a>(state: &'a AppState, styles: &UiStyles) -> Vec<SidebarLine<'a>> {
    let info = state.test_info();
    let cursor = (state.focus == FocusPane::Sidebar).then(|| state.sidebar_cursor());
    let highlight = |index: usize, line: Line<'a>| {
        if cursor == Some(index) {
            line.style(styles.cursor_row)
        } else {
            line
        }
    };

    let mut lines = Vec::new();

    for index in 0..state.sidebar_entry_count() {
        let line = match state.sidebar_entry(index) {
            Some(SidebarEntry::AddQuestion) => {
                let add = Line::from(Span::styled("[ ADD QUESTION ]", styles.button));
                lines.push(SidebarLine {
                    line: highlight(index, add),
                    entry: Some(index),
                });
                lines.push(plain(Line::default()));
                lines.push(plain(Line::from(Span::styled("SNAP SHOT", styles.heading))));
                lines.push(plain(Line::default()));
                lines.push(plain(Line::from(Span::styled("SECTIONS", styles.heading))));
                continue;
            }
            Some(SidebarEntry::Section(i)) => {
                let Some(section) = info.sections.get(i) else {
                    continue;
                };
                let marker = match section.marker() {
                    Some(color) => Span::styled("● ", styles.section_marker(color)),
                    None => Span::raw("  "),
                };
                Line::from(vec![Span::raw(" "), marker, Span::raw(section.label())])
            }
            None => continue,
        };
        lines.push(SidebarLine {
            line: highlight(index, line),
            entry: Some(index),
        });
    }

    lines.push(plain(Line::default()));
    lines.push(plain(Line::from(Span::styled(
        "TEST INFORMATION",
        styles.heading,
    ))));
    for item in &info.info {
        lines.push(plain(Line::from(format!(
            " {} : ({})",
            item.label, item.value
        ))));
    }

    lines
}

/// Render the sidebar. Returns the click area of each actionable entry.
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &UiStyles,
) -> Vec<(Rect, usize)> {
    let border_style = if state.focus == FocusPane::Sidebar {
        styles.focused_border
    } else {
        styles.muted
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = build_lines(state, styles);
    let mut hits = Vec::new();
    for (offset, sidebar_line) in lines.iter().enumerate() {
        let Ok(offset) = u16::try_from(offset) else {
            break;
        };
        if offset >= inner.height {
            break;
        }
        if let Some(entry) = sidebar_line.entry {
            hits.push((Rect::new(inner.x, inner.y + offset, inner.width, 1), entry));
        }
    }

    let text: Vec<Line> = lines.into_iter().map(|l| l.line).collect();
    frame.render_widget(Paragraph::new(text), inner);

    hits
}
