//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::UiStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: `(category, [(keys, description)])`.
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Question List",
        &[
            ("j/↓", "Next row"),
            ("k/↑", "Previous row"),
            ("Space", "Select / deselect row"),
            ("a", "Select / deselect all filtered"),
            ("Enter", "Expand / collapse answer"),
            ("f", "Toggle full view"),
            ("m", "Load more"),
            ("M", "Show less"),
        ],
    ),
    (
        "Search",
        &[
            ("//Ctrl+f", "Focus search box"),
            ("←/→", "Move cursor"),
            ("Enter/Esc", "Leave search box (term kept)"),
        ],
    ),
    (
        "View Menu",
        &[
            ("v", "Open / close column menu"),
            ("j/k", "Move menu cursor"),
            ("Space", "Toggle column"),
            ("Enter", "Apply"),
        ],
    ),
    (
        "Layout",
        &[
            ("b", "Toggle sidebar"),
            ("Tab", "Focus sidebar / list"),
            ("n", "Navigation menu (narrow terminals)"),
            ("Esc", "Close overlay"),
        ],
    ),
    (
        "Application",
        &[("q/Ctrl+c", "Quit"), ("?", "Show help overlay")],
    ),
];

const KEY_COLUMN_WIDTH: usize = 12;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &UiStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint sits on the bottom border.
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        styles.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(styles: &UiStyles) -> Vec<Line<'static>> {
    let key_style = styles.badge;
    let desc_style = Style::default();

    let mut lines = Vec::new();
    for (i, (category, shortcuts)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, styles.heading)));
        for (keys, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<width$}", keys, width = KEY_COLUMN_WIDTH), key_style),
                Span::styled(*description, desc_style),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(50, 50, Rect::new(0, 0, 100, 40));

        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn content_lists_every_category() {
        let lines = build_help_content(&UiStyles::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        for (category, _) in SHORTCUTS {
            assert!(text.iter().any(|l| l == category), "missing {}", category);
        }
    }

    #[test]
    fn overlay_renders_title_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).unwrap();
        terminal
            .draw(|frame| render_help_overlay(frame, &UiStyles::default()))
            .unwrap();

        let output = buffer_to_string(terminal.backend().buffer());
        assert!(output.contains("Keyboard Shortcuts"));
        assert!(output.contains("Press Esc or ? to close"));
        assert!(output.contains("Toggle full view"));
    }
}
