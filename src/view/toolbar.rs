//! Panel toolbar: search box plus the Full View and View buttons.

use crate::state::{AppState, FocusPane};
use crate::view::constants::SEARCH_BOX_WIDTH;
use crate::view::search_input::SearchBox;
use crate::view::styles::UiStyles;
use ratatui::{layout::Rect, style::Style, text::Span, widgets::Paragraph, Frame};
use unicode_width::UnicodeWidthStr;

/// Full View toggle button.
pub const FULL_VIEW_LABEL: &str = "[ Full View ]";
/// Column menu button.
pub const VIEW_LABEL: &str = "[ View ]";

/// Click areas produced by the toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolbarHits {
    /// Whole search box.
    pub search_box: Option<Rect>,
    /// Full View button, if it fit.
    pub full_view_button: Option<Rect>,
    /// View button, if it fit. Anchors the column menu.
    pub view_button: Option<Rect>,
}

fn button(
    frame: &mut Frame,
    label: &'static str,
    (x, y): (u16, u16),
    bounds: Rect,
    style: Style,
) -> Option<Rect> {
    let area = Rect::new(x, y, label.width() as u16, 1).intersection(bounds);
    if area.is_empty() {
        return None;
    }
    frame.render_widget(Paragraph::new(Span::styled(label, style)), area);
    Some(area)
}

/// Render the toolbar row and return its click areas.
pub fn render_toolbar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &UiStyles,
) -> ToolbarHits {
    let mut hits = ToolbarHits::default();
    if area.is_empty() {
        return hits;
    }

    let search_area = Rect::new(area.x, area.y, SEARCH_BOX_WIDTH.min(area.width), area.height);
    frame.render_widget(
        SearchBox::new(state.search_input(), state.focus == FocusPane::Search, styles),
        search_area,
    );
    hits.search_box = Some(search_area);

    let controller = state.controller();
    let button_y = area.y + area.height / 2;
    let mut x = search_area.right() + 2;

    let full_view_style = if controller.is_full_view() {
        styles.button_active
    } else {
        styles.button
    };
    hits.full_view_button = button(frame, FULL_VIEW_LABEL, (x, button_y), area, full_view_style);
    x += FULL_VIEW_LABEL.width() as u16 + 1;

    let view_style = if controller.column_menu().is_open() {
        styles.button_active
    } else {
        styles.button
    };
    hits.view_button = button(frame, VIEW_LABEL, (x, button_y), area, view_style);

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TestInfo;
    use crate::source::sample_questions;
    use crate::state::{ControllerOptions, QuestionListController};
    use crate::view::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn state() -> AppState {
        let controller =
            QuestionListController::new(sample_questions(), ControllerOptions::default());
        AppState::new(controller, TestInfo::default())
    }

    fn render(state: &AppState, width: u16) -> (String, ToolbarHits) {
        let styles = UiStyles::default();
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        let mut hits = ToolbarHits::default();
        terminal
            .draw(|frame| {
                hits = render_toolbar(frame, frame.area(), state, &styles);
            })
            .unwrap();
        (buffer_to_string(terminal.backend().buffer()), hits)
    }

    #[test]
    fn renders_search_box_and_buttons() {
        let (output, hits) = render(&state(), 70);

        assert!(output.contains("Search"));
        assert!(output.contains("Full View"));
        assert!(output.contains("[ View ]"));
        assert!(hits.search_box.is_some());
        assert!(hits.full_view_button.is_some());
        assert!(hits.view_button.is_some());
    }

    #[test]
    fn buttons_do_not_overlap() {
        let (_, hits) = render(&state(), 70);

        let full = hits.full_view_button.unwrap();
        let view = hits.view_button.unwrap();
        assert!(full.right() <= view.x);
    }

    #[test]
    fn narrow_toolbar_drops_buttons_that_do_not_fit() {
        let (_, hits) = render(&state(), SEARCH_BOX_WIDTH);

        assert!(hits.search_box.is_some());
        assert_eq!(hits.full_view_button, None);
        assert_eq!(hits.view_button, None);
    }
}
