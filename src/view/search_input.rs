//! Search box widget for the toolbar.

use crate::state::SearchInput;
use crate::view::styles::UiStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the box is empty and unfocused.
pub const PLACEHOLDER: &str = "Search";

/// Bordered search box.
///
/// Shows the query with a block cursor while focused, the placeholder
/// while empty, and the plain query otherwise.
pub struct SearchBox<'a> {
    input: &'a SearchInput,
    focused: bool,
    styles: &'a UiStyles,
}

impl<'a> SearchBox<'a> {
    /// Box over `input`; `focused` draws the cursor.
    pub fn new(input: &'a SearchInput, focused: bool, styles: &'a UiStyles) -> Self {
        Self {
            input,
            focused,
            styles,
        }
    }

    fn content(&self) -> Line<'a> {
        let query = self.input.query.as_str();

        if !self.focused {
            return if query.is_empty() {
                Line::from(Span::styled(PLACEHOLDER, self.styles.placeholder))
            } else {
                Line::from(query)
            };
        }

        // Split around the cursor so the character under it can be highlighted.
        let cursor = self.input.cursor.min(self.input.char_len());
        let before: String = query.chars().take(cursor).collect();
        let mut rest = query.chars().skip(cursor);
        let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(under, self.styles.search_cursor),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            self.styles.muted
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        Paragraph::new(self.content()).block(block).render(area, buf);
    }
}
