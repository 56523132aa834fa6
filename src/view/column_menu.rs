//! View menu popup for column visibility.

use crate::model::Column;
use crate::state::{ColumnMenuState, HitMap};
use crate::view::constants::{VIEW_MENU_HEIGHT, VIEW_MENU_WIDTH};
use crate::view::styles::UiStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Button that dismisses the menu.
pub const APPLY_LABEL: &str = "[ Apply ]";

/// Popup placement: under `anchor`, shifted left to stay inside `bounds`.
pub fn menu_area(anchor: Rect, bounds: Rect) -> Rect {
    let width = VIEW_MENU_WIDTH.min(bounds.width);
    let height = VIEW_MENU_HEIGHT.min(bounds.height);
    let x = anchor.x.min(bounds.right().saturating_sub(width)).max(bounds.x);
    let y = anchor
        .bottom()
        .min(bounds.bottom().saturating_sub(height))
        .max(bounds.y);
    Rect::new(x, y, width, height)
}

/// Render the open menu under `anchor` and record its click targets.
pub fn render_column_menu(
    frame: &mut Frame,
    anchor: Rect,
    menu: &ColumnMenuState,
    styles: &UiStyles,
    hits: &mut HitMap,
) {
    let area = menu_area(anchor, frame.area());
    if area.is_empty() {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.focused_border)
        .title(" View ");
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let visibility = menu.visibility();
    let mut lines: Vec<Line> = Vec::with_capacity(Column::ALL.len() + 2);
    for (i, column) in Column::ALL.into_iter().enumerate() {
        let mark = if visibility.is_visible(column) { "[x]" } else { "[ ]" };
        let mut line = Line::from(format!("{} {}", mark, column.label()));
        if i == menu.cursor() {
            line = line.style(styles.cursor_row);
        }
        lines.push(line);

        let y = inner.y + i as u16;
        if y < inner.bottom() {
            hits.view_menu_entries
                .push((Rect::new(inner.x, y, inner.width, 1), column));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(APPLY_LABEL, styles.button_active)));

    let apply_y = inner.y + Column::ALL.len() as u16 + 1;
    if apply_y < inner.bottom() {
        let width = (APPLY_LABEL.len() as u16).min(inner.width);
        hits.view_menu_apply = Some(Rect::new(inner.x, apply_y, width, 1));
    }

    frame.render_widget(Paragraph::new(lines), inner);
    hits.view_menu = Some(area);
}
