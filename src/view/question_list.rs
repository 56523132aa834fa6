//! Main panel: toolbar, column header, question rows and pager footer.

use crate::model::{Column, ColumnVisibility};
use crate::state::{AppState, FocusPane, HitMap, RowHit, RowView};
use crate::view::constants::{
    ACTIONS_COLUMN_WIDTH, ANSWER_INDENT, CHECKBOX_WIDTH, LIST_FOOTER_HEIGHT,
    MARKS_COLUMN_WIDTH, MIN_QUESTION_COLUMN_WIDTH, OWNER_COLUMN_WIDTH, TABLE_HEADER_HEIGHT,
    TOOLBAR_HEIGHT, TYPE_COLUMN_WIDTH,
};
use crate::view::styles::UiStyles;
use crate::view::text::{fit_width, wrap_words};
use crate::view::toolbar::render_toolbar;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

/// Pager label while more rows can be revealed.
pub const LOAD_MORE_LABEL: &str = "[ Load More ]";
/// Pager label once everything is shown.
pub const SHOW_LESS_LABEL: &str = "[ Show Less ]";
const ACTIONS_HINT: &str = "Edit | Delete";
const ANSWER_PREFIX: &str = "Answer: ";

// ===== Column geometry =====

/// Horizontal placement of one visible column, relative to the list's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    /// Column drawn in this span.
    pub column: Column,
    /// Left edge.
    pub x: u16,
    /// Width including the trailing gap.
    pub width: u16,
}

fn fixed_width(column: Column) -> u16 {
    match column {
        Column::Questions => 0,
        Column::Owner => OWNER_COLUMN_WIDTH,
        Column::Type => TYPE_COLUMN_WIDTH,
        Column::Marks => MARKS_COLUMN_WIDTH,
        Column::Actions => ACTIONS_COLUMN_WIDTH,
    }
}

/// Lay out the visible columns after the checkbox cell.
///
/// Questions takes whatever the fixed-width columns leave, but never less
/// than [`MIN_QUESTION_COLUMN_WIDTH`]. Columns past the right edge are
/// clipped and dropped once they have no width left.
pub fn column_spans(width: u16, visibility: ColumnVisibility) -> Vec<ColumnSpan> {
    let fixed: u16 = visibility
        .visible_columns()
        .map(fixed_width)
        .fold(0u16, u16::saturating_add);
    let question_width = width
        .saturating_sub(CHECKBOX_WIDTH)
        .saturating_sub(fixed)
        .max(MIN_QUESTION_COLUMN_WIDTH);

    let mut spans = Vec::new();
    let mut x = CHECKBOX_WIDTH;
    for column in visibility.visible_columns() {
        let wanted = match column {
            Column::Questions => question_width,
            other => fixed_width(other),
        };
        let w = wanted.min(width.saturating_sub(x));
        if w == 0 {
            break;
        }
        spans.push(ColumnSpan {
            column,
            x,
            width: w,
        });
        x += w;
    }
    spans
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x] "
    } else {
        "[ ] "
    }
}

/// Text of one cell. Owner, Type and Marks show `-` when the record has none.
fn cell_text<'a>(row: &'a RowView<'a>, column: Column) -> Cow<'a, str> {
    let record = row.record;
    match column {
        Column::Questions => Cow::Borrowed(row.question_text.as_ref()),
        Column::Owner => Cow::Borrowed(record.owner().unwrap_or("-")),
        Column::Type => Cow::Borrowed(record.kind().map_or("-", |k| k.label())),
        Column::Marks => record
            .marks()
            .map_or(Cow::Borrowed("-"), |m| Cow::Owned(m.to_string())),
        Column::Actions => Cow::Borrowed(ACTIONS_HINT),
    }
}

/// Cells are padded one short of their span to leave a gap column.
fn push_cell(out: &mut String, text: &str, span: &ColumnSpan) {
    let inner = span.width.saturating_sub(1) as usize;
    out.push_str(&fit_width(text, inner));
    if span.width > 0 {
        out.push(' ');
    }
}

fn blank(width: u16) -> String {
    " ".repeat(width as usize)
}

// ===== Rows =====

/// All lines a row occupies: the cell line, wrapped question continuation
/// lines when expanded, then the answer.
pub fn row_lines(
    row: &RowView<'_>,
    spans: &[ColumnSpan],
    width: u16,
    styles: &UiStyles,
) -> Vec<Line<'static>> {
    let question_span = spans.iter().find(|s| s.column == Column::Questions);
    let wrapped: Vec<String> = match question_span {
        Some(span) if row.is_expanded => {
            wrap_words(&row.question_text, span.width.saturating_sub(1) as usize)
        }
        _ => Vec::new(),
    };

    let mut first = String::from(checkbox(row.is_selected));
    for span in spans {
        match span.column {
            Column::Questions if !wrapped.is_empty() => push_cell(&mut first, &wrapped[0], span),
            column => push_cell(&mut first, &cell_text(row, column), span),
        }
    }
    let row_style = if row.is_selected {
        styles.selected_row
    } else {
        Style::default()
    };
    let mut lines = vec![Line::from(first).style(row_style)];

    if let Some(span) = question_span {
        for continuation in wrapped.iter().skip(1) {
            let mut text = blank(span.x);
            push_cell(&mut text, continuation, span);
            lines.push(Line::from(text).style(row_style));
        }
    }

    if row.is_expanded {
        let indent = ANSWER_INDENT.min(width);
        let answer_width = width.saturating_sub(indent) as usize;
        let answer = format!("{}{}", ANSWER_PREFIX, row.record.answer());
        for piece in wrap_words(&answer, answer_width) {
            lines.push(Line::from(vec![
                Span::raw(blank(indent)),
                Span::styled(fit_width(&piece, answer_width), styles.answer),
            ]));
        }
    }

    lines
}

/// First row to draw so the cursor row is fully on screen.
///
/// Rows before the cursor are dropped from the top until the cursor row's
/// last line fits. A cursor row taller than the viewport starts at the top.
pub fn scroll_start(heights: &[usize], cursor: usize, viewport: usize) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let cursor = cursor.min(heights.len() - 1);
    let mut start = 0;
    let mut used: usize = heights[..=cursor].iter().sum();
    while start < cursor && used > viewport {
        used -= heights[start];
        start += 1;
    }
    start
}

fn render_line(frame: &mut Frame, line: Line<'_>, x: u16, y: u16, width: u16) {
    frame.render_widget(Paragraph::new(line), Rect::new(x, y, width, 1));
}

fn render_header_row(
    frame: &mut Frame,
    area: Rect,
    all_selected: bool,
    spans: &[ColumnSpan],
    styles: &UiStyles,
) -> Option<Rect> {
    if area.is_empty() {
        return None;
    }
    let mut text = String::from(checkbox(all_selected));
    for span in spans {
        push_cell(&mut text, span.column.label(), span);
    }
    let line = Line::from(Span::styled(text, styles.heading));
    render_line(frame, line, area.x, area.y, area.width);
    Some(Rect::new(area.x, area.y, (CHECKBOX_WIDTH - 1).min(area.width), 1))
}

fn render_rows(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    rows: &[RowView<'_>],
    spans: &[ColumnSpan],
    styles: &UiStyles,
) -> Vec<RowHit> {
    let mut hits = Vec::new();
    if area.is_empty() {
        return hits;
    }

    if rows.is_empty() {
        let term = state.controller().search_term();
        let message = if term.is_empty() {
            "No questions".to_string()
        } else {
            format!("No questions match \"{}\"", term)
        };
        let line = Line::from(Span::styled(message, styles.muted));
        render_line(frame, line, area.x, area.y, area.width);
        return hits;
    }

    let rendered: Vec<Vec<Line<'static>>> = rows
        .iter()
        .map(|row| row_lines(row, spans, area.width, styles))
        .collect();
    let heights: Vec<usize> = rendered.iter().map(Vec::len).collect();
    let cursor = state.row_cursor();
    let show_cursor = state.focus == FocusPane::List;
    let start = scroll_start(&heights, cursor, area.height as usize);

    let mut y = area.y;
    for (index, (row, lines)) in rows.iter().zip(rendered).enumerate().skip(start) {
        if y >= area.bottom() {
            break;
        }
        let top = y;
        for (n, mut line) in lines.into_iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            if n == 0 && show_cursor && index == cursor {
                line = line.patch_style(styles.cursor_row);
            }
            render_line(frame, line, area.x, y, area.width);
            y += 1;
        }
        hits.push(RowHit {
            row: index,
            id: row.record.id(),
            area: Rect::new(area.x, top, area.width, y - top),
            checkbox: Rect::new(area.x, top, (CHECKBOX_WIDTH - 1).min(area.width), 1),
        });
    }

    hits
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    pager: Option<&'static str>,
    counter: &str,
    styles: &UiStyles,
) -> Option<Rect> {
    if area.is_empty() {
        return None;
    }

    let counter_width = (counter.width() as u16).min(area.width);
    let counter_area = Rect::new(area.right() - counter_width, area.y, counter_width, 1);
    let line = Line::from(Span::styled(counter.to_string(), styles.muted));
    render_line(frame, line, counter_area.x, area.y, counter_width);

    let label = pager?;
    let pager_area = Rect::new(area.x, area.y, label.width() as u16, 1).intersection(area);
    if pager_area.is_empty() || pager_area.right() > counter_area.x {
        return None;
    }
    let line = Line::from(Span::styled(label, styles.button));
    render_line(frame, line, pager_area.x, area.y, pager_area.width);
    Some(pager_area)
}

/// Render the question panel into `area`, recording click targets in `hits`.
pub fn render_question_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &UiStyles,
    hits: &mut HitMap,
) {
    let border_style = if matches!(state.focus, FocusPane::List | FocusPane::Search) {
        styles.focused_border
    } else {
        styles.muted
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", state.test_info().title), styles.heading));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Length(TABLE_HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(LIST_FOOTER_HEIGHT),
        ])
        .split(inner);

    let toolbar = render_toolbar(frame, chunks[0], state, styles);
    hits.search_box = toolbar.search_box;
    hits.full_view_button = toolbar.full_view_button;
    hits.view_button = toolbar.view_button;

    let view = state.controller().view_model();
    let spans = column_spans(inner.width, view.column_visibility);

    hits.header_checkbox = render_header_row(frame, chunks[1], view.all_selected, &spans, styles);
    hits.rows = render_rows(frame, chunks[2], state, &view.visible_rows, &spans, styles);

    let pager = if view.can_load_more {
        Some(LOAD_MORE_LABEL)
    } else if view.can_show_less {
        Some(SHOW_LESS_LABEL)
    } else {
        None
    };
    hits.pager_button = render_footer(frame, chunks[3], pager, &view.footer_text(), styles);
}

#[cfg(test)]
#[path = "question_list_tests.rs"]
mod tests;
