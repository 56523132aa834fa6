//! Top bar: brand, sidebar toggle, navigation and profile badge.

use crate::model::{ACTIVE_NAV_ENTRY, NAV_ENTRIES};
use crate::state::AppState;
use crate::view::constants::NAV_COLLAPSE_WIDTH;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const BRAND: &str = "EDUCATION";
const BADGE: &str = "[ Admin ]";
const NAV_TOGGLE: &str = "[ Menu (n) ]";

/// Whether the navigation entries fit inline at this width.
pub fn nav_collapsed(width: u16) -> bool {
    width < NAV_COLLAPSE_WIDTH
}

fn sidebar_toggle_label(sidebar_open: bool) -> &'static str {
    if sidebar_open {
        "[«]"
    } else {
        "[»]"
    }
}

/// Render the header. Returns the click area of the sidebar toggle.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    fragment: Option<&str>,
    styles: &UiStyles,
) -> Option<Rect> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.muted);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return None;
    }

    let toggle = sidebar_toggle_label(state.sidebar_open);
    let mut spans = vec![
        Span::styled(BRAND, styles.brand),
        Span::raw(" "),
        Span::styled(toggle, styles.button),
        Span::raw("  "),
    ];

    if nav_collapsed(area.width) {
        let style = if state.nav_menu_open {
            styles.button_active
        } else {
            styles.button
        };
        spans.push(Span::styled(NAV_TOGGLE, style));
    } else {
        for (i, entry) in NAV_ENTRIES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if i == ACTIVE_NAV_ENTRY {
                styles.nav_active
            } else {
                styles.nav_inactive
            };
            spans.push(Span::styled(format!(" {} ", entry), style));
        }
    }

    if let Some(fragment) = fragment {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("#{}", fragment), styles.muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    // Badge is right-aligned over whatever the left side left free.
    let badge_width = BADGE.width() as u16;
    if inner.width > badge_width {
        let badge_area = Rect::new(
            inner.right() - badge_width,
            inner.y,
            badge_width,
            1,
        );
        frame.render_widget(Paragraph::new(Span::styled(BADGE, styles.badge)), badge_area);
    }

    let toggle_x = inner.x + BRAND.width() as u16 + 1;
    let toggle_area = Rect::new(toggle_x, inner.y, toggle.width() as u16, 1);
    Some(toggle_area.intersection(inner))
}

/// Drop-down list of navigation entries under the collapsed toggle.
pub fn render_nav_menu(frame: &mut Frame, header: Rect, styles: &UiStyles) {
    let width = NAV_ENTRIES
        .iter()
        .map(|e| e.width() as u16)
        .max()
        .unwrap_or(0)
        + 4;
    let height = NAV_ENTRIES.len() as u16 + 2;
    let x = header.x + 1 + BRAND.width() as u16 + 1 + 3 + 2;
    let area = Rect::new(x, header.bottom().saturating_sub(1), width, height)
        .intersection(frame.area());
    if area.is_empty() {
        return;
    }

    let lines: Vec<Line> = NAV_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == ACTIVE_NAV_ENTRY {
                styles.nav_active
            } else {
                styles.nav_inactive
            };
            Line::from(Span::styled(format!(" {} ", entry), style))
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles.focused_border),
        ),
        area,
    );
}
