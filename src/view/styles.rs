//! Styling for the header, sidebar and question list.

use crate::model::SectionColor;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== UiStyles =====

/// Resolved styles for every UI element.
///
/// With colors disabled only modifiers (bold, reversed, dim) remain, so
/// the cursor and active states stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStyles {
    /// `EDUCATION` title.
    pub brand: Style,
    /// Active navigation entry.
    pub nav_active: Style,
    /// Other navigation entries.
    pub nav_inactive: Style,
    /// Profile badge, selection count and key names.
    pub badge: Style,
    /// Section headings and column titles.
    pub heading: Style,
    /// Borders of unfocused panes and secondary text.
    pub muted: Style,
    /// Buttons at rest.
    pub button: Style,
    /// Buttons whose state is on.
    pub button_active: Style,
    /// Border of the focused pane.
    pub focused_border: Style,
    /// Row under the keyboard cursor.
    pub cursor_row: Style,
    /// Checked rows.
    pub selected_row: Style,
    /// Answer lines of expanded rows.
    pub answer: Style,
    /// Search placeholder.
    pub placeholder: Style,
    /// Cell under the search cursor.
    pub search_cursor: Style,
    /// Red section marker.
    pub section_red: Style,
    /// Blue section marker.
    pub section_blue: Style,
}

impl UiStyles {
    /// Styles for the given color mode. Disabled colors keep only modifiers.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                brand: bold.fg(Color::Cyan),
                nav_active: bold.fg(Color::Black).bg(Color::Cyan),
                nav_inactive: Style::default().fg(Color::Gray),
                badge: bold.fg(Color::Yellow),
                heading: bold.fg(Color::Cyan),
                muted: Style::default().fg(Color::DarkGray),
                button: Style::default().fg(Color::White).bg(Color::DarkGray),
                button_active: bold.fg(Color::Black).bg(Color::Green),
                focused_border: Style::default().fg(Color::Cyan),
                cursor_row: reversed,
                selected_row: Style::default().fg(Color::LightGreen),
                answer: Style::default().fg(Color::Yellow),
                placeholder: Style::default().fg(Color::DarkGray),
                search_cursor: bold.bg(Color::White).fg(Color::Black),
                section_red: Style::default().fg(Color::Red),
                section_blue: Style::default().fg(Color::Blue),
            }
        } else {
            Self {
                brand: bold,
                nav_active: reversed,
                nav_inactive: Style::default(),
                badge: bold,
                heading: bold,
                muted: dim,
                button: Style::default(),
                button_active: reversed,
                focused_border: bold,
                cursor_row: reversed,
                selected_row: bold,
                answer: Style::default(),
                placeholder: dim,
                search_cursor: reversed,
                section_red: Style::default(),
                section_blue: Style::default(),
            }
        }
    }

    /// Marker style for a sidebar section.
    pub fn section_marker(&self, color: SectionColor) -> Style {
        match color {
            SectionColor::Red => self.section_red,
            SectionColor::Blue => self.section_blue,
        }
    }
}

impl Default for UiStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::enabled())
    }
}

// ===== Tests =====
