//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod column_menu;
mod header;
mod help;
mod layout;
mod question_list;
mod search_input;
mod sidebar;
mod styles;
mod text;
mod toolbar;

pub use help::render_help_overlay;
pub use layout::{calculate_layout, render_layout, ScreenLayout};
pub use search_input::SearchBox;
pub use styles::{ColorConfig, UiStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::{
    detect_click, handle_click, handle_list_action, handle_sidebar_action,
    handle_view_menu_action, search_input_handler, AppState, FocusPane, FragmentLocation, HitMap,
    Navigator,
};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    /// Receives sidebar navigation; its fragment is shown in the header.
    location: FragmentLocation,
    styles: UiStyles,
    /// Click targets from the last rendered frame.
    hit_map: HitMap,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(app_state: AppState, styles: UiStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            location: FragmentLocation::new(),
            styles,
            hit_map: HitMap::default(),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after an event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                // Windows also reports releases; only presses are actions.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!("Handling resize to {}x{}", width, height);
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.focus == FocusPane::Search && !self.app_state.help_visible {
            match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app_state
                        .edit_search(|input| search_input_handler::handle_char_input(input, ch));
                    return false;
                }
                KeyCode::Backspace => {
                    self.app_state
                        .edit_search(search_input_handler::handle_backspace);
                    return false;
                }
                KeyCode::Left => {
                    self.app_state
                        .edit_search(search_input_handler::handle_cursor_left);
                    return false;
                }
                KeyCode::Right => {
                    self.app_state
                        .edit_search(search_input_handler::handle_cursor_right);
                    return false;
                }
                KeyCode::Enter | KeyCode::Esc => {
                    self.app_state.finish_search();
                    return false;
                }
                _ => {} // Fall through to key binding dispatch
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help swallows everything except closing it and quitting.
        if self.app_state.help_visible {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help | KeyAction::Cancel => self.app_state.help_visible = false,
                _ => {}
            }
            return false;
        }

        if handle_view_menu_action(&mut self.app_state, action) {
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::Cancel => {
                self.app_state.cancel();
            }
            KeyAction::StartSearch => self.app_state.start_search(),
            KeyAction::ToggleViewMenu => self.app_state.controller_mut().toggle_view_menu(),
            KeyAction::ToggleSidebar => self.app_state.toggle_sidebar(),
            KeyAction::ToggleNavMenu => self.app_state.toggle_nav_menu(),
            KeyAction::CycleFocus => self.app_state.cycle_focus(),
            _ => match self.app_state.focus {
                FocusPane::Sidebar => {
                    handle_sidebar_action(&mut self.app_state, action, &mut self.location)
                }
                FocusPane::List | FocusPane::Search => {
                    handle_list_action(&mut self.app_state, action)
                }
            },
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Left clicks resolve against the last frame's hit map; the wheel moves
    /// the row cursor.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.app_state.help_visible = false;
            }
            return;
        }

        let menu_open = self.app_state.controller().column_menu().is_open();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let target = detect_click(&self.hit_map, mouse.column, mouse.row);
                handle_click(&mut self.app_state, target, &mut self.location);
            }
            MouseEventKind::ScrollDown if !menu_open => self.app_state.next_row(),
            MouseEventKind::ScrollUp if !menu_open => self.app_state.prev_row(),
            _ => {}
        }
    }

    /// Render the current frame and keep its click targets.
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let fragment = self.location.current();
        let styles = &self.styles;
        let mut hits = HitMap::default();

        self.terminal.draw(|frame| {
            hits = layout::render_layout(frame, state, fragment, styles);
        })?;

        self.hit_map = hits;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            location: FragmentLocation::new(),
            styles: UiStyles::default(),
            hit_map: HitMap::default(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn location(&self) -> &FragmentLocation {
        &self.location
    }

    pub(crate) fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and restores the terminal on every exit path.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, colors: ColorConfig) -> Result<(), TuiError> {
    info!(
        questions = app_state.controller().records().len(),
        colors = colors.colors_enabled(),
        "Starting TUI"
    );
    let styles = UiStyles::with_color_config(colors);

    let result = TuiApp::new(app_state, styles).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Flatten a buffer into trimmed, non-empty lines for assertions.
#[cfg(test)]
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
