//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Fixed vim-style bindings. The config file's `[keybindings]` table is
/// accepted but not applied.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Row navigation
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::NextRow);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::PrevRow);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::NextRow);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::PrevRow);

        // Row interaction
        bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::ToggleSelect);
        bind(KeyCode::Char('a'), KeyModifiers::NONE, KeyAction::ToggleSelectAll);
        bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::ToggleExpand);
        bind(KeyCode::Char('f'), KeyModifiers::NONE, KeyAction::ToggleFullView);

        // Pagination. Terminals disagree on whether Shift is reported with
        // an uppercase char, so bind both forms.
        bind(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::LoadMore);
        bind(KeyCode::Char('M'), KeyModifiers::SHIFT, KeyAction::ShowLess);
        bind(KeyCode::Char('M'), KeyModifiers::NONE, KeyAction::ShowLess);

        // Search
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Cancel);

        // View options and chrome
        bind(KeyCode::Char('v'), KeyModifiers::NONE, KeyAction::ToggleViewMenu);
        bind(KeyCode::Char('b'), KeyModifiers::NONE, KeyAction::ToggleSidebar);
        bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::ToggleNavMenu);
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::CycleFocus);

        // Application controls
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);

        Self { bindings }
    }
}
