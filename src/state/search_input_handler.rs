//! Search input handling (pure state transitions).
//!
//! Edits the search box text. All functions are pure - no side effects,
//! testable without TUI. The caller pushes the resulting query into the
//! controller, which re-filters on every keystroke.

use crate::state::SearchInput;

/// Insert the character at the cursor position and advance the cursor.
pub fn handle_char_input(mut input: SearchInput, ch: char) -> SearchInput {
    let offset = input.byte_offset(input.cursor);
    input.query.insert(offset, ch);
    input.cursor += 1;
    input
}

/// Delete the character before the cursor if the cursor is not at 0.
pub fn handle_backspace(mut input: SearchInput) -> SearchInput {
    if input.cursor == 0 {
        return input;
    }
    let offset = input.byte_offset(input.cursor - 1);
    input.query.remove(offset);
    input.cursor -= 1;
    input
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(mut input: SearchInput) -> SearchInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
pub fn handle_cursor_right(mut input: SearchInput) -> SearchInput {
    input.cursor = (input.cursor + 1).min(input.char_len());
    input
}

/// Clear the query entirely.
pub fn clear_input(_input: SearchInput) -> SearchInput {
    SearchInput::default()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
