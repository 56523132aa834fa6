//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row navigation
    /// Move the row cursor down. Default: j/↓
    NextRow,
    /// Move the row cursor up. Default: k/↑
    PrevRow,

    // Row interaction
    /// Toggle selection of the row under the cursor. Default: Space
    ToggleSelect,
    /// Select all filtered rows, or clear if all are selected. Default: a
    ToggleSelectAll,
    /// Expand or collapse the answer of the row under the cursor. Default: Enter
    ToggleExpand,
    /// Toggle full view (every answer shown). Default: f
    ToggleFullView,

    // Pagination
    /// Show the next page of rows. Default: m
    LoadMore,
    /// Hide the last page of rows. Default: M/Shift+m
    ShowLess,

    // Search
    /// Focus the search box. Default: //Ctrl+f
    StartSearch,
    /// Close the innermost overlay or leave the search box. Default: Esc
    Cancel,

    // View options
    /// Open or close the column visibility menu. Default: v
    ToggleViewMenu,

    // Chrome
    /// Open or close the sidebar. Default: b
    ToggleSidebar,
    /// Open or close the collapsed header navigation menu. Default: n
    ToggleNavMenu,
    /// Move keyboard focus between list and sidebar. Default: Tab
    CycleFocus,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}
