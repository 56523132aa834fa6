//! State for the column visibility ("View") menu.

use crate::model::{Column, ColumnVisibility};
use tracing::debug;

/// Column visibility flags plus the menu that edits them.
///
/// Visibility changes are live; closing the menu never reverts them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMenuState {
    /// Whether the menu is open.
    open: bool,

    /// Highlighted row in the menu (index into `Column::ALL`).
    /// Only meaningful when `open` is true.
    cursor: usize,

    visibility: ColumnVisibility,
}

impl ColumnMenuState {
    /// Closed menu over `visibility`, cursor on the first column.
    pub fn new(visibility: ColumnVisibility) -> Self {
        Self {
            open: false,
            cursor: 0,
            visibility,
        }
    }

    /// Whether the popup is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current column flags.
    pub fn visibility(&self) -> ColumnVisibility {
        self.visibility
    }

    /// Highlighted row, an index into [`Column::ALL`].
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Column under the menu cursor.
    pub fn highlighted(&self) -> Column {
        Column::ALL[self.cursor.min(Column::ALL.len() - 1)]
    }

    /// Open the menu with the cursor on the first entry.
    pub fn open(&mut self) {
        self.open = true;
        self.cursor = 0;
    }

    /// Hide the popup. Visibility is kept.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Toggle menu visibility.
    pub fn toggle_open(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Commit button. Changes are already live, so this only dismisses.
    pub fn apply(&mut self) {
        self.close();
    }

    /// A pointer interaction landed outside the menu region.
    pub fn pointer_outside(&mut self) {
        if self.open {
            debug!("Pointer interaction outside view menu, closing");
            self.close();
        }
    }

    /// Flip one column.
    pub fn toggle(&mut self, column: Column) {
        self.visibility.toggle(column);
        debug!(column = %column, visible = self.visibility.is_visible(column), "Toggled column");
    }

    /// Flip the column named by `key`.
    ///
    /// Returns false (and changes nothing) for keys outside the column set.
    pub fn toggle_key(&mut self, key: &str) -> bool {
        match key.parse::<Column>() {
            Ok(column) => {
                self.toggle(column);
                true
            }
            Err(err) => {
                debug!("Ignoring column toggle: {}", err);
                false
            }
        }
    }

    /// Flip the column under the menu cursor.
    pub fn toggle_highlighted(&mut self) {
        self.toggle(self.highlighted());
    }

    /// Move the menu cursor up, clamping at 0.
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the menu cursor down, clamping at the last entry.
    pub fn select_next(&mut self) {
        self.cursor = (self.cursor + 1).min(Column::ALL.len() - 1);
    }
}
