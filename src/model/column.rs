//! Question list columns and their visibility.

use std::fmt;
use std::str::FromStr;

/// A column of the question list.
///
/// The set is closed; [`ColumnVisibility`] stores one flag per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Question text (truncated unless expanded).
    Questions,
    /// Record owner, `-` when absent.
    Owner,
    /// Question type label.
    Type,
    /// Marks awarded.
    Marks,
    /// Inert `Edit | Delete` hint.
    Actions,
}

impl Column {
    /// All columns in menu order.
    pub const ALL: [Column; 5] = [
        Column::Questions,
        Column::Owner,
        Column::Type,
        Column::Marks,
        Column::Actions,
    ];

    /// Stable key used by configuration and intents.
    pub fn key(self) -> &'static str {
        match self {
            Column::Questions => "questions",
            Column::Owner => "owner",
            Column::Type => "type",
            Column::Marks => "marks",
            Column::Actions => "actions",
        }
    }

    /// Label shown in the view-options menu and the header row.
    pub fn label(self) -> &'static str {
        match self {
            Column::Questions => "Questions",
            Column::Owner => "Owner",
            Column::Type => "Type",
            Column::Marks => "Marks",
            Column::Actions => "Actions",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for column keys outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown column key: {0}")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownColumn(s.to_string()))
    }
}

// ===== ColumnVisibility =====

/// Per-column visibility flags.
///
/// Default: only the Questions column is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnVisibility {
    /// Questions column.
    pub questions: bool,
    /// Owner column.
    pub owner: bool,
    /// Type column.
    pub kind: bool,
    /// Marks column.
    pub marks: bool,
    /// Actions column.
    pub actions: bool,
}

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self {
            questions: true,
            owner: false,
            kind: false,
            marks: false,
            actions: false,
        }
    }
}

impl ColumnVisibility {
    /// Whether `column` is currently shown.
    pub fn is_visible(&self, column: Column) -> bool {
        match column {
            Column::Questions => self.questions,
            Column::Owner => self.owner,
            Column::Type => self.kind,
            Column::Marks => self.marks,
            Column::Actions => self.actions,
        }
    }

    fn flag_mut(&mut self, column: Column) -> &mut bool {
        match column {
            Column::Questions => &mut self.questions,
            Column::Owner => &mut self.owner,
            Column::Type => &mut self.kind,
            Column::Marks => &mut self.marks,
            Column::Actions => &mut self.actions,
        }
    }

    /// Show or hide one column.
    pub fn set(&mut self, column: Column, visible: bool) {
        *self.flag_mut(column) = visible;
    }

    /// Flip one column's flag. Other columns are untouched.
    pub fn toggle(&mut self, column: Column) {
        let flag = self.flag_mut(column);
        *flag = !*flag;
    }

    /// Visible columns in menu order.
    pub fn visible_columns(&self) -> impl Iterator<Item = Column> + '_ {
        Column::ALL.into_iter().filter(|c| self.is_visible(*c))
    }
}
