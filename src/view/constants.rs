//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header bar in lines (border + content).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the sidebar when open, including its border.
pub const SIDEBAR_WIDTH: u16 = 26;

/// Height of the toolbar row (bordered search box and buttons).
pub const TOOLBAR_HEIGHT: u16 = 3;

/// Height of the column header row.
pub const TABLE_HEADER_HEIGHT: u16 = 1;

/// Height of the list footer (pager control and counter).
pub const LIST_FOOTER_HEIGHT: u16 = 1;

/// Below this terminal width the header navigation collapses behind `n`.
pub const NAV_COLLAPSE_WIDTH: u16 = 100;

/// Width of the `[x] ` checkbox cell.
pub const CHECKBOX_WIDTH: u16 = 4;

/// Fixed widths of the optional columns.
pub const OWNER_COLUMN_WIDTH: u16 = 12;
/// Type column width.
pub const TYPE_COLUMN_WIDTH: u16 = 12;
/// Marks column width.
pub const MARKS_COLUMN_WIDTH: u16 = 7;
/// Actions column width.
pub const ACTIONS_COLUMN_WIDTH: u16 = 15;

/// Width of the Questions column when other columns take the remaining space.
pub const MIN_QUESTION_COLUMN_WIDTH: u16 = 20;

/// Indent for answer lines under an expanded row.
pub const ANSWER_INDENT: u16 = 6;

/// Width of the search box in the toolbar.
pub const SEARCH_BOX_WIDTH: u16 = 32;

/// View (column visibility) menu popup size.
pub const VIEW_MENU_WIDTH: u16 = 24;
/// View menu popup height: five entries, a gap, Apply and borders.
pub const VIEW_MENU_HEIGHT: u16 = 9;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
