//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod column_menu;
pub mod controller;
pub mod expand;
pub mod list_handler;
pub mod mouse_handler;
pub mod navigation;
pub mod pagination;
pub mod search;
pub mod search_input_handler;
pub mod selection;
pub mod sidebar_handler;
pub mod view_menu_handler;
pub mod view_model;

// Re-export for convenience
pub use app_state::{AppState, FocusPane, SidebarEntry};
pub use column_menu::ColumnMenuState;
pub use controller::{ControllerOptions, QuestionListController};
pub use expand::{display_question, ExpandState, DEFAULT_TRUNCATE_AT};
pub use list_handler::handle_list_action;
pub use mouse_handler::{detect_click, handle_click, ClickTarget, HitMap, RowHit};
pub use navigation::{section_fragment, FragmentLocation, Navigator};
pub use pagination::{PageSize, Pagination, DEFAULT_PAGE_SIZE};
pub use search::{filtered, filtered_ids, filtered_indices, SearchInput};
pub use selection::Selection;
pub use sidebar_handler::{activate_sidebar_entry, handle_sidebar_action};
pub use view_menu_handler::handle_view_menu_action;
pub use view_model::{RowView, ViewModel};
