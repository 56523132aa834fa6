//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod column;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod question;
pub mod test_info;

// Re-export for convenience
pub use column::{Column, ColumnVisibility, UnknownColumn};
pub use error::{AppError, InputError};
pub use identifiers::{InvalidQuestionId, QuestionId};
pub use key_action::KeyAction;
pub use question::{QuestionRecord, QuestionType};
pub use test_info::{InfoItem, SectionColor, SectionEntry, TestInfo, ACTIVE_NAV_ENTRY, NAV_ENTRIES};
