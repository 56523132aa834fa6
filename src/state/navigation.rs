//! Location-fragment navigation.
//!
//! Sidebar entries navigate by writing a fragment (`#section-1`). The
//! fragment is a write-only capability: nothing in the list controller
//! reads it back.

use tracing::debug;

/// Capability to change the current location fragment.
pub trait Navigator {
    /// Replace the current fragment. `fragment` carries no leading `#`.
    fn navigate(&mut self, fragment: &str);

    /// Current fragment, if any has been set.
    fn current(&self) -> Option<&str>;
}

/// In-process navigator that remembers the last fragment.
///
/// Used by the TUI (which shows the fragment in the header) and by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentLocation {
    fragment: Option<String>,
}

impl FragmentLocation {
    /// Location with no fragment yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for FragmentLocation {
    fn navigate(&mut self, fragment: &str) {
        debug!(fragment, "Navigating");
        self.fragment = Some(fragment.to_string());
    }

    fn current(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

/// Fragment for a sidebar label.
///
/// Lowercases, drops a trailing ` (N)` count and joins the remaining
/// words with `-`.
pub fn section_fragment(label: &str) -> String {
    let trimmed = strip_count_suffix(label.trim());
    trimmed
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// `"Uncategorized (5)"` -> `"Uncategorized"`. Anything else is returned as-is.
fn strip_count_suffix(label: &str) -> &str {
    let Some(inner) = label.strip_suffix(')') else {
        return label;
    };
    let Some(open) = inner.rfind(" (") else {
        return label;
    };
    let digits = &inner[open + 2..];
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        inner[..open].trim_end()
    } else {
        label
    }
}
