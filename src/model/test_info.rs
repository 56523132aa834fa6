//! Static test metadata shown in the header and sidebar.

/// Marker color of a sidebar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionColor {
    /// Red bullet.
    Red,
    /// Blue bullet.
    Blue,
}

/// A sidebar section entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    label: String,
    marker: Option<SectionColor>,
}

impl SectionEntry {
    /// Create a section with an optional colored marker.
    pub fn new(label: impl Into<String>, marker: Option<SectionColor>) -> Self {
        Self {
            label: label.into(),
            marker,
        }
    }

    /// Display label, e.g. `Section 1`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Marker color, if the section has one.
    pub fn marker(&self) -> Option<SectionColor> {
        self.marker
    }
}

/// One `label : (value)` line of the TEST INFORMATION block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem {
    /// Left-hand label.
    pub label: String,
    /// Value shown in parentheses.
    pub value: String,
}

impl InfoItem {
    /// Create an info line.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Static description of the test whose questions are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInfo {
    /// Title of the question panel.
    pub title: String,
    /// Sidebar SECTIONS entries, in display order.
    pub sections: Vec<SectionEntry>,
    /// TEST INFORMATION lines.
    pub info: Vec<InfoItem>,
}

impl Default for TestInfo {
    fn default() -> Self {
        Self {
            title: "Test 1 Questions".to_string(),
            sections: vec![
                SectionEntry::new("New Section", None),
                SectionEntry::new("Section 1", Some(SectionColor::Red)),
                SectionEntry::new("Section 2", Some(SectionColor::Blue)),
                SectionEntry::new("Uncategorized (5)", None),
            ],
            info: vec![
                InfoItem::new("Marks", "10"),
                InfoItem::new("No. of Q", "10"),
                InfoItem::new("Neg", "10"),
                InfoItem::new("Duration", "10"),
            ],
        }
    }
}

/// Header navigation entries, in display order.
pub const NAV_ENTRIES: [&str; 5] = ["Dashboard", "Tests", "Question Banks", "Classes", "Teachers"];

/// Index of the active navigation entry (`Tests`).
pub const ACTIVE_NAV_ENTRY: usize = 1;
