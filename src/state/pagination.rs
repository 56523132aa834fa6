//! Pagination of the filtered rows ("Load More" / "Show Less").

use std::num::NonZeroUsize;

/// Default number of rows added or removed per page step.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page step size. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Smart constructor: returns None for 0.
    pub fn new(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    /// Raw value, at least 1.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_PAGE_SIZE - 1))
    }
}

/// Number of filtered rows currently rendered.
///
/// # Invariant
/// `visible_count >= page_size`. `load_more` never raises it above the
/// filtered total it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: PageSize,
    visible_count: usize,
}

impl Pagination {
    /// First page only.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            visible_count: page_size.get(),
        }
    }

    /// Rows per step.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Rows requested, before capping at the filtered total.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Rows actually rendered for a filtered total.
    pub fn shown(&self, total: usize) -> usize {
        self.visible_count.min(total)
    }

    /// `visible_count <- min(visible_count + page_size, total)`.
    ///
    /// No-op when everything is already shown.
    pub fn load_more(&mut self, total: usize) {
        if !self.can_load_more(total) {
            return;
        }
        self.visible_count = (self.visible_count + self.page_size()).min(total);
    }

    /// `visible_count <- max(page_size, visible_count - page_size)`.
    pub fn show_less(&mut self) {
        self.visible_count = self
            .visible_count
            .saturating_sub(self.page_size())
            .max(self.page_size());
    }

    /// Back to the first page. Called on every search-term change.
    pub fn reset(&mut self) {
        self.visible_count = self.page_size();
    }

    /// Whether rows remain hidden.
    pub fn can_load_more(&self, total: usize) -> bool {
        self.visible_count < total
    }

    /// Offered only once everything is loaded and there is more than one page.
    pub fn can_show_less(&self, total: usize) -> bool {
        !self.can_load_more(total) && total > self.page_size()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
