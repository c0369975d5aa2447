//! Fixed-size page slicing for ordered sequences.
//!
//! # Invariants
//! - Pages are 1-indexed.
//! - Out-of-range pages never panic; they yield an empty slice.
//! - Callers reset to page 1 whenever the underlying sequence changes
//!   (new filter result, add, edit, conversion). The slicer keeps no state.

/// Page size used by both console tables.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Number of pages needed for `total_items`; `0` when there are no items.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Returns `[(page - 1) * per_page, page * per_page)` clipped to `items`.
pub fn paginate<T>(items: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    if current_page == 0 || items_per_page == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(items_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}

/// Inclusive 1-based range shown as "Showing {from} to {to} of {total}".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

/// One page of an ordered sequence plus navigation metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn new(all: &'a [T], current_page: usize, items_per_page: usize) -> Self {
        Self {
            items: paginate(all, current_page, items_per_page),
            current_page,
            items_per_page,
            total_items: all.len(),
            total_pages: total_pages(all.len(), items_per_page),
        }
    }

    /// Pagination controls are hidden for a single page or none.
    pub fn needs_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `None` when this page is empty.
    pub fn summary(&self) -> Option<PageSummary> {
        if self.items.is_empty() {
            return None;
        }
        let from = (self.current_page - 1) * self.items_per_page + 1;
        Some(PageSummary {
            from,
            to: from + self.items.len() - 1,
            total: self.total_items,
        })
    }
}
