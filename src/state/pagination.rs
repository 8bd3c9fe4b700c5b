//! Pagination engine.
//!
//! Derives the page count and the visible window from the length of the
//! canonical list and the current page. Page numbers are 1-based. The window
//! is recomputed from scratch after every change, never patched.
//!
//! # Shrink rules
//!
//! Deleting rows can leave the current page past the end. Two rules pull the
//! page back, both evaluated on the window as it was *before* the removal:
//!
//! - single delete: step back iff the page held exactly one row, that row was
//!   not the first row overall, and the page was the last page
//! - bulk delete: step back iff the page was the last page and not page 1
//!
//! Whatever the rules leave behind, [`Pagination::recompute`] clamps the page
//! into `1..=total_pages`.

use std::ops::Range;

/// Rows per page. Fixed.
pub const PAGE_SIZE: usize = 10;

// ===== PageWindow =====

/// Inclusive index range of the rows shown on the current page.
///
/// `end` is `None` when there is nothing to show (empty list, or a page past
/// the end before it is clamped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    start: usize,
    end: Option<usize>,
}

impl PageWindow {
    /// Index of the first row on the page.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index of the last row on the page, inclusive.
    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        self.end.map_or(0, |end| end + 1 - self.start)
    }

    /// Whether the window shows no rows.
    pub fn is_empty(&self) -> bool {
        self.end.is_none()
    }

    /// Half-open range for slicing the canonical list.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len()
    }

    /// Whether the page holds exactly one row.
    pub fn is_single_row(&self) -> bool {
        self.end == Some(self.start)
    }
}

// ===== Pure helpers =====

/// Page count for `visible` rows. Never less than 1.
pub fn total_pages(visible: usize) -> usize {
    visible.div_ceil(PAGE_SIZE).max(1)
}

/// Window for `page` over `visible` rows.
///
/// `page` 0 is treated as page 1.
pub fn window(visible: usize, page: usize) -> PageWindow {
    let start = (page.max(1) - 1) * PAGE_SIZE;
    let end = visible
        .checked_sub(1)
        .map(|last_row| (start + PAGE_SIZE - 1).min(last_row))
        .filter(|end| *end >= start);
    PageWindow { start, end }
}

/// Pad the rows of a window with `None` up to exactly [`PAGE_SIZE`] slots.
///
/// Rows beyond `PAGE_SIZE` are dropped. Placeholders render as empty rows so
/// the table keeps a constant height.
pub fn pad_to_page_size<T>(rows: &[T]) -> Vec<Option<&T>> {
    rows.iter()
        .take(PAGE_SIZE)
        .map(Some)
        .chain(std::iter::repeat(None))
        .take(PAGE_SIZE)
        .collect()
}

// ===== Pagination =====

/// Current page plus the derived count and window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    visible: usize,
    window: PageWindow,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    /// Page 1 of an empty list.
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            visible: 0,
            window: window(0, 1),
        }
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page count as of the last recompute.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Window as of the last recompute.
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Whether the current page is the last page.
    pub fn is_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Recompute count and window for a list of `visible` rows.
    ///
    /// Clamps the current page into `1..=total_pages`.
    pub fn recompute(&mut self, visible: usize) {
        self.visible = visible;
        self.total_pages = total_pages(visible);
        self.current_page = self.current_page.clamp(1, self.total_pages);
        self.window = window(visible, self.current_page);
    }

    /// Advance by `step` pages.
    ///
    /// Refuses the whole step when it would pass the last page. Returns
    /// whether the page changed.
    pub fn next(&mut self, step: usize) -> bool {
        let target = self.current_page + step;
        if step == 0 || target > self.total_pages {
            return false;
        }
        self.current_page = target;
        self.window = window(self.visible, target);
        true
    }

    /// Go back by `step` pages.
    ///
    /// Refuses the whole step when it would go below page 1. Returns whether
    /// the page changed.
    pub fn prev(&mut self, step: usize) -> bool {
        match self.current_page.checked_sub(step) {
            Some(target) if step > 0 && target >= 1 => {
                self.current_page = target;
                self.window = window(self.visible, target);
                true
            }
            _ => false,
        }
    }

    /// Jump to page `n`.
    ///
    /// Precondition: `1 <= n <= total_pages`. Driven by page bubbles, one per
    /// existing page, so out-of-range input does not occur.
    pub fn select_page(&mut self, n: usize) {
        debug_assert!(
            (1..=self.total_pages).contains(&n),
            "page {n} outside 1..={}",
            self.total_pages
        );
        self.current_page = n;
        self.window = window(self.visible, n);
    }

    /// Reset to page 1.
    pub fn first_page(&mut self) {
        self.current_page = 1;
        self.window = window(self.visible, 1);
    }

    /// Single-delete shrink predicate, on the current (pre-delete) window.
    pub fn should_shrink_after_single_delete(&self) -> bool {
        self.window.is_single_row() && self.window.start() != 0 && self.is_last_page()
    }

    /// Bulk-delete shrink predicate, on the current (pre-delete) state.
    pub fn should_shrink_after_bulk_delete(&self) -> bool {
        self.is_last_page() && self.current_page != 1
    }

    /// Move back one page without going below 1.
    ///
    /// The window is refreshed on the next [`Pagination::recompute`].
    pub fn step_back(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
