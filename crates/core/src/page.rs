//! Pagination primitives shared by every listing operation.
//!
//! Pages are 1-indexed. Requests are clamped so a zero page or page size can
//! never divide by zero or underflow the offset; a page past the end of the
//! data is answered with an empty item list and unchanged totals.

use serde::Serialize;

/// Default number of items per page when the caller does not say.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A validated page request: 1-indexed page number plus page size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Build a request, clamping both fields to at least 1.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// First page at the default size.
    pub fn first() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of items skipped before this page starts.
    ///
    /// Saturating: an absurdly large page number lands past the end of any
    /// data, which already answers as an empty page with intact totals.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of results plus the totals the caller needs to render paging
/// controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Slice an already-filtered, already-ordered vector into one page.
    ///
    /// `total` counts the whole input, not the slice; `total_pages` is the
    /// ceiling division of total by page size (0 for empty input).
    pub fn from_vec(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len();
        let total_pages = total.div_ceil(request.page_size());
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.page_size())
            .collect();
        Self {
            items,
            total,
            page: request.page(),
            page_size: request.page_size(),
            total_pages,
        }
    }

    /// Transform the items while keeping the paging envelope intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
