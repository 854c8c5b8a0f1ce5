//! Pagination bounds for user listings.

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// A normalized page request.
///
/// Out-of-range inputs are corrected rather than rejected: a page below 1
/// becomes 1, a non-positive size becomes the default of 10 and anything
/// above 100 is clamped to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: u64,
    page_size: u64,
}

impl Page {
    /// Normalize raw caller-supplied values.
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = if page < 1 {
            DEFAULT_PAGE_NUMBER
        } else {
            page as u64
        };

        let page_size = if page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            (page_size as u64).min(MAX_PAGE_SIZE)
        };

        Self { page, page_size }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Calculate offset for database query (capped at the largest SQL bigint)
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    /// Number of rows to fetch
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
