//! Pagination types for list endpoints.

use serde::Serialize;

use crate::config::{DEFAULT_PAGE_NUMBER, PAGE_SIZE};

/// Page selection (1-indexed, fixed page size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
}

impl PageParams {
    /// Select a page; 0 is treated as the first page
    pub fn new(page: u64) -> Self {
        Self {
            page: page.max(DEFAULT_PAGE_NUMBER),
        }
    }

    /// Parse a raw query value, falling back to the first page when the
    /// value is missing, not a number, or below 1.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .map(|p| p as u64)
            .unwrap_or(DEFAULT_PAGE_NUMBER);
        Self::new(page)
    }

    /// Rows skipped before this page; saturates for absurdly large pages
    pub fn offset(&self) -> u64 {
        self.index().saturating_mul(self.limit())
    }

    /// Rows per page
    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }

    /// Zero-based page index as used by the ORM paginator
    pub fn index(&self) -> u64 {
        self.page.saturating_sub(1)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER)
    }
}

/// One page of results plus totals over the whole filtered set
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u64,
}

impl<T> Paginated<T> {
    /// Create a page; `total_pages` is `ceil(total / per_page)`
    pub fn new(items: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };

        Self {
            items,
            total,
            total_pages,
            page,
        }
    }
}
