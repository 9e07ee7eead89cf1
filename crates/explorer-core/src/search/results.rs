//! Result sets and pagination.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductsPage};

/// Products returned for the active fetch mode.
///
/// `total` is the upstream match count. For the paginated listing `items`
/// holds one page; for category and search modes it holds every match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResultSet {
    pub items: Vec<Product>,
    pub total: u64,
}

impl ResultSet {
    pub fn new(items: Vec<Product>, total: u64) -> Self {
        Self { items, total }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl From<ProductsPage> for ResultSet {
    fn from(page: ProductsPage) -> Self {
        Self {
            items: page.products,
            total: page.total,
        }
    }
}

/// Slice one page out of a fully fetched list.
///
/// Returns `items[(page-1)*page_size .. page*page_size]`, clamped to the
/// list. A page past the end yields an empty slice.
pub fn local_page<T>(items: &[T], page: u32, page_size: u32) -> &[T] {
    let page_size = page_size as usize;
    let start = (page.max(1) as usize - 1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total number of matches upstream.
    pub total: u64,
    /// `ceil(total / page_size)`.
    pub total_pages: u32,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

/// Page buttons to render, plus whether an ellipsis follows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    pub trailing_ellipsis: bool,
}

impl Pagination {
    /// Maximum number of page buttons.
    pub const WINDOW: u32 = 5;

    /// Create pagination info.
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(u64::from(page_size));
        let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Whether the pagination control should be shown at all.
    pub fn is_paginated(&self) -> bool {
        self.total_pages > 1
    }

    /// Page numbers for display, centred on the current page where possible.
    pub fn page_window(&self) -> PageWindow {
        let count = self.total_pages.min(Self::WINDOW);
        let first = if self.total_pages <= Self::WINDOW || self.page <= 3 {
            1
        } else if self.page >= self.total_pages - 2 {
            self.total_pages - 4
        } else {
            self.page - 2
        };

        PageWindow {
            pages: (first..first + count).collect(),
            trailing_ellipsis: self.total_pages > Self::WINDOW
                && self.page < self.total_pages - 2,
        }
    }

    /// Get start item number (1-indexed), 0 when there are no items.
    pub fn start_item(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            (u64::from(self.page) - 1) * u64::from(self.page_size) + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.page_size)).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, super::DEFAULT_PAGE_SIZE, 0)
    }
}
