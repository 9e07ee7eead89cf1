//! Catalog domain types and listing logic for Product Explorer.
//!
//! This crate is free of I/O. It provides:
//!
//! - **Catalog**: products as returned by the upstream API, category labels
//! - **Search**: query state, fetch mode selection, sorting, pagination
//! - **Layout**: viewport breakpoints and the full-row/remainder partition
//! - **Detail**: per-view selection state for a single product
//! - **Notify**: the per-view notification queue
//!
//! # Example
//!
//! ```rust
//! use explorer_core::prelude::*;
//!
//! let mut state = QueryState::default();
//! state.set_page(3).unwrap();
//! assert_eq!(state.mode(), FetchMode::Paginated { limit: 8, skip: 16 });
//!
//! // Searching wins over everything else and resets the page.
//! state.set_search_query("  phone ");
//! assert_eq!(state.page(), 1);
//! assert_eq!(state.mode(), FetchMode::Search { query: "phone".to_string() });
//! ```

pub mod error;

pub mod catalog;
pub mod detail;
pub mod layout;
pub mod notify;
pub mod search;

pub use error::ExplorerError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ExplorerError;

    // Catalog
    pub use crate::catalog::{category_label, sanitize_categories, Product, ProductsPage};

    // Search
    pub use crate::search::{
        local_page, sort_products, CategoryFilter, FetchMode, Pagination, PageWindow,
        QueryState, ResultSet, SortOption, DEFAULT_PAGE_SIZE,
    };

    // Layout
    pub use crate::layout::{column_count_for_width, partition, RowPartition};

    // Detail / notifications
    pub use crate::detail::ProductDetail;
    pub use crate::notify::{Notification, NotificationQueue, Variant};
}
