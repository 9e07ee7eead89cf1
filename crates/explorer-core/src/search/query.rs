//! Listing query state and fetch mode selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ExplorerError;

/// Products shown per page.
pub const DEFAULT_PAGE_SIZE: u32 = 8;

/// Category selection for the listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category filter.
    #[default]
    All,
    /// Filter by category slug.
    Slug(String),
}

impl CategoryFilter {
    /// Parse a category selection. `"all"` and blank input mean no filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Slug(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Slug(slug) => slug,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::parse(value)
    }
}

/// The single upstream query issued for a listing state.
///
/// Modes are mutually exclusive. Precedence is search, then category,
/// then the paginated default listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FetchMode {
    /// Free-text search. The backend returns every match in one response.
    Search { query: String },
    /// Category filter. The backend returns the whole category in one response.
    Category { slug: String },
    /// Unfiltered listing with server-side pagination.
    Paginated { limit: u32, skip: u64 },
}

impl FetchMode {
    /// Whether results must be re-paginated on the client.
    pub fn is_search(&self) -> bool {
        matches!(self, FetchMode::Search { .. })
    }

    /// Whether the fetch for this mode is debounced.
    pub fn is_debounced(&self) -> bool {
        self.is_search()
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            FetchMode::Search { .. } => "search",
            FetchMode::Category { .. } => "category",
            FetchMode::Paginated { .. } => "paginated",
        }
    }
}

/// Listing query state.
///
/// Fields are private so that changing the search text or the category
/// always resets the page to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    search_query: String,
    category: CategoryFilter,
    page: u32,
    page_size: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            category: CategoryFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// Create a default state (empty search, all categories, page 1).
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom page size.
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, ExplorerError> {
        if page_size == 0 {
            return Err(ExplorerError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Trimmed search text, if any.
    pub fn active_search(&self) -> Option<&str> {
        let trimmed = self.search_query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Set the raw search text. Returns whether the state changed.
    pub fn set_search_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.search_query {
            return false;
        }
        self.search_query = query;
        self.page = 1;
        true
    }

    /// Set the category filter. Returns whether the state changed.
    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) -> bool {
        let category = category.into();
        if category == self.category {
            return false;
        }
        self.category = category;
        self.page = 1;
        true
    }

    /// Set the current page (1-indexed). Returns whether the state changed.
    pub fn set_page(&mut self, page: u32) -> Result<bool, ExplorerError> {
        if page == 0 {
            return Err(ExplorerError::InvalidPage(page));
        }
        let changed = page != self.page;
        self.page = page;
        Ok(changed)
    }

    /// Offset of the first item on the current page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Select the upstream query for this state.
    pub fn mode(&self) -> FetchMode {
        if let Some(query) = self.active_search() {
            return FetchMode::Search {
                query: query.to_string(),
            };
        }

        if let CategoryFilter::Slug(slug) = &self.category {
            return FetchMode::Category { slug: slug.clone() };
        }

        FetchMode::Paginated {
            limit: self.page_size,
            skip: self.offset(),
        }
    }
}
