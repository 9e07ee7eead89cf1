//! Search module.
//!
//! Contains the listing query state, fetch mode selection, client-side
//! sorting and pagination.

mod query;
mod results;
mod sort;

pub use query::{CategoryFilter, FetchMode, QueryState, DEFAULT_PAGE_SIZE};
pub use results::{local_page, PageWindow, Pagination, ResultSet};
pub use sort::{sort_products, SortOption, TitleCollator};
