//! Core error types.

use thiserror::Error;

/// Errors raised by listing state and layout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    /// Pages are 1-indexed.
    #[error("Invalid page: {0} (pages start at 1)")]
    InvalidPage(u32),

    /// Page size must be positive.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(u32),

    /// Column count must be positive.
    #[error("Invalid column count: {0}")]
    InvalidColumnCount(usize),

    /// Sort token not recognized.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),
}
