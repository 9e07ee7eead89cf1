//! HTTP client for the Product Explorer catalog API.
//!
//! This crate provides:
//! - `CatalogApi` - The five catalog operations as an async trait
//! - `HttpCatalogClient` - `CatalogApi` over HTTP
//! - `Endpoint` - URL construction for each operation
//! - `TimeoutConfig` - Connect/total timeouts
//!
//! # Example
//!
//! ```rust,ignore
//! use explorer_data::{CatalogApi, HttpCatalogClient, DEFAULT_BASE_URL};
//!
//! let client = HttpCatalogClient::new(DEFAULT_BASE_URL)?;
//! let page = client.list_products(8, 0).await?;
//! println!("{} of {} products", page.products.len(), page.total);
//! ```

mod client;
mod endpoint;
mod error;
mod timeout;

pub use client::{CatalogApi, HttpCatalogClient, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use error::FetchError;
pub use timeout::TimeoutConfig;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogApi, FetchError, HttpCatalogClient};
}
