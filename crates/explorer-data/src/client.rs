//! Catalog API client.

use async_trait::async_trait;
use explorer_core::catalog::{sanitize_categories, Product, ProductsPage};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::endpoint::Endpoint;
use crate::timeout::TimeoutConfig;
use crate::FetchError;

/// Default catalog API host.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// The catalog API as seen by the listing and detail controllers.
///
/// Implementations must not retry: a failed call is reported once.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// One page of the unfiltered listing.
    async fn list_products(&self, limit: u32, skip: u64) -> Result<ProductsPage, FetchError>;

    /// A single product.
    async fn product(&self, id: u64) -> Result<Product, FetchError>;

    /// Every product in a category.
    async fn products_by_category(&self, slug: &str) -> Result<ProductsPage, FetchError>;

    /// Category tags, with non-string and empty entries removed.
    async fn categories(&self) -> Result<Vec<String>, FetchError>;

    /// Every product matching a free-text query.
    async fn search_products(&self, query: &str) -> Result<ProductsPage, FetchError>;
}

/// `CatalogApi` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Create a client with default timeouts.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_timeouts(base_url, TimeoutConfig::default())
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(base_url: &str, timeouts: TimeoutConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.total)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, FetchError> {
        let url = endpoint.url(&self.base_url)?;
        debug!(endpoint = endpoint.name(), url = %url, "catalog request");

        let response = self
            .http
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_products(&self, limit: u32, skip: u64) -> Result<ProductsPage, FetchError> {
        self.get_json(Endpoint::ListProducts { limit, skip }).await
    }

    async fn product(&self, id: u64) -> Result<Product, FetchError> {
        self.get_json(Endpoint::Product { id }).await
    }

    async fn products_by_category(&self, slug: &str) -> Result<ProductsPage, FetchError> {
        self.get_json(Endpoint::Category { slug }).await
    }

    async fn categories(&self) -> Result<Vec<String>, FetchError> {
        let raw: Vec<serde_json::Value> = self.get_json(Endpoint::Categories).await?;
        Ok(sanitize_categories(raw))
    }

    async fn search_products(&self, query: &str) -> Result<ProductsPage, FetchError> {
        self.get_json(Endpoint::Search { query }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unparsable_base() {
        let err = HttpCatalogClient::new("not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = HttpCatalogClient::new("mailto:shop@example.com").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_keeps_base_url() {
        let client = HttpCatalogClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.base_url().as_str(), "https://dummyjson.com/");
    }
}
