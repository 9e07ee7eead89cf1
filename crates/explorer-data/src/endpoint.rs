//! Catalog API endpoints.

use url::Url;

use crate::FetchError;

/// The five operations exposed by the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `GET /products?limit=L&skip=S`
    ListProducts { limit: u32, skip: u64 },
    /// `GET /products/{id}`
    Product { id: u64 },
    /// `GET /products/category/{slug}`
    Category { slug: &'a str },
    /// `GET /products/categories`
    Categories,
    /// `GET /products/search?q=Q`
    Search { query: &'a str },
}

impl Endpoint<'_> {
    /// Name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::ListProducts { .. } => "list_products",
            Endpoint::Product { .. } => "product",
            Endpoint::Category { .. } => "category",
            Endpoint::Categories => "categories",
            Endpoint::Search { .. } => "search",
        }
    }

    /// Build the full URL below `base`, percent-encoding path segments and
    /// query values.
    pub fn url(&self, base: &Url) -> Result<Url, FetchError> {
        let mut url = base.clone();
        url.set_query(None);

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl(format!("{} cannot be a base", base)))?;
            segments.pop_if_empty().push("products");

            match self {
                Endpoint::ListProducts { .. } => {}
                Endpoint::Product { id } => {
                    segments.push(&id.to_string());
                }
                Endpoint::Category { slug } => {
                    segments.push("category").push(slug);
                }
                Endpoint::Categories => {
                    segments.push("categories");
                }
                Endpoint::Search { .. } => {
                    segments.push("search");
                }
            }
        }

        match self {
            Endpoint::ListProducts { limit, skip } => {
                url.query_pairs_mut()
                    .append_pair("limit", &limit.to_string())
                    .append_pair("skip", &skip.to_string());
            }
            Endpoint::Search { query } => {
                url.query_pairs_mut().append_pair("q", query);
            }
            _ => {}
        }

        Ok(url)
    }
}
