//! Upstream query selection.

use std::sync::Arc;

use explorer_core::search::{FetchMode, QueryState, ResultSet};
use explorer_data::{CatalogApi, FetchError};
use tracing::debug;

/// Issues the one upstream query a fetch mode calls for and normalizes the
/// response into a [`ResultSet`].
#[derive(Debug)]
pub struct QueryOrchestrator<A> {
    api: Arc<A>,
}

impl<A: CatalogApi> QueryOrchestrator<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Resolve the query for a state.
    pub async fn resolve_state(&self, state: &QueryState) -> Result<ResultSet, FetchError> {
        self.resolve(&state.mode()).await
    }

    /// Resolve the query for a fetch mode.
    pub async fn resolve(&self, mode: &FetchMode) -> Result<ResultSet, FetchError> {
        debug!(mode = mode.name(), "resolving listing query");

        let page = match mode {
            FetchMode::Search { query } => self.api.search_products(query).await?,
            FetchMode::Category { slug } => self.api.products_by_category(slug).await?,
            FetchMode::Paginated { limit, skip } => self.api.list_products(*limit, *skip).await?,
        };

        Ok(ResultSet::from(page))
    }
}
