//! Listing controller.

use std::sync::Arc;
use std::time::Duration;

use explorer_core::catalog::Product;
use explorer_core::layout::column_count_for_width;
use explorer_core::notify::{Notification, NotificationQueue};
use explorer_core::search::{
    local_page, sort_products, CategoryFilter, FetchMode, Pagination, QueryState, ResultSet,
    SortOption, DEFAULT_PAGE_SIZE,
};
use explorer_core::ExplorerError;
use explorer_data::{CatalogApi, FetchError};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use crate::orchestrator::QueryOrchestrator;

/// Shown when a listing fetch fails.
pub const LOAD_PRODUCTS_FAILED: &str = "Failed to load products. Please try again.";

/// Listing controller settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingConfig {
    /// Items per page.
    pub page_size: u32,
    /// Search quiescence window.
    pub debounce: Duration,
    /// Initial sort.
    pub sort: SortOption,
    /// Initial viewport width in pixels.
    pub viewport_width: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            sort: SortOption::default(),
            viewport_width: 1280,
        }
    }
}

/// What happened to one fetch once it reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Current result, now displayed.
    Updated,
    /// Current fetch failed; a notification was queued.
    Failed,
    /// Superseded by a newer state; discarded.
    Stale,
    /// Debounce window was cut short; no request was sent.
    Cancelled,
}

#[derive(Debug)]
enum FetchEvent {
    Cancelled {
        generation: u64,
    },
    Completed {
        generation: u64,
        mode: FetchMode,
        result: Result<ResultSet, FetchError>,
    },
    /// The fetch task ended without reporting, e.g. it panicked.
    Lost {
        generation: u64,
    },
}

/// Reports exactly one event per spawned fetch. Dropping it unsent reports
/// [`FetchEvent::Lost`].
struct Reporter {
    generation: u64,
    events: Option<mpsc::UnboundedSender<FetchEvent>>,
}

impl Reporter {
    fn new(generation: u64, events: mpsc::UnboundedSender<FetchEvent>) -> Self {
        Self {
            generation,
            events: Some(events),
        }
    }

    fn send(mut self, event: FetchEvent) {
        if let Some(events) = self.events.take() {
            let _ = events.send(event);
        }
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        if let Some(events) = self.events.take() {
            let _ = events.send(FetchEvent::Lost {
                generation: self.generation,
            });
        }
    }
}

/// Owns the listing view: query state, sort, results, loading flag,
/// categories and notifications.
///
/// Every state change that affects the upstream query bumps a generation
/// counter and spawns a fetch tagged with it. A fetch result is applied only
/// if its generation is still the latest.
pub struct ListingController<A> {
    orchestrator: Arc<QueryOrchestrator<A>>,
    state: QueryState,
    sort: SortOption,
    results: ResultSet,
    loading: bool,
    categories: Vec<String>,
    categories_loaded: bool,
    notifications: NotificationQueue,
    viewport_width: u32,
    generation: u64,
    in_flight: usize,
    debouncer: Debouncer,
    events_tx: mpsc::UnboundedSender<FetchEvent>,
    events_rx: mpsc::UnboundedReceiver<FetchEvent>,
}

impl<A: CatalogApi + 'static> ListingController<A> {
    /// Create a controller. No fetch is issued until [`start`](Self::start).
    pub fn new(api: Arc<A>, config: ListingConfig) -> Result<Self, ExplorerError> {
        let state = QueryState::new().with_page_size(config.page_size)?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            orchestrator: Arc::new(QueryOrchestrator::new(api)),
            state,
            sort: config.sort,
            results: ResultSet::default(),
            loading: false,
            categories: Vec::new(),
            categories_loaded: false,
            notifications: NotificationQueue::new(),
            viewport_width: config.viewport_width,
            generation: 0,
            in_flight: 0,
            debouncer: Debouncer::new(config.debounce),
            events_tx,
            events_rx,
        })
    }

    /// Issue the initial fetch for the default state.
    pub fn start(&mut self) {
        self.refresh();
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Take all queued notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    /// Set the search text. Fetches after the debounce window if it changed.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        if self.state.set_search_query(query) {
            self.refresh();
        }
    }

    /// Set the category filter. Fetches if it changed.
    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        if self.state.set_category(category) {
            self.refresh();
        }
    }

    /// Jump to a page (1-indexed). Fetches if it changed.
    pub fn set_page(&mut self, page: u32) -> Result<(), ExplorerError> {
        if self.state.set_page(page)? {
            self.refresh();
        }
        Ok(())
    }

    /// Replace the whole query state and fetch for it, e.g. when a view
    /// opens on a state given up front.
    pub fn navigate(&mut self, state: QueryState) {
        self.state = state;
        self.refresh();
    }

    /// Go to the next page if there is one.
    pub fn next_page(&mut self) -> bool {
        let pagination = self.pagination();
        if !pagination.has_next {
            return false;
        }
        self.set_page(pagination.page + 1).is_ok()
    }

    /// Go to the previous page if there is one.
    pub fn prev_page(&mut self) -> bool {
        let pagination = self.pagination();
        if !pagination.has_prev {
            return false;
        }
        self.set_page(pagination.page - 1).is_ok()
    }

    /// Change the sort. Never fetches.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    /// Grid columns for the last reported viewport width.
    pub fn column_count(&self) -> usize {
        column_count_for_width(self.viewport_width)
    }

    /// Fetch for the current state, superseding anything outstanding.
    ///
    /// Must be called from within a tokio runtime.
    pub fn refresh(&mut self) {
        self.generation += 1;
        self.debouncer.cancel();

        let generation = self.generation;
        let mode = self.state.mode();
        let wait = mode.is_debounced().then(|| self.debouncer.restart());

        debug!(generation, mode = mode.name(), debounced = wait.is_some(), "listing refresh");

        let orchestrator = Arc::clone(&self.orchestrator);
        let reporter = Reporter::new(generation, self.events_tx.clone());
        self.loading = true;
        self.in_flight += 1;

        tokio::spawn(async move {
            if let Some(wait) = wait {
                if !wait.await {
                    reporter.send(FetchEvent::Cancelled { generation });
                    return;
                }
            }

            let result = orchestrator.resolve(&mode).await;
            reporter.send(FetchEvent::Completed {
                generation,
                mode,
                result,
            });
        });
    }

    /// Wait for the next outstanding fetch to report back and apply it.
    ///
    /// Returns `None` when nothing is outstanding.
    pub async fn next_event(&mut self) -> Option<Applied> {
        if self.in_flight == 0 {
            return None;
        }

        let event = self.events_rx.recv().await?;
        self.in_flight -= 1;
        Some(self.apply(event))
    }

    /// Apply every outstanding fetch.
    pub async fn settle(&mut self) {
        while self.next_event().await.is_some() {}
    }

    fn apply(&mut self, event: FetchEvent) -> Applied {
        let (generation, mode, result) = match event {
            FetchEvent::Cancelled { generation } => {
                debug!(generation, "debounced fetch cancelled");
                return Applied::Cancelled;
            }
            FetchEvent::Lost { generation } => {
                if generation != self.generation {
                    debug!(generation, latest = self.generation, "stale listing fetch ended without a result");
                    return Applied::Stale;
                }
                error!(generation, "listing fetch ended without a result");
                self.loading = false;
                self.notifications.push(Notification::error(LOAD_PRODUCTS_FAILED));
                return Applied::Failed;
            }
            FetchEvent::Completed {
                generation,
                mode,
                result,
            } => (generation, mode, result),
        };

        if generation != self.generation {
            debug!(
                generation,
                latest = self.generation,
                mode = mode.name(),
                ok = result.is_ok(),
                "discarding stale listing response"
            );
            return Applied::Stale;
        }

        self.loading = false;
        match result {
            Ok(results) => {
                debug!(generation, items = results.len(), total = results.total, "listing updated");
                self.results = results;
                Applied::Updated
            }
            Err(e) => {
                error!(generation, mode = mode.name(), error = %e, "failed to load products");
                self.notifications.push(Notification::error(LOAD_PRODUCTS_FAILED));
                Applied::Failed
            }
        }
    }

    /// Load the category tags once. Failures are logged and leave the list
    /// empty.
    pub async fn load_categories(&mut self) -> &[String] {
        if !self.categories_loaded {
            self.categories_loaded = true;
            match self.orchestrator.api().categories().await {
                Ok(categories) => self.categories = categories,
                Err(e) => warn!(error = %e, "failed to load categories"),
            }
        }
        &self.categories
    }

    /// Products to render: sorted, and re-paginated locally in search mode.
    pub fn visible_products(&self) -> Vec<Product> {
        let mut items = self.results.items.clone();
        sort_products(&mut items, self.sort);

        if self.state.mode().is_search() {
            local_page(&items, self.state.page(), self.state.page_size()).to_vec()
        } else {
            items
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.state.page(), self.state.page_size(), self.results.total)
    }

    /// Whether the "no products" state should be shown.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.visible_products().is_empty()
    }
}
