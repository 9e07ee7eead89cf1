//! Product detail controller.

use std::sync::Arc;

use explorer_core::detail::ProductDetail;
use explorer_core::notify::{Notification, NotificationQueue};
use explorer_data::CatalogApi;
use tracing::{debug, error};

/// Shown when a product cannot be loaded.
pub const LOAD_DETAIL_FAILED: &str = "Failed to load product details";

/// Owns the detail view: the loaded product, its selection state and the
/// view's notifications.
pub struct DetailController<A> {
    api: Arc<A>,
    detail: Option<ProductDetail>,
    loading: bool,
    notifications: NotificationQueue,
}

impl<A: CatalogApi> DetailController<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            detail: None,
            loading: false,
            notifications: NotificationQueue::new(),
        }
    }

    /// Load a product, replacing any previous one and resetting selection.
    ///
    /// On failure a notification is queued and no product is held.
    pub async fn load(&mut self, id: u64) -> Option<&mut ProductDetail> {
        self.loading = true;
        self.detail = None;

        let result = self.api.product(id).await;
        self.loading = false;

        match result {
            Ok(product) => {
                debug!(id, title = %product.title, "product loaded");
                self.detail = Some(ProductDetail::new(product));
            }
            Err(e) => {
                error!(id, error = %e, "failed to load product");
                self.notifications.push(Notification::error(LOAD_DETAIL_FAILED));
            }
        }

        self.detail.as_mut()
    }

    pub fn detail(&self) -> Option<&ProductDetail> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut ProductDetail> {
        self.detail.as_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Queue the add-to-cart confirmation. Returns false when nothing is loaded.
    pub fn add_to_cart(&mut self) -> bool {
        match &self.detail {
            Some(detail) => {
                self.notifications.push(detail.add_to_cart());
                true
            }
            None => false,
        }
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Take all queued notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeCatalog};

    #[tokio::test]
    async fn test_load_and_select() {
        let api = Arc::new(FakeCatalog::with_items(3));
        let mut c = DetailController::new(Arc::clone(&api));

        let detail = c.load(2).await.unwrap();
        assert_eq!(detail.product().title, "Item 02");
        assert_eq!(detail.quantity(), 1);
        assert_eq!(detail.displayed_image(), "https://cdn.example.com/2/1.png");

        detail.increment();
        detail.increment();
        assert_eq!(detail.quantity(), 3);

        assert!(c.add_to_cart());
        let notifications = c.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].title, "Added to cart!");
        assert_eq!(notifications[0].description, "3 \u{00d7} Item 02 added to your cart");
        assert_eq!(api.calls(), vec![Call::Product(2)]);
    }

    #[tokio::test]
    async fn test_missing_product_notifies() {
        let api = Arc::new(FakeCatalog::with_items(3));
        let mut c = DetailController::new(api);

        c.load(1).await;
        assert!(c.load(99).await.is_none());
        assert!(c.detail().is_none());
        assert!(!c.is_loading());
        assert!(!c.add_to_cart());

        let notifications = c.take_notifications();
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].is_error());
        assert_eq!(notifications[0].description, LOAD_DETAIL_FAILED);
    }

    #[tokio::test]
    async fn test_reload_resets_selection() {
        let api = Arc::new(FakeCatalog::with_items(3));
        let mut c = DetailController::new(api);

        c.load(3).await.unwrap().increment();
        let detail = c.load(3).await.unwrap();
        assert_eq!(detail.quantity(), 1);
        assert_eq!(detail.selected_image(), 0);
    }
}
