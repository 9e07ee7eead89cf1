//! In-memory `CatalogApi` for controller tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use explorer_core::catalog::{Product, ProductsPage};
use explorer_data::{CatalogApi, FetchError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    List { limit: u32, skip: u64 },
    Product(u64),
    Category(String),
    Categories,
    Search(String),
}

pub fn item(id: u64, category: &str) -> Product {
    Product {
        id,
        title: format!("Item {id:02}"),
        description: String::new(),
        category: category.to_string(),
        price: 100.0 - id as f64,
        discount_percentage: 0.0,
        rating: 4.0,
        stock: 5,
        brand: "Acme".to_string(),
        thumbnail: format!("https://cdn.example.com/{id}/thumb.png"),
        images: vec![format!("https://cdn.example.com/{id}/1.png")],
    }
}

/// Records every call. Odd ids are "beauty", even ids are "groceries".
pub struct FakeCatalog {
    items: Vec<Product>,
    calls: Mutex<Vec<Call>>,
    failing: AtomicBool,
    categories_failing: AtomicBool,
    panics: Mutex<HashSet<Call>>,
    delays: Mutex<HashMap<Call, Duration>>,
}

impl FakeCatalog {
    pub fn with_items(count: u64) -> Self {
        let items = (1..=count)
            .map(|id| item(id, if id % 2 == 1 { "beauty" } else { "groceries" }))
            .collect();

        Self {
            items,
            calls: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            categories_failing: AtomicBool::new(false),
            panics: Mutex::new(HashSet::new()),
            delays: Mutex::new(HashMap::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_categories_failing(&self, failing: bool) {
        self.categories_failing.store(failing, Ordering::SeqCst);
    }

    /// Panic instead of answering one specific call.
    pub fn panic_on(&self, call: Call) {
        self.panics.lock().unwrap().insert(call);
    }

    /// Delay the response to one specific call.
    pub fn delay(&self, call: Call, by: Duration) {
        self.delays.lock().unwrap().insert(call, by);
    }

    async fn record(&self, call: Call) -> Result<(), FetchError> {
        self.calls.lock().unwrap().push(call.clone());

        let delay = self.delays.lock().unwrap().get(&call).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let panics = self.panics.lock().unwrap().contains(&call);
        if panics {
            panic!("catalog fake panicked on {call:?}");
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::Request("connection reset".to_string()));
        }
        Ok(())
    }

    fn page(products: Vec<Product>) -> ProductsPage {
        let total = products.len() as u64;
        ProductsPage {
            limit: total,
            products,
            total,
            skip: 0,
        }
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn list_products(&self, limit: u32, skip: u64) -> Result<ProductsPage, FetchError> {
        self.record(Call::List { limit, skip }).await?;

        let products = self
            .items
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(ProductsPage {
            products,
            total: self.items.len() as u64,
            skip,
            limit: u64::from(limit),
        })
    }

    async fn product(&self, id: u64) -> Result<Product, FetchError> {
        self.record(Call::Product(id)).await?;

        self.items
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::Http {
                status: 404,
                url: format!("/products/{id}"),
            })
    }

    async fn products_by_category(&self, slug: &str) -> Result<ProductsPage, FetchError> {
        self.record(Call::Category(slug.to_string())).await?;

        let products = self.items.iter().filter(|p| p.category == slug).cloned().collect();
        Ok(Self::page(products))
    }

    async fn categories(&self) -> Result<Vec<String>, FetchError> {
        self.calls.lock().unwrap().push(Call::Categories);
        if self.categories_failing.load(Ordering::SeqCst) {
            return Err(FetchError::Timeout("categories".to_string()));
        }
        Ok(vec!["beauty".to_string(), "groceries".to_string()])
    }

    async fn search_products(&self, query: &str) -> Result<ProductsPage, FetchError> {
        self.record(Call::Search(query.to_string())).await?;

        let needle = query.to_lowercase();
        let products = self
            .items
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(Self::page(products))
    }
}
