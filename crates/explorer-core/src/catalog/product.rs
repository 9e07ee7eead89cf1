//! Product types as served by the catalog API.

use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once fetched. Selection state such as the
/// selected image or requested quantity lives in the owning view
/// (see [`crate::detail::ProductDetail`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,
    /// Product title.
    pub title: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Category tag (slug).
    pub category: String,
    /// Price in the catalog's currency.
    pub price: f64,
    /// Discount in percent (0-100).
    #[serde(default)]
    pub discount_percentage: f64,
    /// Rating (0.0-5.0).
    #[serde(default)]
    pub rating: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Brand name. Some products have none.
    #[serde(default)]
    pub brand: String,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Gallery image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Price after applying the discount percentage.
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount_percentage / 100.0)
    }

    /// Discount rounded to a whole percent, as shown on badges.
    pub fn discount_badge(&self) -> u32 {
        self.discount_percentage.round().clamp(0.0, 100.0) as u32
    }

    /// Check if a discount badge should be shown.
    pub fn has_discount(&self) -> bool {
        self.discount_badge() > 0
    }

    /// Check if the product can be ordered.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Format a price as a dollar string.
    pub fn price_display(amount: f64) -> String {
        format!("${:.2}", amount)
    }
}

/// A page of products as returned by the list, category and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

#[cfg(test)]
pub(crate) fn sample(id: u64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: String::new(),
        category: "beauty".to_string(),
        price,
        discount_percentage: 0.0,
        rating: 4.0,
        stock: 10,
        brand: String::new(),
        thumbnail: format!("https://cdn.example.com/{}/thumb.png", id),
        images: Vec::new(),
    }
}
