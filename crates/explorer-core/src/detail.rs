//! Product detail view state.

use crate::catalog::Product;
use crate::notify::Notification;

/// A loaded product plus the view's selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    product: Product,
    selected_image: usize,
    quantity: u32,
}

impl ProductDetail {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            selected_image: 0,
            quantity: 1,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selected_image(&self) -> usize {
        self.selected_image
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Select a gallery image. Out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize) -> bool {
        if index >= self.product.images.len() {
            return false;
        }
        self.selected_image = index;
        true
    }

    /// URL of the image to display, falling back to the thumbnail.
    pub fn displayed_image(&self) -> &str {
        self.product
            .images
            .get(self.selected_image)
            .map(String::as_str)
            .unwrap_or(&self.product.thumbnail)
    }

    pub fn can_increment(&self) -> bool {
        self.quantity < self.product.stock
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    /// Add one unit, never exceeding stock.
    pub fn increment(&mut self) {
        if self.can_increment() {
            self.quantity += 1;
        }
    }

    /// Remove one unit, never going below 1.
    pub fn decrement(&mut self) {
        if self.can_decrement() {
            self.quantity -= 1;
        }
    }

    /// Discounted price times quantity.
    pub fn line_total(&self) -> f64 {
        self.product.discounted_price() * f64::from(self.quantity)
    }

    /// Confirmation shown after adding to the cart.
    pub fn add_to_cart(&self) -> Notification {
        Notification::info(
            "Added to cart!",
            format!(
                "{} \u{00d7} {} added to your cart",
                self.quantity, self.product.title
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    fn detail_with(stock: u32, images: usize) -> ProductDetail {
        let mut product = sample(7, "Desk Lamp", 40.0);
        product.stock = stock;
        product.images = (0..images)
            .map(|i| format!("https://cdn.example.com/7/{}.png", i))
            .collect();
        ProductDetail::new(product)
    }

    #[test]
    fn test_quantity_bounds() {
        let mut detail = detail_with(2, 0);
        assert!(!detail.can_decrement());
        detail.decrement();
        assert_eq!(detail.quantity(), 1);

        detail.increment();
        detail.increment();
        assert_eq!(detail.quantity(), 2);
        assert!(!detail.can_increment());
    }

    #[test]
    fn test_image_fallback_to_thumbnail() {
        let detail = detail_with(5, 0);
        assert_eq!(detail.displayed_image(), "https://cdn.example.com/7/thumb.png");
    }

    #[test]
    fn test_select_image() {
        let mut detail = detail_with(5, 3);
        assert!(detail.select_image(2));
        assert_eq!(detail.displayed_image(), "https://cdn.example.com/7/2.png");
        assert!(!detail.select_image(3));
        assert_eq!(detail.selected_image(), 2);
    }

    #[test]
    fn test_line_total_and_cart_message() {
        let mut detail = detail_with(5, 0);
        detail.increment();
        assert!((detail.line_total() - 80.0).abs() < 1e-9);

        let note = detail.add_to_cart();
        assert_eq!(note.title, "Added to cart!");
        assert_eq!(note.description, "2 \u{00d7} Desk Lamp added to your cart");
        assert!(!note.is_error());
    }
}
