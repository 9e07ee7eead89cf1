//! Product catalog module.
//!
//! Contains the product record served by the upstream API and category helpers.

mod category;
mod product;

pub use category::{category_label, sanitize_categories};
pub use product::{Product, ProductsPage};

#[cfg(test)]
pub(crate) use product::sample;
