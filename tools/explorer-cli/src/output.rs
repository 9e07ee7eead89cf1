//! Output formatting for the CLI.

use console::style;
use explorer_core::catalog::Product;
use explorer_core::notify::{Notification, Variant};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a queued view notification.
    pub fn notification(&self, notification: &Notification) {
        match notification.variant {
            Variant::Destructive => self.error(&format!(
                "{}: {}",
                notification.title, notification.description
            )),
            Variant::Default => self.success(&format!(
                "{} {}",
                style(&notification.title).bold(),
                notification.description
            )),
        }
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Price cell: discounted price, with the list price and badge when discounted.
pub fn price_cell(product: &Product) -> String {
    let price = Product::price_display(product.discounted_price());
    if product.has_discount() {
        format!(
            "{} {} {}",
            style(price).green(),
            style(Product::price_display(product.price)).dim(),
            style(format!("-{}%", product.discount_badge())).red()
        )
    } else {
        price
    }
}

/// Stock cell, highlighted when low or out.
pub fn stock_badge(stock: u32) -> String {
    match stock {
        0 => style("out of stock").red().to_string(),
        1..=9 => style(format!("{} left", stock)).yellow().to_string(),
        _ => format!("{} in stock", stock),
    }
}

/// Rating as one decimal with a star.
pub fn rating_cell(rating: f64) -> String {
    format!("{:.1}★", rating)
}

/// Truncate to `width` characters, adding an ellipsis when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Lamp", 10), "Lamp");
        assert_eq!(truncate("Essence Mascara Lash Princess", 10), "Essence M…");
    }

    #[test]
    fn test_stock_badge_plain_when_plenty() {
        assert_eq!(stock_badge(42), "42 in stock");
    }

    #[test]
    fn test_rating_cell() {
        assert_eq!(rating_cell(4.94), "4.9★");
    }
}
