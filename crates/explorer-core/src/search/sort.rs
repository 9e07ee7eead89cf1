//! Client-side sorting of fetched products.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::ExplorerError;

/// Sort options for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Sort by title A-Z.
    #[default]
    TitleAsc,
    /// Sort by title Z-A.
    TitleDesc,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::TitleAsc,
        SortOption::TitleDesc,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
    ];

    /// Token used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::TitleAsc => "title-asc",
            SortOption::TitleDesc => "title-desc",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::TitleAsc => "Title A-Z",
            SortOption::TitleDesc => "Title Z-A",
            SortOption::PriceAsc => "Price Low to High",
            SortOption::PriceDesc => "Price High to Low",
        }
    }

    /// Compare two products under this option. Titles are collated with
    /// `collator`.
    pub fn compare(&self, collator: &TitleCollator, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::TitleAsc => collator.compare(&a.title, &b.title),
            SortOption::TitleDesc => collator.compare(&b.title, &a.title),
            SortOption::PriceAsc => a.price.total_cmp(&b.price),
            SortOption::PriceDesc => b.price.total_cmp(&a.price),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s.trim())
            .ok_or_else(|| ExplorerError::UnknownSortOption(s.to_string()))
    }
}

/// Locale-aware title ordering using the Unicode root collation: accents
/// and case are secondary and tertiary differences, so `"Éclair"` sorts
/// before `"Zebra"` and `"apple"` before `"Apple"`.
pub struct TitleCollator {
    collator: Option<Collator>,
}

impl TitleCollator {
    pub fn new() -> Self {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => fallback_compare(a, b),
        }
    }
}

impl Default for TitleCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Used only if collation data cannot be loaded.
fn fallback_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

/// Sort products in place. The sort is stable, so equal keys keep fetch order.
pub fn sort_products(products: &mut [Product], sort: SortOption) {
    let collator = TitleCollator::new();
    products.sort_by(|a, b| sort.compare(&collator, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_title_asc() {
        let mut products = vec![sample(1, "B", 1.0), sample(2, "A", 1.0)];
        sort_products(&mut products, SortOption::TitleAsc);
        assert_eq!(titles(&products), vec!["A", "B"]);
    }

    #[test]
    fn test_title_desc() {
        let mut products = vec![sample(1, "apple", 1.0), sample(2, "Cherry", 1.0), sample(3, "banana", 1.0)];
        sort_products(&mut products, SortOption::TitleDesc);
        assert_eq!(titles(&products), vec!["Cherry", "banana", "apple"]);
    }

    #[test]
    fn test_title_ignores_case() {
        let mut products = vec![sample(1, "banana", 1.0), sample(2, "Apple", 1.0), sample(3, "cherry", 1.0)];
        sort_products(&mut products, SortOption::TitleAsc);
        assert_eq!(titles(&products), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_title_collates_accents_and_case() {
        let mut products = vec![
            sample(1, "Zebra Mug", 1.0),
            sample(2, "Éclair Tin", 1.0),
            sample(3, "apple", 1.0),
            sample(4, "Apple", 1.0),
        ];
        sort_products(&mut products, SortOption::TitleAsc);
        assert_eq!(titles(&products), vec!["apple", "Apple", "Éclair Tin", "Zebra Mug"]);

        sort_products(&mut products, SortOption::TitleDesc);
        assert_eq!(titles(&products), vec!["Zebra Mug", "Éclair Tin", "Apple", "apple"]);
    }

    #[test]
    fn test_title_accent_is_secondary_to_base_letters() {
        let collator = TitleCollator::new();
        assert_eq!(collator.compare("résumé", "resume"), Ordering::Greater);
        assert_eq!(collator.compare("résumé", "resumes"), Ordering::Less);
        assert_eq!(collator.compare("Lamp", "Lamp"), Ordering::Equal);
    }

    #[test]
    fn test_fallback_puts_lowercase_first() {
        assert_eq!(fallback_compare("apple", "Apple"), Ordering::Less);
        assert_eq!(fallback_compare("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_price_desc() {
        let mut products = vec![sample(1, "x", 10.0), sample(2, "y", 30.0)];
        sort_products(&mut products, SortOption::PriceDesc);
        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![30.0, 10.0]);
    }

    #[test]
    fn test_price_asc_is_stable() {
        let mut products = vec![
            sample(1, "first", 5.0),
            sample(2, "cheap", 1.0),
            sample(3, "second", 5.0),
        ];
        sort_products(&mut products, SortOption::PriceAsc);
        let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_parse_tokens() {
        for option in SortOption::ALL {
            assert_eq!(option.as_str().parse::<SortOption>().unwrap(), option);
        }
        assert_eq!(
            "rating".parse::<SortOption>(),
            Err(ExplorerError::UnknownSortOption("rating".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&SortOption::PriceDesc).unwrap();
        assert_eq!(json, "\"price-desc\"");
    }
}
