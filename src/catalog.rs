//! Catalog store, filtering, and text escaping.
//!
//! The catalog is compiled in and never changes after startup. Filtering
//! walks it in order, so results always keep catalog order.

use crate::models::{Product, ViewState, ALL_CATEGORIES};
use tracing::debug;

// ============================================================================
// Sample Data
// ============================================================================

/// (id, name, price, description, category, image)
const SAMPLE_PRODUCTS: &[(&str, &str, u32, &str, &str, &str)] = &[
    ("ring-001", "Minimal Gold Ring", 2499, "Elegant daily-wear gold ring.", "Rings", "assets/minimal-gold-ring.svg"),
    ("ring-002", "Rose Stone Ring", 3199, "Subtle sparkle with rose crystal.", "Rings", "assets/rose-stone-ring.svg"),
    ("neck-001", "Pearl Drop Necklace", 4299, "Classic pearl-inspired drop style.", "Necklaces", "assets/pearl-drop-necklace.svg"),
    ("neck-002", "Emerald Line Necklace", 5599, "Refined green stone statement piece.", "Necklaces", "assets/emerald-line-necklace.svg"),
    ("ear-001", "Classic Hoop Earrings", 1899, "Lightweight hoops for daily style.", "Earrings", "assets/classic-hoop-earrings.svg"),
    ("ear-002", "Star Diamond Studs", 2799, "Compact studs with star brilliance.", "Earrings", "assets/star-diamond-studs.svg"),
    ("brace-001", "Sleek Chain Bracelet", 2299, "Minimal chain with premium finish.", "Bracelets", "assets/sleek-chain-bracelet.svg"),
    ("brace-002", "Charm Gold Bracelet", 2999, "Stylish charms in warm gold tone.", "Bracelets", "assets/charm-gold-bracelet.svg"),
];

pub fn sample_products() -> Vec<Product> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|&(id, name, price, desc, category, image)| {
            Product::new(id, name, price, desc, category, image)
        })
        .collect()
}

// ============================================================================
// Catalog Store
// ============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let categories = derive_categories(&products);
        Self {
            products,
            categories,
        }
    }

    /// The built-in jewellery catalog.
    pub fn sample() -> Self {
        Self::new(sample_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// "All" followed by each distinct category in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, state: &ViewState) -> Vec<&Product> {
        let needle = normalize_query(&state.query);
        let matched: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| matches_filter(p, state, &needle))
            .collect();

        debug!(
            category = state.category.label(),
            query = %needle,
            matched = matched.len(),
            "filtered catalog"
        );
        matched
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !categories.iter().any(|c| *c == product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

// ============================================================================
// Filtering
// ============================================================================

/// Lowercase and trim a raw query for substring matching.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// `needle` must already be normalized.
pub fn matches_filter(product: &Product, state: &ViewState, needle: &str) -> bool {
    if !state.category.admits(&product.category) {
        return false;
    }
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
