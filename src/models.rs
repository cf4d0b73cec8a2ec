//! Data models for the catalog browser.
//!
//! This module contains the product record, the per-request view state and
//! the events that change it, and the view description produced by rendering.

use serde::{Deserialize, Serialize};

/// Label of the sentinel category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

// ============================================================================
// Catalog Types
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Whole currency units, no minor units.
    pub price: u32,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Product {
    pub fn new(
        id: &str,
        name: &str,
        price: u32,
        description: &str,
        category: &str,
        image: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: description.to_string(),
            category: category.to_string(),
            image: image.to_string(),
        }
    }
}

// ============================================================================
// View State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(label) => label,
        }
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label == category,
        }
    }
}

/// The pair of user inputs that decides what is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub category: CategoryFilter,
    pub query: String,
}

/// A user input that changes the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    SelectCategory(String),
    SetQuery(String),
}

/// Raw view parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

// ============================================================================
// View Description
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    pub active: bool,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShareLinks {
    pub whatsapp: String,
    pub instagram: String,
    pub copy_url: String,
    pub share_title: String,
    pub share_text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductCard {
    #[serde(flatten)]
    pub product: Product,
    pub price_label: String,
    pub canonical_url: String,
    pub share: ShareLinks,
}

/// Everything the page needs to display for one view state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogView {
    pub chips: Vec<Chip>,
    pub active_category: String,
    pub query: String,
    pub count: usize,
    pub count_label: String,
    pub cards: Vec<ProductCard>,
}
