//! View state transitions and rendering.
//!
//! `render` is a pure function of the catalog, the view state, and the share
//! settings. It returns a `CatalogView` that the templates serialise; nothing
//! here touches HTML.

use crate::catalog::Catalog;
use crate::models::{
    CatalogView, CategoryFilter, Chip, ProductCard, ViewEvent, ViewQuery, ViewState,
    ALL_CATEGORIES,
};
use crate::share::ShareContext;
use tracing::debug;

// ============================================================================
// View State Transitions
// ============================================================================

impl ViewState {
    /// Apply one user event. Selecting a label outside the catalog's
    /// category set falls back to `All`.
    pub fn apply(&mut self, catalog: &Catalog, event: ViewEvent) {
        match event {
            ViewEvent::SelectCategory(label) => {
                self.category = if label == ALL_CATEGORIES {
                    CategoryFilter::All
                } else if catalog.has_category(&label) {
                    CategoryFilter::Only(label)
                } else {
                    debug!(category = %label, "unknown category, showing all");
                    CategoryFilter::All
                };
            }
            ViewEvent::SetQuery(query) => {
                self.query = query;
            }
        }
    }

    /// Rebuild a view state from query-string parameters.
    pub fn from_query(catalog: &Catalog, query: ViewQuery) -> Self {
        let mut state = ViewState::default();
        if let Some(category) = query.category {
            state.apply(catalog, ViewEvent::SelectCategory(category));
        }
        if let Some(q) = query.q {
            state.apply(catalog, ViewEvent::SetQuery(q));
        }
        state
    }
}

// ============================================================================
// Rendering
// ============================================================================

pub fn count_label(count: usize) -> String {
    format!("Showing {} products", count)
}

/// Relative link that selects `category` while keeping the current query.
pub fn chip_href(category: &str, query: &str) -> String {
    let mut href = format!("?category={}", urlencoding::encode(category));
    if !query.is_empty() {
        href.push_str("&q=");
        href.push_str(&urlencoding::encode(query));
    }
    href
}

pub fn render(catalog: &Catalog, state: &ViewState, share: &ShareContext) -> CatalogView {
    let active = state.category.label();

    let chips = catalog
        .categories()
        .iter()
        .map(|label| Chip {
            label: label.clone(),
            active: label == active,
            href: chip_href(label, &state.query),
        })
        .collect();

    let cards: Vec<ProductCard> = catalog
        .filter(state)
        .into_iter()
        .map(|product| share.card(product))
        .collect();

    CatalogView {
        chips,
        active_category: active.to_string(),
        query: state.query.clone(),
        count: cards.len(),
        count_label: count_label(cards.len()),
        cards,
    }
}
