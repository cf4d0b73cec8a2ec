//! Catalog library - re-exports for testing and external use.
//!
//! This module provides public access to all the application's modules
//! for testing purposes and potential library use.

use std::path::PathBuf;

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod models;
pub mod share;
pub mod templates;
pub mod view;

// ============================================================================
// Application State
// ============================================================================

/// Read-only state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: catalog::Catalog,
    pub share: share::ShareContext,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &config::Config) -> Self {
        Self::with_catalog(catalog::Catalog::sample(), config)
    }

    pub fn with_catalog(catalog: catalog::Catalog, config: &config::Config) -> Self {
        Self {
            catalog,
            share: share::ShareContext::from_config(config),
            assets_dir: config.assets_dir.clone(),
        }
    }

    pub fn render(&self, state: &models::ViewState) -> models::CatalogView {
        view::render(&self.catalog, state, &self.share)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&config::Config::default())
    }
}

// Re-export commonly used types
pub use models::{
    CatalogView, CategoryFilter, Chip, Product, ProductCard, ShareLinks, ViewEvent, ViewQuery,
    ViewState, ALL_CATEGORIES,
};

pub use catalog::{derive_categories, html_escape, matches_filter, normalize_query, Catalog};

pub use config::{Config, ConfigError};

pub use share::{ShareContext, WHATSAPP_COMPOSE_URL};

pub use templates::{base_html, render_page, render_results, STYLE};

pub use view::{count_label, render};
