//! Catalog browser - a static jewellery catalog with filtering and sharing.
//!
//! This is the main entry point for the catalog web server.
//! The application is organized into the following modules:
//!
//! - `models`: Product records, view state, and view description types
//! - `catalog`: The compiled-in catalog, category set, and filtering
//! - `view`: View state transitions and the pure render function
//! - `share`: Canonical product URLs and outbound share links
//! - `templates`: HTML/CSS/JS templates
//! - `handlers`: HTTP route handlers
//! - `config`: Environment-driven settings

use axum::{routing::get, Router};
use std::process::ExitCode;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use catalog::{handlers, AppState, Config};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let state = Arc::new(AppState::new(&config));

    let app = Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/results", get(handlers::results))
        // JSON API
        .route("/api/categories", get(handlers::api_categories))
        .route("/api/products", get(handlers::api_products))
        .route("/api/products/{id}", get(handlers::api_product))
        // Static images
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", config.addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Catalog server running at http://{}", config.addr);
    info!("Public page URL: {}", config.public_url);
    info!(
        products = state.catalog.products().len(),
        categories = state.catalog.categories().len() - 1,
        "Catalog loaded"
    );
    if !config.assets_dir.is_dir() {
        warn!("Assets directory {} not found; images will 404", config.assets_dir.display());
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
