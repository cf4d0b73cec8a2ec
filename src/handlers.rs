//! HTTP route handlers for the web application.
//!
//! Every handler rebuilds the view state from the query string, renders it
//! from scratch, and returns either HTML or JSON.

use crate::models::{ProductCard, ViewQuery, ViewState};
use crate::templates::{render_page, render_results};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

// ============================================================================
// Page Handlers
// ============================================================================

pub async fn index(
    Query(query): Query<ViewQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let view_state = ViewState::from_query(&state.catalog, query);
    let view = state.render(&view_state);
    debug!(
        category = %view.active_category,
        query = %view.query,
        count = view.count,
        "rendered catalog page"
    );
    Html(render_page(&view))
}

/// Count label and grid only, for live search.
pub async fn results(
    Query(query): Query<ViewQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let view_state = ViewState::from_query(&state.catalog, query);
    Html(render_results(&state.render(&view_state)))
}

// ============================================================================
// JSON API
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProductList {
    pub category: String,
    pub query: String,
    pub count: usize,
    pub products: Vec<ProductCard>,
}

pub async fn api_categories(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.categories().to_vec())
}

pub async fn api_products(
    Query(query): Query<ViewQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<ProductList> {
    let view_state = ViewState::from_query(&state.catalog, query);
    let view = state.render(&view_state);
    Json(ProductList {
        category: view.active_category,
        query: view.query,
        count: view.count,
        products: view.cards,
    })
}

pub async fn api_product(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let product = match state.catalog.find(&id) {
        Some(p) => p,
        None => {
            warn!(id = %id, "product not found");
            return (StatusCode::NOT_FOUND, "Product not found").into_response();
        }
    };

    Json(state.share.card(product)).into_response()
}
