//! Tests for the HTTP handlers.
//!
//! Handlers are called directly with extractor values, so no server or
//! socket is involved.

use super::*;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::Product;
use axum::body::to_bytes;

// ============================================================================
// Helpers
// ============================================================================

fn app_state() -> Arc<AppState> {
    Arc::new(AppState::default())
}

fn query(category: Option<&str>, q: Option<&str>) -> Query<ViewQuery> {
    Query(ViewQuery {
        category: category.map(String::from),
        q: q.map(String::from),
    })
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_index_renders_all_products() {
    let Html(html) = index(query(None, None), State(app_state())).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Showing 8 products"));
    assert!(html.contains(r#"<a class="chip active" href="?category=All" data-cat="All">All</a>"#));
}

#[tokio::test]
async fn test_index_keeps_query_in_search_box_and_chips() {
    let Html(html) = index(query(Some("Rings"), Some("rose")), State(app_state())).await;
    assert!(html.contains("Showing 1 products"));
    assert!(html.contains(r#"value="rose""#));
    assert!(html.contains(r#"<input type="hidden" name="category" value="Rings">"#));
    assert!(html.contains(r#"href="?category=Necklaces&amp;q=rose""#));
}

#[tokio::test]
async fn test_results_fragment() {
    let Html(html) = results(query(Some("All"), Some("studs")), State(app_state())).await;
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Showing 1 products"));
    assert!(html.contains(r#"id="ear-002""#));
}

#[tokio::test]
async fn test_results_fragment_empty() {
    let Html(html) = results(query(Some("Rings"), Some("zzz")), State(app_state())).await;
    assert!(html.contains("Showing 0 products"));
    assert!(!html.contains("<article"));
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn test_api_categories() {
    let Json(categories) = api_categories(State(app_state())).await;
    assert_eq!(categories, vec!["All", "Rings", "Necklaces", "Earrings", "Bracelets"]);
}

#[tokio::test]
async fn test_api_products_filters() {
    let Json(list) = api_products(query(Some("Rings"), None), State(app_state())).await;
    assert_eq!(list.category, "Rings");
    assert_eq!(list.count, 2);
    let ids: Vec<&str> = list.products.iter().map(|c| c.product.id.as_str()).collect();
    assert_eq!(ids, vec!["ring-001", "ring-002"]);
}

#[tokio::test]
async fn test_api_products_case_insensitive() {
    let Json(upper) = api_products(query(None, Some("GOLD")), State(app_state())).await;
    let Json(lower) = api_products(query(None, Some("gold")), State(app_state())).await;
    assert_eq!(upper.products, lower.products);
    assert_eq!(upper.count, 2);
}

#[tokio::test]
async fn test_api_product_found() {
    let response = api_product(Path("neck-002".to_string()), State(app_state())).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["id"], "neck-002");
    assert_eq!(body["name"], "Emerald Line Necklace");
    assert_eq!(body["price"], 5599);
    assert_eq!(body["canonical_url"], "http://127.0.0.1:3000/#neck-002");
    assert_eq!(body["share"]["share_text"], "Emerald Line Necklace - ₹5599");
}

#[tokio::test]
async fn test_api_product_not_found() {
    let response = api_product(Path("missing".to_string()), State(app_state())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "Product not found");
}

#[tokio::test]
async fn test_custom_catalog_and_public_url() {
    let config = Config::from_lookup(|key| match key {
        "CATALOG_PUBLIC_URL" => Some("https://gems.example.org/shop".to_string()),
        "CATALOG_CURRENCY" => Some("$".to_string()),
        _ => None,
    })
    .unwrap();
    let catalog = Catalog::new(vec![
        Product::new("a-1", "Opal Pin", 40, "Soft glow.", "Pins", "assets/a.svg"),
        Product::new("b-1", "Jade Pin", 55, "Deep green.", "Pins", "assets/b.svg"),
    ]);
    let state = Arc::new(AppState::with_catalog(catalog, &config));

    let Json(list) = api_products(query(Some("Pins"), Some("jade")), State(state)).await;
    assert_eq!(list.count, 1);
    assert_eq!(list.products[0].canonical_url, "https://gems.example.org/shop#b-1");
    assert_eq!(list.products[0].price_label, "$55");
}
