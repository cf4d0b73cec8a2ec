//! Catalog page template.
//!
//! Turns a `CatalogView` into HTML. The results section is rendered on its
//! own as well so live search can swap it in without a full page load.

use crate::catalog::html_escape;
use crate::models::{CatalogView, ProductCard};

use super::components::{base_html, chip_bar, search_box};

pub const PAGE_TITLE: &str = "Jewellery Catalog";

// ============================================================================
// Product Card
// ============================================================================

fn share_actions(card: &ProductCard) -> String {
    format!(
        r#"<div class="share">
            <a class="btn small brand" target="_blank" rel="noopener" href="{whatsapp}">WhatsApp</a>
            <button class="btn small" type="button" data-action="copy-link" data-url="{url}">Copy Link</button>
            <a class="btn small" target="_blank" rel="noopener" href="{instagram}">Instagram</a>
            <button class="btn small" type="button" data-action="native-share" data-title="{title}" data-text="{text}" data-url="{url}">Share</button>
        </div>"#,
        whatsapp = html_escape(&card.share.whatsapp),
        instagram = html_escape(&card.share.instagram),
        url = html_escape(&card.share.copy_url),
        title = html_escape(&card.share.share_title),
        text = html_escape(&card.share.share_text),
    )
}

pub fn product_card(card: &ProductCard) -> String {
    let p = &card.product;
    format!(
        r#"<article class="card" id="{id}">
            <img src="{img}" alt="{name}" loading="lazy">
            <div class="card-body">
                <div class="row"><strong>{name}</strong><span class="price">{price}</span></div>
                <p class="muted">{desc}</p>
                <div class="tag">{category}</div>
                {share}
            </div>
        </article>"#,
        id = html_escape(&p.id),
        img = html_escape(&p.image),
        name = html_escape(&p.name),
        price = html_escape(&card.price_label),
        desc = html_escape(&p.description),
        category = html_escape(&p.category),
        share = share_actions(card),
    )
}

// ============================================================================
// Results and Page
// ============================================================================

/// Count label and product grid.
pub fn render_results(view: &CatalogView) -> String {
    let mut html = format!(
        r#"<p class="count" id="count">{}</p><div class="grid" id="grid">"#,
        html_escape(&view.count_label)
    );
    for card in &view.cards {
        html.push_str(&product_card(card));
    }
    html.push_str("</div>");
    if view.cards.is_empty() {
        html.push_str(r#"<p class="empty">No products match your filters.</p>"#);
    }
    html
}

pub fn render_page(view: &CatalogView) -> String {
    let content = format!(
        r#"<header class="hero">
            <h1>{title}</h1>
            <p>Browse, filter, and share your favourite pieces.</p>
        </header>
        <div class="toolbar">
            {chips}
            {search}
        </div>
        <section id="results">{results}</section>"#,
        title = PAGE_TITLE,
        chips = chip_bar(&view.chips),
        search = search_box(&view.query, &view.active_category),
        results = render_results(view),
    );

    base_html(PAGE_TITLE, &content)
}
