//! Share link construction.
//!
//! Every rendered product gets a canonical URL (the catalog page plus a
//! fragment naming the product id) and a set of outbound share links built
//! from it. The clipboard and native share sheet run in the browser; see
//! `templates::components::SHARE_SCRIPT`.

use crate::config::Config;
use crate::models::{Product, ProductCard, ShareLinks};
use url::Url;

/// Compose endpoint for the messaging deep link.
pub const WHATSAPP_COMPOSE_URL: &str = "https://wa.me/";

/// Settings shared by every share link on a page.
#[derive(Debug, Clone)]
pub struct ShareContext {
    pub page_url: Url,
    pub currency: String,
    pub instagram_url: Url,
}

impl ShareContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_url: config.public_url.clone(),
            currency: config.currency.clone(),
            instagram_url: config.instagram_url.clone(),
        }
    }

    pub fn price_label(&self, price: u32) -> String {
        format!("{}{}", self.currency, price)
    }

    /// Page URL with the product id as fragment.
    pub fn canonical_url(&self, product: &Product) -> Url {
        let mut url = self.page_url.clone();
        url.set_query(None);
        url.set_fragment(Some(&product.id));
        url
    }

    /// "{name} - {price}", the text shared alongside the link.
    pub fn share_text(&self, product: &Product) -> String {
        format!("{} - {}", product.name, self.price_label(product.price))
    }

    pub fn whatsapp_link(&self, product: &Product) -> String {
        let text = format!("{} {}", self.share_text(product), self.canonical_url(product));
        format!("{}?text={}", WHATSAPP_COMPOSE_URL, urlencoding::encode(&text))
    }

    pub fn links(&self, product: &Product) -> ShareLinks {
        ShareLinks {
            whatsapp: self.whatsapp_link(product),
            instagram: self.instagram_url.to_string(),
            copy_url: self.canonical_url(product).to_string(),
            share_title: product.name.clone(),
            share_text: self.share_text(product),
        }
    }

    /// A product together with everything needed to display and share it.
    pub fn card(&self, product: &Product) -> ProductCard {
        ProductCard {
            price_label: self.price_label(product.price),
            canonical_url: self.canonical_url(product).to_string(),
            share: self.links(product),
            product: product.clone(),
        }
    }
}

impl Default for ShareContext {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn context(page: &str) -> ShareContext {
        ShareContext {
            page_url: Url::parse(page).unwrap(),
            currency: "₹".to_string(),
            instagram_url: Url::parse("https://www.instagram.com/").unwrap(),
        }
    }

    #[test]
    fn test_canonical_url_fragment_is_product_id() {
        let ctx = context("https://shop.example.com/catalog/index.html");
        for product in Catalog::sample().products() {
            let url = ctx.canonical_url(product);
            assert_eq!(url.fragment(), Some(product.id.as_str()));
            assert_eq!(url.path(), "/catalog/index.html");
            assert_eq!(url.query(), None);
        }
    }

    #[test]
    fn test_canonical_url_is_stable() {
        let ctx = context("https://shop.example.com/");
        let catalog = Catalog::sample();
        let product = catalog.find("ring-001").unwrap();
        assert_eq!(ctx.canonical_url(product), ctx.canonical_url(product));
        assert_eq!(
            ctx.canonical_url(product).as_str(),
            "https://shop.example.com/#ring-001"
        );
    }

    #[test]
    fn test_whatsapp_link_is_percent_encoded() {
        let ctx = context("https://shop.example.com/");
        let catalog = Catalog::sample();
        let product = catalog.find("ring-001").unwrap();
        let link = ctx.whatsapp_link(product);

        assert!(link.starts_with("https://wa.me/?text="));
        assert!(!link.contains(' '));
        assert!(link.contains("Minimal%20Gold%20Ring%20-%20%E2%82%B92499"));
        assert!(link.ends_with("https%3A%2F%2Fshop.example.com%2F%23ring-001"));
    }

    #[test]
    fn test_canonical_url_uses_configured_port() {
        let config = Config::from_lookup(|key| match key {
            "CATALOG_ADDR" => Some("127.0.0.1:8080".to_string()),
            _ => None,
        })
        .unwrap();
        let ctx = ShareContext::from_config(&config);
        let catalog = Catalog::sample();
        let url = ctx.canonical_url(catalog.find("ring-001").unwrap());
        assert_eq!(url.port(), Some(8080));
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/#ring-001");
    }

    #[test]
    fn test_links() {
        let ctx = context("https://shop.example.com/");
        let catalog = Catalog::sample();
        let links = ctx.links(catalog.find("ear-002").unwrap());

        assert_eq!(links.copy_url, "https://shop.example.com/#ear-002");
        assert_eq!(links.instagram, "https://www.instagram.com/");
        assert_eq!(links.share_title, "Star Diamond Studs");
        assert_eq!(links.share_text, "Star Diamond Studs - ₹2799");
    }
}
