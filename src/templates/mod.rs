//! HTML templates for the catalog browser.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constant
//! - `components` - Search box, chip bar, share script, base template
//! - `catalog` - Product cards, results section, and the full page

mod styles;
mod components;
mod catalog;

pub use styles::STYLE;
pub use components::{base_html, chip_bar, search_box, SHARE_SCRIPT};
pub use catalog::{product_card, render_page, render_results, PAGE_TITLE};
