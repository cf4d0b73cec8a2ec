//! Shared HTML components for the catalog page.
//!
//! Contains the search box, chip bar, share script, and base HTML template.

use crate::catalog::html_escape;
use crate::models::Chip;

use super::styles::STYLE;

// ============================================================================
// Search Box
// ============================================================================

/// GET form so the page works without script; `SHARE_SCRIPT` upgrades it to
/// live filtering.
pub fn search_box(query: &str, active_category: &str) -> String {
    format!(
        r#"<form class="search-box" action="" method="get" id="search-form">
            <input type="hidden" name="category" value="{category}">
            <input type="search" id="search" name="q" placeholder="Search jewellery..." value="{query}" autocomplete="off">
        </form>"#,
        category = html_escape(active_category),
        query = html_escape(query),
    )
}

// ============================================================================
// Category Chips
// ============================================================================

pub fn chip_bar(chips: &[Chip]) -> String {
    let mut html = String::from(r#"<nav class="chips" id="chips">"#);
    for chip in chips {
        let class = if chip.active { "chip active" } else { "chip" };
        html.push_str(&format!(
            r#"<a class="{class}" href="{href}" data-cat="{label}">{label}</a>"#,
            class = class,
            href = html_escape(&chip.href),
            label = html_escape(&chip.label),
        ));
    }
    html.push_str("</nav>");
    html
}

// ============================================================================
// Share Script
// ============================================================================

/// Browser-side share actions and live search.
///
/// Buttons carry `data-action` plus escaped `data-*` values; one delegated
/// listener dispatches to a typed handler per action.
pub const SHARE_SCRIPT: &str = r#"
<script>
(function() {
    async function copyLink(btn) {
        const url = btn.dataset.url;
        try {
            if (!navigator.clipboard) throw new Error('Clipboard unavailable');
            await navigator.clipboard.writeText(url);
            alert('Link copied');
        } catch (err) {
            console.error('Failed to copy:', err);
            alert('Copy failed');
        }
    }

    async function nativeShare(btn) {
        if (!navigator.share) {
            alert('Native share unavailable');
            return;
        }
        try {
            await navigator.share({
                title: btn.dataset.title,
                text: btn.dataset.text,
                url: btn.dataset.url
            });
        } catch (err) {
            if (err && err.name === 'AbortError') return;
            console.error('Share failed:', err);
            alert('Share failed');
        }
    }

    const handlers = { 'copy-link': copyLink, 'native-share': nativeShare };

    document.addEventListener('click', function(event) {
        const btn = event.target.closest('[data-action]');
        if (!btn) return;
        const handler = handlers[btn.dataset.action];
        if (handler) {
            event.preventDefault();
            handler(btn);
        }
    });

    const form = document.getElementById('search-form');
    const search = document.getElementById('search');
    const results = document.getElementById('results');
    if (!form || !search || !results) return;

    let debounceTimer = null;
    let latest = 0;

    async function refresh() {
        const params = new URLSearchParams(new FormData(form));
        const ticket = ++latest;
        try {
            const response = await fetch('results?' + params.toString());
            if (!response.ok || ticket !== latest) return;
            const html = await response.text();
            if (ticket !== latest) return;
            results.innerHTML = html;
            history.replaceState(null, '', '?' + params.toString());
            document.querySelectorAll('#chips .chip').forEach(function(chip) {
                const p = new URLSearchParams({ category: chip.dataset.cat });
                if (search.value) p.set('q', search.value);
                chip.setAttribute('href', '?' + p.toString());
            });
        } catch (err) {
            console.error('Refresh failed:', err);
        }
    }

    search.addEventListener('input', function() {
        clearTimeout(debounceTimer);
        debounceTimer = setTimeout(refresh, 150);
    });
    form.addEventListener('submit', function(event) {
        event.preventDefault();
        refresh();
    });
})();
</script>
"#;

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        {content}
    </div>
    {script}
</body>
</html>"#,
        title = html_escape(title),
        content = content,
        script = SHARE_SCRIPT,
    )
}
