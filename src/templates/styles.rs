//! CSS styles for the catalog page.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
:root {
    --bg: #fbf8f3;
    --fg: #3d3a35;
    --muted: #8a8377;
    --border: #e9e2d6;
    --card: #ffffff;
    --accent: #b8893b;
    --accent-fg: #ffffff;
    --brand: #25d366;
    --chip-bg: #f2ebdf;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.5;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: inherit; text-decoration: none; }

header.hero {
    padding: 1.5rem 1rem 0.5rem;
    text-align: center;
}
header.hero h1 { font-size: 1.6rem; font-weight: 600; }
header.hero p { color: var(--muted); }

.toolbar {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    align-items: center;
    justify-content: space-between;
    margin: 1rem 0;
}

.search-box { display: flex; gap: 0.5rem; }

.search-box input {
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    background: var(--card);
    color: var(--fg);
    font-size: 0.95rem;
    width: 240px;
}

.chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.chip {
    padding: 0.35rem 0.9rem;
    border: 1px solid var(--border);
    border-radius: 999px;
    background: var(--chip-bg);
    font-size: 0.9rem;
}
.chip.active {
    background: var(--accent);
    border-color: var(--accent);
    color: var(--accent-fg);
}

.count { color: var(--muted); font-size: 0.9rem; margin-bottom: 0.75rem; }

.grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1rem;
}

.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    overflow: hidden;
    display: flex;
    flex-direction: column;
}
.card:target { outline: 2px solid var(--accent); }
.card img { width: 100%; aspect-ratio: 1 / 1; object-fit: cover; background: var(--chip-bg); }
.card-body { padding: 0.75rem; display: flex; flex-direction: column; gap: 0.4rem; }

.row { display: flex; justify-content: space-between; gap: 0.5rem; }
.price { color: var(--accent); font-weight: 600; }
.muted { color: var(--muted); font-size: 0.9rem; }

.tag {
    align-self: flex-start;
    font-size: 0.75rem;
    padding: 0.1rem 0.5rem;
    border-radius: 4px;
    background: var(--chip-bg);
}

.share { display: flex; flex-wrap: wrap; gap: 0.4rem; margin-top: 0.4rem; }

.btn {
    display: inline-block;
    padding: 0.4rem 0.8rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--card);
    color: var(--fg);
    cursor: pointer;
    font-family: inherit;
    font-size: 0.9rem;
}
.btn.small { padding: 0.25rem 0.6rem; font-size: 0.8rem; }
.btn.brand { background: var(--brand); border-color: var(--brand); color: #fff; }

.empty { color: var(--muted); text-align: center; padding: 2rem 0; }

@media (max-width: 600px) {
    .search-box input { width: 100%; }
    .toolbar { flex-direction: column; align-items: stretch; }
}
"#;
