#![cfg(test)]
//! Theme selector lint: class names the components render must stay defined
//! in `ui/assets/theme/main.css`. A substring check is enough to catch a
//! dropped or renamed rule.
//!
//! When a component's markup changes, update REQUIRED_SELECTORS with it.

const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
const NAVBAR_CSS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styling/navbar.css"));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    // Dashboard
    ".dashboard__header",
    ".dashboard__title",
    ".dashboard__cards",
    ".dashboard__grid",
    // Panels
    ".panel {",
    ".panel--wide",
    ".panel__title",
    ".panel__body",
    ".panel__status",
    ".panel__status--error",
    // Charts
    ".chart-canvas {",
    ".chart-canvas__surface",
    ".chart-canvas__surface--pickable",
    ".chart-canvas__tooltip",
    // Cards
    ".card {",
    ".card__value",
    ".card__ring-value",
    // Filters
    ".filters {",
    ".filter-chip",
    ".filter-chip__reset",
    ".filters__reset-all",
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors in theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn tooltip_keeps_line_breaks() {
    let start = THEME_CSS
        .find(".chart-canvas__tooltip")
        .expect("tooltip rule present");
    let rule = &THEME_CSS[start..start + THEME_CSS[start..].find('}').unwrap_or(0)];
    assert!(rule.contains("white-space: pre-line"), "tooltip rule: {rule}");
}

#[test]
fn navbar_stylesheet_covers_markup() {
    for sel in [".navbar {", ".navbar__inner", ".navbar__brand-mark", ".navbar__link", ".navbar__locale"] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css lacks `{sel}`");
    }
}
