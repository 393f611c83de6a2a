// src/core/html.rs
use scraper::{ElementRef, Selector};

/// Parse a selector literal. Only called with hardcoded CSS.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("hardcoded CSS selector")
}

/// All descendant text, concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Descendant text nodes joined with `sep`.
pub fn text_joined(el: ElementRef<'_>, sep: &str) -> String {
    el.text().collect::<Vec<_>>().join(sep)
}

/// Numeric span attribute (`colspan` / `rowspan`). Missing, garbage and 0 all mean 1;
/// values above `max` (or too large to parse) are cut to `max`.
pub fn span_attr(el: ElementRef<'_>, name: &str, max: usize) -> usize {
    let Some(raw) = el.value().attr(name).map(str::trim) else { return 1 };
    match raw.parse::<usize>() {
        Ok(0) => 1,
        Ok(n) => n.min(max),
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => max,
        Err(_) => 1,
    }
}
