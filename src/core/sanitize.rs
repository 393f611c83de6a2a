// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.*?)(\d+:\d+-\d+:\d+)(.*?)").expect("hardcoded time range pattern")
});

/// Schedule cell text: every line break becomes a space, NBSP is dropped.
/// The HTML parser has already folded CR-LF into LF, so all three forms show up.
pub fn clean_cell_text(s: &str) -> String {
    s.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('\u{a0}', "")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Put a space on both sides of every `HH:MM-HH:MM` range.
/// "Matte08:10-09:00B12" → "Matte 08:10-09:00 B12"
pub fn space_time_ranges(s: &str) -> String {
    TIME_RANGE.replace_all(s, "$1 $2 $3").into_owned()
}

/// Value of `key=` among the `?`/`&` separated parts of a link.
pub fn query_key(href: &str) -> Option<&str> {
    href.split(['?', '&'])
        .find(|part| part.contains("key="))
        .and_then(|part| part.split('=').nth(1))
}
