// src/specs/students.rs
use scraper::Html;
use serde::Serialize;

use crate::core::html::{sel, text_of};
use crate::core::sanitize::query_key;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: String,
    pub name: String,
}

/// Students linked to the account, from the settings page.
/// Each one has an RSS link whose `key=` parameter is the student id.
pub fn parse(doc: &str) -> Vec<Student> {
    let html = Html::parse_document(doc);
    let mut out = Vec::new();

    for a in html.select(&sel(r#"a[href*="right_public_parent_rss"]"#)) {
        let href = a.value().attr("href").unwrap_or("");
        logd!("RSS-link: {href}");

        match query_key(href) {
            Some(id) => out.push(Student { id: s!(id), name: text_of(a).trim().to_string() }),
            None => logd!("No student in list"),
        }
    }
    out
}
