// src/specs/lunch.rs
use scraper::Html;
use serde::Serialize;

use crate::config::consts::LUNCH_SINGLE_MAX;
use crate::core::html::{sel, text_joined};
use crate::core::sanitize::normalize_ws;

/// One school day of the lunch menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LunchDay {
    Single(String),
    /// Regular dish + alternative (e.g. vegetarian)
    Pair([String; 2]),
}

/// Week menu, Monday first.
pub fn parse(doc: &str) -> Vec<LunchDay> {
    let html = Html::parse_document(doc);

    let entries: Vec<String> = html
        .select(&sel(r#"td[style="word-wrap: break-word"]"#))
        .map(|td| {
            let food = normalize_ws(&text_joined(td, " "));
            logd!("Menu raw: {food}");
            food
        })
        .collect();

    logd!("Menu count: {}", entries.len());
    group(entries)
}

/// More entries than school days means two dishes per day, listed in order.
pub fn group(entries: Vec<String>) -> Vec<LunchDay> {
    if entries.len() <= LUNCH_SINGLE_MAX {
        return entries.into_iter().map(LunchDay::Single).collect();
    }
    let mut days = Vec::with_capacity(entries.len().div_ceil(2));
    let mut it = entries.into_iter();
    while let Some(first) = it.next() {
        days.push(match it.next() {
            Some(second) => LunchDay::Pair([first, second]),
            None => LunchDay::Single(first),
        });
    }
    days
}

impl LunchDay {
    /// Dishes of the day, in page order.
    pub fn dishes(&self) -> Vec<&str> {
        match self {
            LunchDay::Single(d) => vec![d.as_str()],
            LunchDay::Pair([a, b]) => vec![a.as_str(), b.as_str()],
        }
    }
}
