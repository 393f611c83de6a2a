// src/specs/preschool.rs
use scraper::Html;

use crate::core::html::{sel, text_of};
use crate::error::{Result, ScrapeError};

/// Drop-off and pick-up for one day, normally `[from, to]`.
pub type DayTimes = Vec<String>;

/// Preschool times for the week starting at the requested date.
///
/// The `times` form has one `td.value` per day in its second row. Editable days
/// hold two `<input>`s, locked days show plain text like `07:30 - 16:00`.
pub fn parse(doc: &str) -> Result<Vec<DayTimes>> {
    let html = Html::parse_document(doc);
    let form = html
        .select(&sel("form#times"))
        .next()
        .ok_or(ScrapeError::MissingElement("preschool times form (form#times)"))?;
    let row = form
        .select(&sel("tr"))
        .nth(1)
        .ok_or(ScrapeError::MissingElement("preschool times row"))?;

    let input_sel = sel("input");
    let mut out = Vec::new();
    for td in row.select(&sel("td.value")) {
        let inputs: Vec<_> = td.select(&input_sel).collect();
        let times: DayTimes = if inputs.is_empty() {
            text_of(td).split(" - ").map(|t| t.trim().to_string()).collect()
        } else {
            inputs
                .iter()
                .take(2)
                .map(|i| s!(i.value().attr("value").unwrap_or("")))
                .collect()
        };
        logd!("Preschool time: {}", times.join(" "));
        out.push(times);
    }
    Ok(out)
}
