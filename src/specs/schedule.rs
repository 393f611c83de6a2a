// src/specs/schedule.rs
use scraper::Html;

use crate::config::consts::{MAX_COLSPAN, MAX_ROWSPAN};
use crate::core::html::{sel, span_attr, text_of};
use crate::error::{Result, ScrapeError};
use crate::schedule::{self, DaySchedule, SourceCell, SourceRow};

/// Rows of the `tab_dark` timetable with their span attributes.
pub fn parse_rows(doc: &str) -> Result<Vec<SourceRow>> {
    let html = Html::parse_document(doc);
    let table = html
        .select(&sel("table.tab_dark"))
        .next()
        .ok_or(ScrapeError::MissingElement("schedule table (table.tab_dark)"))?;

    let cell_sel = sel("td, th");
    let rows = table
        .select(&sel("tr"))
        .map(|tr| {
            tr.select(&cell_sel)
                .map(|c| {
                    SourceCell::new(text_of(c))
                        .spanning(span_attr(c, "colspan", MAX_COLSPAN), span_attr(c, "rowspan", MAX_ROWSPAN))
                })
                .collect()
        })
        .collect();
    Ok(rows)
}

/// Weekly schedule, Monday first.
pub fn parse(doc: &str) -> Result<Vec<DaySchedule>> {
    let rows = parse_rows(doc)?;
    let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
    logd!("Schedule table: {} rows, widest {} cells", rows.len(), widest);

    let days = schedule::reconstruct(&rows);
    logd!("Schedule days: {}", days.len());
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table class="tab_dark">
          <tr><th>&nbsp;</th><th>Måndag</th><th>Tisdag</th></tr>
          <tr><td>08:00</td><td rowspan="2">Svenska<br>08:10-09:00<br>B204</td><td>&nbsp;</td></tr>
          <tr><td>08:30</td><td colspan="1">Engelska</td></tr>
          <tr><td>09:00</td><td>&nbsp;</td><td>&nbsp;</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn reads_spans_and_text() {
        let rows = parse_rows(PAGE).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1][1].row_span, 2);
        assert_eq!(rows[1][1].col_span, 1);
        assert_eq!(rows[1][1].text, "Svenska08:10-09:00B204");
        assert_eq!(rows[2].len(), 2);
    }

    #[test]
    fn builds_days() {
        let days = parse(PAGE).unwrap();
        assert_eq!(
            days,
            vec![
                vec![s!("Måndag"), s!("Svenska 08:10-09:00 B204")],
                vec![s!("Tisdag"), s!("Engelska")],
            ]
        );
    }

    #[test]
    fn line_breaks_inside_cells_become_spaces() {
        let page = "<table class=\"tab_dark\">\r\n\
            <tr><th></th><th>M\u{e5}ndag</th></tr>\r\n\
            <tr><td>08:00</td><td>Svenska\r\n08:10-09:00\r\nB204</td></tr>\r\n\
            </table>";
        let days = parse(page).unwrap();
        assert_eq!(days, vec![vec![s!("Måndag"), s!("Svenska  08:10-09:00  B204")]]);
        assert!(days.iter().flatten().all(|e| !e.contains(['\n', '\r'])));
    }

    #[test]
    fn absurd_colspan_is_capped() {
        let page = r#"<table class="tab_dark">
            <tr><td>08:00</td><td colspan="300000000">Lunch</td></tr>
            <tr><td>08:30</td><td>Matte</td></tr>
        </table>"#;
        let rows = parse_rows(page).unwrap();
        assert_eq!(rows[0][1].col_span, 1000);
        let days = parse(page).unwrap();
        assert_eq!(days[0], vec![s!("Lunch"), s!("Matte")]);
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = parse("<table class=\"other\"><tr><td>x</td></tr></table>").unwrap_err();
        assert!(matches!(err, ScrapeError::MissingElement(_)));
    }
}
