// src/schedule/types.rs

/// One `<td>`/`<th>` of the timetable, as found in the markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceCell {
    pub text: String,
    pub col_span: usize,
    pub row_span: usize,
}

impl SourceCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), col_span: 1, row_span: 1 }
    }

    /// Spans below 1 are taken as 1.
    pub fn spanning(mut self, col_span: usize, row_span: usize) -> Self {
        self.col_span = col_span.max(1);
        self.row_span = row_span.max(1);
        self
    }
}

pub type SourceRow = Vec<SourceCell>;

/// Entries of one weekday, top to bottom.
pub type DaySchedule = Vec<String>;
