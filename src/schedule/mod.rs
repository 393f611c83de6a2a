// src/schedule/mod.rs
//
// Weekly timetable reconstruction.
//
// The portal renders the week as one HTML table where lessons use rowspan
// (duration) and colspan (parallel groups). `reconstruct` turns those rows into
// one list of entries per weekday:
//
//   1. place   every cell into a dense grid, fillers where spans reach
//   2. prune   rows, then columns, that carry nothing but blanks/fillers
//   3. columns read each surviving column top to bottom
//   4. drop    the first column (half-hour labels, not a day)

mod grid;
mod types;

pub use grid::{Cell, Grid};
pub use types::{DaySchedule, SourceCell, SourceRow};

pub fn reconstruct(rows: &[SourceRow]) -> Vec<DaySchedule> {
    let mut days = Grid::place(rows).prune().columns();
    // Assumes the layout always leads with the time column
    if !days.is_empty() {
        days.remove(0);
    }
    days
}
