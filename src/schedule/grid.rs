// src/schedule/grid.rs
use crate::config::consts::GRID_MARGIN;
use crate::core::sanitize::{clean_cell_text, space_time_ranges};

use super::types::{DaySchedule, SourceRow};

/// One grid position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    /// Covered by a span from elsewhere; counts overlapping spans.
    Spanned(u32),
    Text(String),
}

impl Cell {
    /// Taken, for placement purposes.
    pub fn is_filled(&self) -> bool {
        !matches!(self, Cell::Empty)
    }

    /// Carries no information: empty, filler, or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty | Cell::Spanned(_) => true,
            Cell::Text(t) => t.trim().is_empty(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::Text(t) => Some(t),
            _ => None,
        }
    }

    fn write_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self {
            Cell::Text(t) => t.push_str(text),
            _ => *self = Cell::Text(s!(text)),
        }
    }

    fn add_filler(&mut self) {
        self.add_fillers(1);
    }

    /// `n` fillers at once; the count saturates instead of wrapping.
    fn add_fillers(&mut self, n: usize) {
        let n = u32::try_from(n).unwrap_or(u32::MAX);
        match self {
            Cell::Empty => *self = Cell::Spanned(n),
            Cell::Spanned(have) => *have = have.saturating_add(n),
            Cell::Text(_) => {}
        }
    }

    /// Marker view: fillers as dashes, one per overlapping span.
    pub fn render(&self) -> String {
        match self {
            Cell::Empty => s!(),
            Cell::Spanned(n) => "-".repeat(*n as usize),
            Cell::Text(t) => t.clone(),
        }
    }
}

/// Fixed-size row-major grid. Nothing is ever written outside `rows × cols`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![Cell::Empty; rows * cols] }
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.index(row, col).map(|i| &mut self.cells[i])
    }

    /// Returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.get_mut(row, col) {
            Some(slot) => { *slot = cell; true }
            None => false,
        }
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        if row >= self.rows {
            return &[];
        }
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn render_row(&self, row: usize) -> Vec<String> {
        self.row(row).iter().map(Cell::render).collect()
    }

    fn clamp_col(&self, col: usize) -> usize {
        col.min(self.cols.saturating_sub(1))
    }

    fn is_filled(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_filled)
    }

    /// Lay the source rows out in a dense grid.
    ///
    /// Each cell starts at its own index in the row and slides right past
    /// positions already taken by spans from above. The slide carries over
    /// between the rows a rowspan covers. Its text goes to the top-left
    /// position; every other covered position gets a filler. Columns past the
    /// right edge collapse into the last column, rows past the bottom are
    /// dropped.
    pub fn place(rows: &[SourceRow]) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) + GRID_MARGIN;
        let mut grid = Grid::new(rows.len(), width);

        for (i, row) in rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                let text = clean_cell_text(&cell.text);
                let mut offset = 0;

                for k in 0..cell.row_span.max(1) {
                    let r = i + k;
                    if r >= grid.rows {
                        break;
                    }
                    while j + offset + 1 < grid.cols && grid.is_filled(r, j + offset) {
                        offset += 1;
                    }
                    let start = grid.clamp_col(j + offset);
                    let span = cell.col_span.max(1);
                    let inside = span.min(grid.cols - start);
                    for m in 0..inside {
                        let Some(slot) = grid.get_mut(r, start + m) else { continue };
                        if k == 0 && m == 0 {
                            slot.write_text(&text);
                        } else {
                            slot.add_filler();
                        }
                    }
                    // Whatever hangs past the right edge lands on the last column
                    let overflow = span - inside;
                    if overflow > 0 {
                        let last = grid.clamp_col(usize::MAX);
                        if let Some(slot) = grid.get_mut(r, last) {
                            slot.add_fillers(overflow);
                        }
                    }
                }
            }
        }
        grid
    }

    /// Drop blank rows, then columns blank in every remaining row.
    /// Blank cells in kept columns come out as `Empty`.
    pub fn prune(&self) -> Grid {
        let keep_rows: Vec<usize> = (0..self.rows)
            .filter(|&r| self.row(r).iter().any(|c| !c.is_blank()))
            .collect();
        let keep_cols: Vec<usize> = (0..self.cols)
            .filter(|&c| keep_rows.iter().any(|&r| !self.cells[r * self.cols + c].is_blank()))
            .collect();

        let mut out = Grid::new(keep_rows.len(), keep_cols.len());
        for (ri, &r) in keep_rows.iter().enumerate() {
            for (ci, &c) in keep_cols.iter().enumerate() {
                let cell = &self.cells[r * self.cols + c];
                if !cell.is_blank() {
                    out.set(ri, ci, cell.clone());
                }
            }
        }
        out
    }

    /// Non-blank texts of each column, top to bottom.
    pub fn columns(&self) -> Vec<DaySchedule> {
        (0..self.cols)
            .map(|c| {
                (0..self.rows)
                    .filter_map(|r| self.get(r, c))
                    .filter(|cell| !cell.is_blank())
                    .filter_map(Cell::text)
                    .map(space_time_ranges)
                    .collect()
            })
            .collect()
    }
}
