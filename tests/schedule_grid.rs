// tests/schedule_grid.rs
//
// Properties of the timetable grid: span coverage, pruning, header column.
//
use ss_scrape::schedule::{reconstruct, Cell, Grid, SourceCell, SourceRow};

fn cell(t: &str) -> SourceCell { SourceCell::new(t) }

fn texts(g: &Grid) -> Vec<String> {
    (0..g.rows())
        .flat_map(|r| g.row(r).iter().filter_map(Cell::text).map(String::from).collect::<Vec<_>>())
        .collect()
}

#[test]
fn two_by_two_span_has_text_once_and_three_fillers() {
    let rows: Vec<SourceRow> = vec![vec![cell("Bild").spanning(2, 2)], vec![]];
    let g = Grid::place(&rows);

    assert_eq!(g.get(0, 0), Some(&Cell::Text("Bild".into())));
    for (r, c) in [(0, 1), (1, 0), (1, 1)] {
        assert!(matches!(g.get(r, c), Some(Cell::Spanned(_))), "({r},{c}) should be a filler");
    }
    assert_eq!(texts(&g), vec!["Bild"]);
}

#[test]
fn ragged_rows_place_every_cell() {
    // Row i has i + 1 cells, the first one two columns wide
    let rows: Vec<SourceRow> = (0..10)
        .map(|i| {
            (0..=i)
                .map(|j| {
                    let c = cell(&format!("r{i}c{j}"));
                    if j == 0 { c.spanning(2, 1) } else { c }
                })
                .collect()
        })
        .collect();

    let g = Grid::place(&rows);
    let mut placed = texts(&g);
    placed.sort();
    let mut expected: Vec<String> = rows.iter().flatten().map(|c| c.text.clone()).collect();
    expected.sort();
    assert_eq!(placed, expected);
}

#[test]
fn pruning_twice_changes_nothing() {
    let rows: Vec<SourceRow> = vec![
        vec![cell(""), cell("Mån"), cell("Tis"), cell("Ons")],
        vec![cell("08:00"), cell("Ma").spanning(1, 3), cell("\u{a0}"), cell("Sv").spanning(2, 1)],
        vec![cell("08:30"), cell("  "), cell("En")],
        vec![cell(""), cell("")],
        vec![cell("09:00"), cell("Id").spanning(3, 1)],
    ];
    let once = Grid::place(&rows).prune();
    let twice = once.prune();
    assert_eq!(once, twice);
}

#[test]
fn column_with_one_real_value_survives() {
    let rows: Vec<SourceRow> = vec![
        vec![cell("08:00"), cell("Ma").spanning(1, 3), cell("")],
        vec![cell("08:30"), cell("")],
        vec![cell("09:00"), cell("Fy")],
    ];
    // Column 2 is blank except for "Fy" at the bottom
    let days = reconstruct(&rows);
    assert_eq!(days, vec![vec!["Ma".to_string()], vec!["Fy".to_string()]]);
}

#[test]
fn first_surviving_column_is_dropped() {
    let rows: Vec<SourceRow> = vec![
        vec![cell("t"), cell("A"), cell("B"), cell("C")],
        vec![cell("u"), cell("a"), cell("b"), cell("c")],
    ];
    let pruned = Grid::place(&rows).prune();
    assert_eq!(pruned.cols(), 4);

    let days = reconstruct(&rows);
    assert_eq!(days.len(), pruned.cols() - 1);
    assert_eq!(days[0], vec!["A", "a"]);
    assert_eq!(days[2], vec!["C", "c"]);
    assert!(days.iter().all(|d| !d.contains(&"t".to_string())));
}

#[test]
fn math_lesson_over_two_slots() {
    let rows: Vec<SourceRow> = vec![
        vec![cell("08:00-09:00"), cell("Math").spanning(1, 2)],
        vec![cell("09:00-10:00")],
    ];
    let g = Grid::place(&rows);
    assert_eq!(g.render_row(0)[..2], ["08:00-09:00".to_string(), "Math".to_string()]);
    assert_eq!(g.render_row(1)[..2], ["09:00-10:00".to_string(), "-".to_string()]);

    let pruned = g.prune();
    assert_eq!(pruned.cols(), 2);
    assert_eq!(reconstruct(&rows), vec![vec!["Math".to_string()]]);
}

#[test]
fn oversized_spans_do_not_panic() {
    let rows: Vec<SourceRow> = vec![
        vec![cell("x").spanning(500, 40), cell("y").spanning(3, 3)],
        vec![cell("z")],
    ];
    let g = Grid::place(&rows);
    let mut placed = texts(&g);
    placed.sort();
    assert_eq!(placed, vec!["x", "y", "z"]);
}
