//! Deterministic propagation sweeps.
//!
//! Each sweep walks every incomplete group of one kind and commits any value
//! that has no other legal home in that group. Placements land mid-sweep, so
//! later cells in the same pass observe them and a single sweep can cascade
//! several forced placements.

use crate::grid::{Grid, GroupKind, Position};

/// One full sweep over the 9 boxes. Returns the number of cells committed.
pub fn solve_boxes(grid: &mut Grid) -> usize {
    sweep(grid, GroupKind::Box)
}

/// One full sweep over the 9 rows. Returns the number of cells committed.
pub fn solve_rows(grid: &mut Grid) -> usize {
    sweep(grid, GroupKind::Row)
}

/// One full sweep over the 9 columns. Returns the number of cells committed.
pub fn solve_columns(grid: &mut Grid) -> usize {
    sweep(grid, GroupKind::Column)
}

fn sweep(grid: &mut Grid, kind: GroupKind) -> usize {
    let mut solved = 0;
    for index in 0..9 {
        if grid.group_complete(kind, index) {
            continue;
        }
        for pos in kind.cells(index) {
            if !grid.is_empty(pos.row, pos.col) {
                continue;
            }
            for value in 1..=9 {
                // A freshly committed value empties no cell, so once this
                // cell is filled can_place goes false for the rest of the
                // value loop.
                if grid.can_place(pos.row, pos.col, value) && !has_rival(grid, kind, pos, value) {
                    grid.place(pos.row, pos.col, value);
                    solved += 1;
                }
            }
        }
    }
    solved
}

/// Whether any other empty cell in the same group could also legally take
/// `value`. Logically the same as "group probability == 100", spelled as a
/// direct scan.
fn has_rival(grid: &Grid, kind: GroupKind, pos: Position, value: u8) -> bool {
    kind.cells_through(pos.row, pos.col)
        .iter()
        .any(|&other| other != pos && grid.can_place(other.row, other.col, value))
}
