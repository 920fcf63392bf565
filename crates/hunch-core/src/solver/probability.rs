//! Probability estimator: scores how contested a candidate placement is
//! within one group.
//!
//! The score is not a statistical probability. It is `100 / places` where
//! `places` counts the candidate cell itself plus every other empty cell in
//! the same group that could also legally hold the value. A uniquely
//! placeable value scores 100; one rival drops it to 50, and so on, floored
//! by integer division.

use crate::grid::{Grid, GroupKind};

/// Probability (0..=100) that `value` at `(row, col)` is the correct
/// placement, judged by the group of `kind` containing the cell. Invalid
/// queries score 0; valid ones always land in 1..=100.
pub fn group_probability(grid: &Grid, kind: GroupKind, row: usize, col: usize, value: u8) -> u8 {
    if row > 8 || col > 8 || !(1..=9).contains(&value) {
        return 0;
    }
    let mut places = 1u32;
    for pos in kind.cells_through(row, col) {
        if (pos.row, pos.col) != (row, col) && grid.can_place(pos.row, pos.col, value) {
            places += 1;
        }
    }
    (100 / places) as u8
}

/// The best of the box, row and column scores for a placement. An auxiliary
/// signal; the solve loop itself works per group kind.
pub fn max_probability(grid: &Grid, row: usize, col: usize, value: u8) -> u8 {
    group_probability(grid, GroupKind::Box, row, col, value)
        .max(group_probability(grid, GroupKind::Row, row, col, value))
        .max(group_probability(grid, GroupKind::Column, row, col, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_slot_scores_certain() {
        // Row 0 holds 1..=8 in columns 0..=7; column 8 is the only slot left
        // for 9 in that row.
        let mut grid = Grid::new();
        for col in 0..8 {
            assert!(grid.place(0, col, col as u8 + 1));
        }
        assert_eq!(group_probability(&grid, GroupKind::Row, 0, 8, 9), 100);
    }

    #[test]
    fn one_rival_halves_the_score() {
        // Columns 7 and 8 of row 0 are both open for 8 and 9.
        let mut grid = Grid::new();
        for col in 0..7 {
            assert!(grid.place(0, col, col as u8 + 1));
        }
        assert_eq!(group_probability(&grid, GroupKind::Row, 0, 8, 9), 50);
        assert_eq!(group_probability(&grid, GroupKind::Row, 0, 7, 9), 50);
    }

    #[test]
    fn integer_division_floors() {
        // Three open cells in row 0 that could each take 7.
        let mut grid = Grid::new();
        for col in 0..6 {
            assert!(grid.place(0, col, col as u8 + 1));
        }
        assert_eq!(group_probability(&grid, GroupKind::Row, 0, 8, 7), 33);
    }

    #[test]
    fn scores_stay_in_bounds() {
        let grid = Grid::new();
        for kind in [GroupKind::Box, GroupKind::Row, GroupKind::Column] {
            for value in 1..=9 {
                let p = group_probability(&grid, kind, 4, 4, value);
                assert!((1..=100).contains(&p), "{:?} scored {}", kind, p);
            }
        }
        // Fully open group: 9 places, floored to 11.
        assert_eq!(group_probability(&grid, GroupKind::Row, 0, 0, 5), 11);
    }

    #[test]
    fn invalid_queries_score_zero() {
        let grid = Grid::new();
        assert_eq!(group_probability(&grid, GroupKind::Row, 9, 0, 5), 0);
        assert_eq!(group_probability(&grid, GroupKind::Column, 0, 9, 5), 0);
        assert_eq!(group_probability(&grid, GroupKind::Box, 0, 0, 0), 0);
        assert_eq!(group_probability(&grid, GroupKind::Box, 0, 0, 10), 0);
    }

    #[test]
    fn max_probability_takes_the_best_signal() {
        // Box holding (0,0) is filled except for (0,0); row and column are
        // otherwise open, so the box signal dominates.
        let mut grid = Grid::new();
        let digits = [[0, 2, 3], [4, 5, 6], [7, 8, 9]];
        for row in 0..3 {
            for col in 0..3 {
                if digits[row][col] != 0 {
                    assert!(grid.place(row, col, digits[row][col]));
                }
            }
        }
        assert_eq!(group_probability(&grid, GroupKind::Box, 0, 0, 1), 100);
        assert!(group_probability(&grid, GroupKind::Row, 0, 0, 1) < 100);
        assert_eq!(max_probability(&grid, 0, 0, 1), 100);
    }
}
