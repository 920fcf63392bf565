//! The 9x9 board, the uniqueness predicates built on it, and the group
//! topology (rows, columns, 3x3 boxes) shared by the solver.
//!
//! Every query keeps the flat boolean contract: an out-of-range coordinate
//! or value answers `false` (or 0), never an error. "Not found" and
//! "invalid query" are deliberately indistinguishable to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell position on the board, row and column both in 0..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One of the three kinds of uniqueness-constrained region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    Row,
    Column,
    Box,
}

/// Top-left cell of box `index`.
///
/// Boxes keep the fixed mapping `row = (b % 3) * 3`, `col = b - (b % 3)`:
///
/// ```text
/// 0 3 6
/// 1 4 7
/// 2 5 8
/// ```
pub fn box_origin(index: usize) -> (usize, usize) {
    ((index % 3) * 3, index - (index % 3))
}

impl GroupKind {
    /// The 9 cells of group `index` (0..=8) of this kind, in scan order.
    pub fn cells(self, index: usize) -> [Position; 9] {
        match self {
            GroupKind::Row => std::array::from_fn(|col| Position::new(index, col)),
            GroupKind::Column => std::array::from_fn(|row| Position::new(row, index)),
            GroupKind::Box => {
                let (box_row, box_col) = box_origin(index);
                std::array::from_fn(|i| Position::new(box_row + i / 3, box_col + i % 3))
            }
        }
    }

    /// The 9 cells of the group of this kind that contains `(row, col)`.
    pub fn cells_through(self, row: usize, col: usize) -> [Position; 9] {
        match self {
            GroupKind::Row => self.cells(row),
            GroupKind::Column => self.cells(col),
            GroupKind::Box => {
                let (box_row, box_col) = (row - row % 3, col - col % 3);
                std::array::from_fn(|i| Position::new(box_row + i / 3, box_col + i % 3))
            }
        }
    }
}

/// The 9x9 board. Each cell holds 0 (empty) or a placed digit 1..=9; no
/// other values ever enter the matrix because `place` rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid (all cells 0).
    pub fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Parse a grid from a string of 81 board characters: `1`..`9` place a
    /// digit, `0` and `.` leave the cell empty, whitespace is ignored.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut grid = Grid::new();
        let mut i = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let value = match c {
                '0' | '.' => 0,
                '1'..='9' => c as u8 - b'0',
                _ => return None,
            };
            if i >= 81 {
                return None;
            }
            grid.cells[i / 9][i % 9] = value;
            i += 1;
        }
        if i == 81 {
            Some(grid)
        } else {
            None
        }
    }

    /// Write `value` at `(row, col)` unconditionally, overwriting any prior
    /// digit. No legality check beyond the range preconditions; callers that
    /// care about emptiness must check it themselves.
    pub fn place(&mut self, row: usize, col: usize, value: u8) -> bool {
        if row > 8 || col > 8 || !(1..=9).contains(&value) {
            return false;
        }
        self.cells[row][col] = value;
        true
    }

    /// The value at `(row, col)`, 0 if empty or out of range.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row > 8 || col > 8 {
            return 0;
        }
        self.cells[row][col]
    }

    /// Whether the cell at `(row, col)` holds 0. Out of range answers false.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        row <= 8 && col <= 8 && self.cells[row][col] == 0
    }

    /// Whether `value` occurs anywhere in `row`.
    pub fn value_in_row(&self, row: usize, value: u8) -> bool {
        if row > 8 || !(1..=9).contains(&value) {
            return false;
        }
        self.cells[row].contains(&value)
    }

    /// Whether `value` occurs anywhere in column `col`.
    pub fn value_in_column(&self, col: usize, value: u8) -> bool {
        if col > 8 || !(1..=9).contains(&value) {
            return false;
        }
        self.cells.iter().any(|row| row[col] == value)
    }

    /// Whether `value` occurs anywhere in the 3x3 box containing `(row, col)`.
    pub fn value_in_box(&self, row: usize, col: usize, value: u8) -> bool {
        if row > 8 || col > 8 || !(1..=9).contains(&value) {
            return false;
        }
        GroupKind::Box
            .cells_through(row, col)
            .iter()
            .any(|pos| self.cells[pos.row][pos.col] == value)
    }

    /// Whether every digit 1..=9 is present in `row`. Presence only; a row
    /// filled with duplicates is not detected here.
    pub fn row_complete(&self, row: usize) -> bool {
        row <= 8 && (1..=9).all(|value| self.value_in_row(row, value))
    }

    /// Whether every digit 1..=9 is present in column `col`.
    pub fn column_complete(&self, col: usize) -> bool {
        col <= 8 && (1..=9).all(|value| self.value_in_column(col, value))
    }

    /// Whether every digit 1..=9 is present in the box containing `(row, col)`.
    pub fn box_complete(&self, row: usize, col: usize) -> bool {
        row <= 8 && col <= 8 && (1..=9).all(|value| self.value_in_box(row, col, value))
    }

    /// Whether group `index` of `kind` is complete.
    pub fn group_complete(&self, kind: GroupKind, index: usize) -> bool {
        match kind {
            GroupKind::Row => self.row_complete(index),
            GroupKind::Column => self.column_complete(index),
            GroupKind::Box => {
                let (row, col) = box_origin(index);
                self.box_complete(row, col)
            }
        }
    }

    /// Whether all 9 rows, 9 columns and 9 boxes are complete. This is the
    /// sole "solved" predicate.
    pub fn is_complete(&self) -> bool {
        (0..9).all(|i| {
            self.row_complete(i) && self.column_complete(i) && {
                let (row, col) = box_origin(i);
                self.box_complete(row, col)
            }
        })
    }

    /// Whether `value` may legally be placed at `(row, col)`: the cell is
    /// empty and the value is absent from its row, column and box. Immediate
    /// local legality only; this never predicts later solvability.
    pub fn can_place(&self, row: usize, col: usize, value: u8) -> bool {
        if row > 8 || col > 8 || !(1..=9).contains(&value) {
            return false;
        }
        self.is_empty(row, col)
            && !self.value_in_row(row, value)
            && !self.value_in_column(col, value)
            && !self.value_in_box(row, col, value)
    }

    /// Row-major snapshot of the current values (0 for empty).
    pub fn cells(&self) -> [[u8; 9]; 9] {
        self.cells
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&v| v != 0)
            .count()
    }
}

impl fmt::Display for Grid {
    /// ASCII board with `.` for empty cells and box separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, values) in self.cells.iter().enumerate() {
            if row == 3 || row == 6 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, &value) in values.iter().enumerate() {
                if col == 3 || col == 6 {
                    write!(f, "| ")?;
                }
                if value == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
