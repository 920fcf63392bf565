//! Guess selection: when propagation stalls, score every open candidate and
//! keep the ones tied for the highest probability at or above a threshold.
//!
//! Selection is a two-pass reduction — first find the maximum score, then
//! re-scan and collect every candidate equal to it — shared by the per-box,
//! per-row, per-column and whole-grid selectors so all four keep identical
//! tie-breaking.

use serde::{Deserialize, Serialize};

use super::probability::group_probability;
use crate::grid::{Grid, GroupKind, Position};

/// A proposed placement with its probability score (0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub pos: Position,
    pub value: u8,
    pub probability: u8,
}

/// An ordered collection of guesses. Entries are immutable once appended;
/// the only mutations are appending and dropping the last entry.
#[derive(Debug, Default, Clone)]
pub struct GuessList {
    guesses: Vec<Guess>,
}

impl GuessList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a guess. Rejects out-of-range positions and values; clamps
    /// the probability to 100.
    pub fn append(&mut self, mut guess: Guess) -> bool {
        if guess.pos.row > 8 || guess.pos.col > 8 || !(1..=9).contains(&guess.value) {
            return false;
        }
        if guess.probability > 100 {
            guess.probability = 100;
        }
        self.guesses.push(guess);
        true
    }

    /// Drop the last guess, if any.
    pub fn truncate_last(&mut self) -> bool {
        self.guesses.pop().is_some()
    }

    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guess> {
        self.guesses.iter()
    }
}

/// Two-pass max-then-collect reduction over whatever `enumerate` yields.
///
/// Pass 1 finds the highest probability at or above `threshold`; pass 2
/// re-enumerates and appends every guess exactly at that maximum, so all
/// ties survive, in enumeration order.
fn collect_best<F>(threshold: u8, out: &mut GuessList, enumerate: F)
where
    F: Fn(&mut dyn FnMut(Guess)),
{
    let threshold = threshold.min(100);
    let mut max = 0u8;
    enumerate(&mut |guess: Guess| {
        if guess.probability >= threshold && guess.probability > max {
            max = guess.probability;
        }
    });
    if max == 0 {
        return;
    }
    enumerate(&mut |guess: Guess| {
        if guess.probability >= threshold && guess.probability == max {
            out.append(guess);
        }
    });
}

/// Score every legal candidate in group `index` of `kind` through `emit`.
fn enumerate_group(grid: &Grid, kind: GroupKind, index: usize, emit: &mut dyn FnMut(Guess)) {
    for pos in kind.cells(index) {
        if !grid.is_empty(pos.row, pos.col) {
            continue;
        }
        for value in 1..=9 {
            if !grid.can_place(pos.row, pos.col, value) {
                continue;
            }
            let probability = group_probability(grid, kind, pos.row, pos.col, value);
            emit(Guess {
                pos,
                value,
                probability,
            });
        }
    }
}

fn best_guesses_in_group(
    grid: &Grid,
    kind: GroupKind,
    threshold: u8,
    index: usize,
    out: &mut GuessList,
) -> bool {
    if index > 8 {
        return false;
    }
    collect_best(threshold, out, |emit| {
        enumerate_group(grid, kind, index, emit);
    });
    !out.is_empty()
}

/// Append the tied-best guesses of box `index` to `out`. Returns whether
/// `out` ends up non-empty.
pub fn best_guesses_in_box(grid: &Grid, threshold: u8, index: usize, out: &mut GuessList) -> bool {
    best_guesses_in_group(grid, GroupKind::Box, threshold, index, out)
}

/// Append the tied-best guesses of row `index` to `out`.
pub fn best_guesses_in_row(grid: &Grid, threshold: u8, index: usize, out: &mut GuessList) -> bool {
    best_guesses_in_group(grid, GroupKind::Row, threshold, index, out)
}

/// Append the tied-best guesses of column `index` to `out`.
pub fn best_guesses_in_column(
    grid: &Grid,
    threshold: u8,
    index: usize,
    out: &mut GuessList,
) -> bool {
    best_guesses_in_group(grid, GroupKind::Column, threshold, index, out)
}

/// The tied-best guesses across the whole grid: gather the per-group
/// winners of all 27 groups, then reduce that pool with the same two-pass
/// collection.
pub fn find_best_guesses(grid: &Grid, threshold: u8) -> GuessList {
    let mut pool = GuessList::new();
    for index in 0..9 {
        best_guesses_in_box(grid, threshold, index, &mut pool);
        best_guesses_in_row(grid, threshold, index, &mut pool);
        best_guesses_in_column(grid, threshold, index, &mut pool);
    }

    let mut out = GuessList::new();
    collect_best(threshold, &mut out, |emit| {
        for &guess in pool.iter() {
            emit(guess);
        }
    });
    out
}
