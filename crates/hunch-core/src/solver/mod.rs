//! Solve loop orchestration.
//!
//! A `Session` owns one grid plus the guessing configuration. `solve` runs
//! the three deterministic sweeps to a fixpoint and, when they stall, lets
//! the guess selector commit its best candidate — directly, with no undo —
//! until the grid completes, progress dries up, or the guess cap is spent.

pub mod guess;
pub mod probability;
pub mod sweep;

use log::debug;
use serde::{Deserialize, Serialize};

pub use guess::{Guess, GuessList};

use crate::grid::Grid;

/// Guessing configuration for a solving session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Minimum probability score (0..=100) a guess must reach to be
    /// eligible for selection.
    pub guess_threshold: u8,
    /// Total guesses the session may commit. 0 disables guessing.
    pub max_guesses: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            guess_threshold: 50,
            max_guesses: 0,
        }
    }
}

/// A solving session: one grid, one configuration, one running guess count.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    config: SolverConfig,
    guesses_made: u32,
}

impl Session {
    /// Create a session over an empty grid.
    pub fn new(config: SolverConfig) -> Self {
        Self::from_grid(Grid::new(), config)
    }

    /// Create a session over an already-seeded grid.
    pub fn from_grid(grid: Grid, config: SolverConfig) -> Self {
        Self {
            grid,
            config,
            guesses_made: 0,
        }
    }

    /// Unconditionally write a seed value; see [`Grid::place`].
    pub fn place(&mut self, row: usize, col: usize, value: u8) -> bool {
        self.grid.place(row, col, value)
    }

    /// Legality probe; see [`Grid::can_place`].
    pub fn can_place(&self, row: usize, col: usize, value: u8) -> bool {
        self.grid.can_place(row, col, value)
    }

    /// The grid as it currently stands.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Row-major snapshot of the current values, 0 for empty.
    pub fn render(&self) -> [[u8; 9]; 9] {
        self.grid.cells()
    }

    /// How many guesses the session has committed so far.
    pub fn guesses_made(&self) -> u32 {
        self.guesses_made
    }

    /// Run the solve loop to termination. Returns whether the grid ended
    /// complete; `false` means the engine gave up with cells still open.
    pub fn solve(&mut self) -> bool {
        loop {
            let mut progress = false;

            for (name, sweep) in [
                ("box", sweep::solve_boxes as fn(&mut Grid) -> usize),
                ("row", sweep::solve_rows),
                ("column", sweep::solve_columns),
            ] {
                let solved = sweep(&mut self.grid);
                if solved > 0 {
                    debug!("{} sweep solved {} cells", name, solved);
                    progress = true;
                }
            }

            let complete = self.grid.is_complete();
            if progress {
                // Deterministic progress: go around again even when already
                // complete, so the last pass confirms the fixpoint.
                continue;
            }
            if complete {
                break;
            }
            if self.config.max_guesses > 0 && self.commit_best_guess() {
                continue;
            }
            // Stalled with no guess to spend.
            break;
        }
        self.grid.is_complete()
    }

    /// Commit the first placeable guess from a fresh whole-grid selection.
    /// The guess list lives only for this call; a committed guess becomes an
    /// ordinary grid value.
    fn commit_best_guess(&mut self) -> bool {
        if self.guesses_made >= self.config.max_guesses {
            return false;
        }
        let list = guess::find_best_guesses(&self.grid, self.config.guess_threshold);
        for &candidate in list.iter() {
            if self
                .grid
                .can_place(candidate.pos.row, candidate.pos.col, candidate.value)
            {
                self.grid
                    .place(candidate.pos.row, candidate.pos.col, candidate.value);
                self.guesses_made += 1;
                debug!(
                    "guessed {} at ({}, {}) with probability {} ({}/{} guesses spent)",
                    candidate.value,
                    candidate.pos.row,
                    candidate.pos.col,
                    candidate.probability,
                    self.guesses_made,
                    self.config.max_guesses
                );
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

    fn no_guessing() -> SolverConfig {
        SolverConfig {
            guess_threshold: 50,
            max_guesses: 0,
        }
    }

    #[test]
    fn empty_grid_without_guessing_gives_up_untouched() {
        let mut session = Session::new(no_guessing());
        assert!(!session.solve());
        assert_eq!(session.grid().filled_count(), 0);
        assert_eq!(session.guesses_made(), 0);
    }

    #[test]
    fn solved_grid_reports_complete() {
        let grid = Grid::from_string(SOLVED).unwrap();
        let mut session = Session::from_grid(grid, no_guessing());
        assert!(session.solve());
    }

    #[test]
    fn one_missing_cell_is_recovered() {
        let mut chars: Vec<u8> = SOLVED.bytes().collect();
        chars[2 * 9 + 6] = b'0';
        let grid = Grid::from_string(&String::from_utf8(chars).unwrap()).unwrap();
        let expected = SOLVED.as_bytes()[2 * 9 + 6] - b'0';

        let mut session = Session::from_grid(grid, no_guessing());
        assert!(session.solve());
        assert_eq!(session.grid().get(2, 6), expected);
        assert_eq!(session.guesses_made(), 0);
    }

    #[test]
    fn blanked_box_solves_deterministically() {
        let mut chars: Vec<u8> = SOLVED.bytes().collect();
        for row in 0..3 {
            for col in 0..3 {
                chars[row * 9 + col] = b'0';
            }
        }
        let grid = Grid::from_string(&String::from_utf8(chars).unwrap()).unwrap();
        let mut session = Session::from_grid(grid, no_guessing());
        assert!(session.solve());
        assert_eq!(session.grid(), &Grid::from_string(SOLVED).unwrap());
    }

    #[test]
    fn guess_cap_is_respected() {
        // An empty grid never propagates, so every placement is a guess.
        let mut session = Session::new(SolverConfig {
            guess_threshold: 0,
            max_guesses: 5,
        });
        assert!(!session.solve());
        assert_eq!(session.guesses_made(), 5);
        assert_eq!(session.grid().filled_count(), 5);
    }

    #[test]
    fn single_guess_fills_one_cell() {
        let mut session = Session::new(SolverConfig {
            guess_threshold: 0,
            max_guesses: 1,
        });
        assert!(!session.solve());
        assert_eq!(session.guesses_made(), 1);
        assert_eq!(session.grid().filled_count(), 1);
    }

    #[test]
    fn high_threshold_blocks_uncertain_guesses() {
        // On an empty grid every candidate scores 11; a 50 threshold means
        // no guess is ever eligible.
        let mut session = Session::new(SolverConfig {
            guess_threshold: 50,
            max_guesses: 10,
        });
        assert!(!session.solve());
        assert_eq!(session.guesses_made(), 0);
        assert_eq!(session.grid().filled_count(), 0);
    }

    #[test]
    fn guessing_finishes_a_nearly_full_grid() {
        // Blank one cell and let the selector find it even with guessing
        // enabled; the cap must not be spent on a forced cell.
        let mut chars: Vec<u8> = SOLVED.bytes().collect();
        chars[40] = b'0';
        let grid = Grid::from_string(&String::from_utf8(chars).unwrap()).unwrap();
        let mut session = Session::from_grid(
            grid,
            SolverConfig {
                guess_threshold: 50,
                max_guesses: 3,
            },
        );
        assert!(session.solve());
        assert_eq!(session.guesses_made(), 0);
    }

    #[test]
    fn seed_placements_flow_through_the_session() {
        let mut session = Session::new(no_guessing());
        assert!(session.place(0, 0, 5));
        assert!(!session.place(0, 0, 0));
        assert!(!session.can_place(0, 1, 5));
        assert!(session.can_place(1, 3, 5));
        assert_eq!(session.render()[0][0], 5);
    }

    #[test]
    fn render_snapshot_matches_grid() {
        let grid = Grid::from_string(SOLVED).unwrap();
        let session = Session::from_grid(grid, no_guessing());
        assert_eq!(session.render(), grid.cells());
    }
}
