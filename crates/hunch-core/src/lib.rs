//! Probability-guided Sudoku solving engine.
//!
//! The engine fills a 9x9 grid by sweeping boxes, rows and columns for
//! values with a single legal home, and — when that stalls — by committing
//! the highest-probability guess it can find, up to a configured cap. There
//! is no backtracking: a committed guess is as final as a deduced value, so
//! an inconsistent or under-constrained seed can be "solved" wrongly.

mod grid;
pub mod solver;

pub use grid::{box_origin, Grid, GroupKind, Position};
pub use solver::{Guess, GuessList, Session, SolverConfig};
