//! Basic example of driving a solving session.

use hunch_core::{Grid, Session, SolverConfig};

fn main() {
    let puzzle =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let grid = Grid::from_string(puzzle).expect("valid puzzle string");

    println!("Puzzle:");
    println!("{}", grid);

    let mut session = Session::from_grid(
        grid,
        SolverConfig {
            guess_threshold: 50,
            max_guesses: 3,
        },
    );

    if session.solve() {
        println!("Solved ({} guesses spent):", session.guesses_made());
    } else {
        println!(
            "Gave up with {} cells filled ({} guesses spent):",
            session.grid().filled_count(),
            session.guesses_made()
        );
    }
    println!("{}", session.grid());
}
