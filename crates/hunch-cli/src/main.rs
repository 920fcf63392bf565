//! Command-line front end for the solving engine: collects seed placements,
//! runs the solve loop, and prints the board. All solving logic lives in
//! `hunch-core`; this binary only does I/O.

use clap::Parser;
use hunch_core::{Grid, Session, SolverConfig};
use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "hunch", about = "Probability-guided Sudoku solver")]
struct Cli {
    /// Puzzle as 81 characters in row-major order (digits, with 0 or . for
    /// empty). When omitted, placements are read interactively from stdin.
    puzzle: Option<String>,

    /// Minimum probability score (0-100) a guess must reach.
    #[arg(long, default_value_t = 50)]
    threshold: u8,

    /// Maximum number of guesses to commit; 0 disables guessing.
    #[arg(long, default_value_t = 0)]
    max_guesses: u32,

    /// Print the final grid as JSON instead of the ASCII board.
    #[arg(long)]
    json: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = SolverConfig {
        guess_threshold: cli.threshold,
        max_guesses: cli.max_guesses,
    };

    let mut session = match &cli.puzzle {
        Some(text) => match Grid::from_string(text) {
            Some(grid) => Session::from_grid(grid, config),
            None => {
                eprintln!("not a valid 81-character puzzle string");
                std::process::exit(2);
            }
        },
        None => {
            let mut session = Session::new(config);
            read_placements(&mut session)?;
            session
        }
    };

    println!("{}", session.grid());
    println!("Attempting to solve...");
    let solved = session.solve();

    if cli.json {
        let snapshot = serde_json::to_string(&session.render()).map_err(io::Error::other)?;
        println!("{}", snapshot);
    } else {
        println!("{}", session.grid());
    }

    if solved {
        println!("Solved the puzzle ({} guesses spent)", session.guesses_made());
    } else {
        println!(
            "Unable to solve the puzzle ({} cells filled, {} guesses spent)",
            session.grid().filled_count(),
            session.guesses_made()
        );
        std::process::exit(1);
    }
    Ok(())
}

/// Read whitespace-separated `xyv` triples from stdin until a blank line:
/// `x` is the 1-based column, `y` the 1-based row, `v` the value, so `119`
/// puts a 9 in the top-left cell. Illegal placements are skipped.
fn read_placements(session: &mut Session) -> io::Result<()> {
    println!("Enter numbers as xyv triples (x: column 1-9, y: row 1-9, v: value 1-9),");
    println!("separated by spaces. A blank line finishes entry.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        let mut placed = 0;
        for token in line.split_whitespace() {
            match parse_xyv(token) {
                Some((row, col, value)) if session.can_place(row, col, value) => {
                    session.place(row, col, value);
                    placed += 1;
                }
                Some(_) => eprintln!("cannot place {:?} there, skipping", token),
                None => eprintln!("ignoring malformed triple {:?}", token),
            }
        }
        if placed > 0 {
            println!("{}", session.grid());
            println!("Placed {} numbers", placed);
        }
    }
    Ok(())
}

/// Split a 3-digit `xyv` token into (row, col, value), 0-based coordinates.
fn parse_xyv(token: &str) -> Option<(usize, usize, u8)> {
    let bytes = token.as_bytes();
    if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let x = (bytes[0] - b'0') as usize;
    let y = (bytes[1] - b'0') as usize;
    let value = bytes[2] - b'0';
    if x == 0 || y == 0 {
        return None;
    }
    Some((y - 1, x - 1, value))
}
