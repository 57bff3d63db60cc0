//! Example demonstrating a full solve of a hard puzzle.
//!
//! This example shows how to:
//! - Parse a grid from its textual form
//! - Construct the shared [`Topology`] and a [`Solver`] over it
//! - Solve and inspect the search statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Enable solver logging to watch the guess/backtrack cycles:
//!
//! ```sh
//! RUST_LOG=trace cargo run --example solve_puzzle
//! ```

use std::{process, str::FromStr as _};

use arclace_core::{Grid, Topology};
use arclace_solver::Solver;

const PUZZLE: &str = "8********
                      **36*****
                      *7**9*2**
                      *5***7***
                      ****457**
                      ***1***3*
                      **1****68
                      **85***1*
                      *9****4**";

fn main() {
    env_logger::init();

    let mut grid = Grid::from_str(PUZZLE).expect("embedded puzzle must parse");

    println!("Problem:");
    println!("{grid}");
    println!();

    let topology = Topology::new();
    let solver = Solver::new(&topology);
    match solver.solve(&mut grid) {
        Ok(stats) => {
            println!("Solution:");
            println!("{grid}");
            println!();
            println!("Stats:");
            println!("  guesses: {}", stats.guesses);
            println!("  backtracks: {}", stats.backtracks);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
