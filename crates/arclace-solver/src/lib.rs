//! Constraint-propagation and search engine for 9×9 Sudoku.
//!
//! The engine layers three mechanisms over the shared
//! [`Grid`](arclace_core::Grid) state:
//!
//! 1. [`propagate`] — queue-driven arc-consistency propagation that shrinks
//!    candidate sets until a fixed point. Sufficient for easy puzzles,
//!    known to be insufficient for many.
//! 2. [`deduce`] — a positional deduction pass that collapses cells whose
//!    value is forced because no other cell in the same row, column, or box
//!    can hold it.
//! 3. [`Solver`] — backtracking search that interleaves guessing with
//!    [`infer`] (propagation + deduction to a joint fixed point), rolling
//!    back to a grid snapshot whenever a guess leads to a contradiction.
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr as _;
//!
//! use arclace_core::{Grid, Topology};
//! use arclace_solver::Solver;
//!
//! let mut grid = Grid::from_str(
//!     "53**7****
//!      6**195***
//!      *98****6*
//!      8***6***3
//!      4**8*3**1
//!      7***2***6
//!      *6****28*
//!      ***419**5
//!      ****8**79",
//! )
//! .unwrap();
//!
//! let topology = Topology::new();
//! let stats = Solver::new(&topology).solve(&mut grid)?;
//!
//! assert!(grid.is_solved());
//! // This puzzle is fully determined by inference alone.
//! assert!(!stats.required_search());
//! # Ok::<(), arclace_solver::SolverError>(())
//! ```

pub use self::{
    deduce::deduce,
    error::SolverError,
    infer::infer,
    propagate::propagate,
    search::{Solver, is_consistent},
    stats::SolveStats,
};

mod deduce;
mod error;
mod infer;
mod propagate;
mod search;
mod stats;

#[cfg(test)]
mod testing;
