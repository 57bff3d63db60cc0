//! Backtracking search over the inference engine.

use arclace_core::{Cell, Grid, Topology};
use log::{debug, trace};

use crate::{SolveStats, SolverError, infer};

/// The backtracking Sudoku solver.
///
/// A `Solver` borrows an immutable [`Topology`] at construction and owns no
/// other state; all mutable state lives in the [`Grid`] passed to
/// [`solve`](Self::solve). The search is deterministic: cells are scanned
/// in the fixed row-major order and candidates are tried in ascending
/// order, so solving the same input twice yields the identical output.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use arclace_core::{Grid, Topology};
/// use arclace_solver::Solver;
///
/// let topology = Topology::new();
/// let solver = Solver::new(&topology);
///
/// let mut grid = Grid::from_str(
///     "***26*7*1
///      68**7**9*
///      19***45**
///      82*1***4*
///      **46*29**
///      *5***3*28
///      **93***74
///      *4**5**36
///      7*3*18***",
/// )
/// .unwrap();
///
/// let stats = solver.solve(&mut grid)?;
/// assert!(grid.is_solved());
/// # let _ = stats;
/// # Ok::<(), arclace_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    topology: &'a Topology,
}

impl<'a> Solver<'a> {
    /// Creates a solver over a shared topology.
    #[must_use]
    pub const fn new(topology: &'a Topology) -> Self {
        Self { topology }
    }

    /// Solves the grid in place.
    ///
    /// Runs [`infer`] first; if the grid is not fully determined by
    /// inference, the backtracking search takes over: it finds the first
    /// undetermined cell in the fixed scan order, tries its candidates in
    /// ascending order, and for each locally consistent candidate snapshots
    /// the grid, commits the guess, re-runs inference, and recurses. A
    /// contradiction anywhere below restores the snapshot and moves on to
    /// the next candidate.
    ///
    /// On success the grid is the first solution found and the returned
    /// [`SolveStats`] describe the search effort.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if no assignment of guesses
    /// leads to a contradiction-free, fully determined grid. The grid is
    /// left in its inferred (pre-guess) state.
    pub fn solve(&self, grid: &mut Grid) -> Result<SolveStats, SolverError> {
        let mut stats = SolveStats::new();
        infer(self.topology, grid);
        if !grid.has_contradiction() && self.search(grid, &mut stats) {
            debug!(
                "solved with {} guesses and {} backtracks",
                stats.guesses, stats.backtracks
            );
            Ok(stats)
        } else {
            debug!("unsolvable after {} guesses", stats.guesses);
            Err(SolverError::Unsolvable)
        }
    }

    fn search(&self, grid: &mut Grid, stats: &mut SolveStats) -> bool {
        // First undetermined cell in the fixed scan order. If there is
        // none, every cell is a singleton and the grid is solved.
        let undetermined = self
            .topology
            .cells()
            .iter()
            .copied()
            .find(|&cell| grid.candidates(cell).len() > 1);
        let Some(cell) = undetermined else {
            return true;
        };

        for value in grid.candidates(cell) {
            if !is_consistent(self.topology, grid, cell, value) {
                continue;
            }
            stats.guesses += 1;
            trace!("guessing {value} at {cell}");

            let snapshot = grid.clone();
            grid.assign(cell, value);
            infer(self.topology, grid);
            if !grid.has_contradiction() && self.search(grid, stats) {
                return true;
            }

            *grid = snapshot;
            stats.backtracks += 1;
            trace!("ruled out {value} at {cell}");
        }
        false
    }
}

/// Returns `true` if no neighbor of `cell` is already determined to
/// `value`.
///
/// This is the cheap local pre-check the search applies before committing a
/// guess; full inference after the guess catches everything it cannot.
#[must_use]
pub fn is_consistent(topology: &Topology, grid: &Grid, cell: Cell, value: u8) -> bool {
    topology
        .neighbors(cell)
        .into_iter()
        .all(|peer| grid.candidates(peer).sole() != Some(value))
}
