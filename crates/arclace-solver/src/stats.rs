//! Counters collected during a solve.

/// Statistics reported by [`Solver::solve`](crate::Solver::solve).
///
/// The counters make the search observable: a puzzle solved with
/// `guesses == 0` was fully determined by inference alone, and every
/// `backtracks` increment corresponds to one snapshot restoration after a
/// guess's subtree proved infeasible.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SolveStats {
    /// Tentative assignments committed by the search.
    pub guesses: usize,
    /// Snapshot restorations after a guess led to a dead end.
    pub backtracks: usize,
}

impl SolveStats {
    /// Creates zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the solve needed the backtracking search at all.
    #[must_use]
    pub const fn required_search(&self) -> bool {
        self.guesses > 0
    }
}
