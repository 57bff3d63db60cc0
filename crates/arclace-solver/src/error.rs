use derive_more::{Display, Error};

/// Errors surfaced by the solving engine.
///
/// A contradiction encountered *during* search is not an error: the search
/// handles it locally by restoring a snapshot and trying the next candidate.
/// It only becomes [`SolverError::Unsolvable`] when every candidate at every
/// level has been exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// No assignment of guesses leads to a contradiction-free, fully
    /// determined grid.
    #[display("puzzle has no solution")]
    Unsolvable,
}
