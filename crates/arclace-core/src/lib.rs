//! Core data structures for the arclace Sudoku engine.
//!
//! This crate provides the data model shared by all solving components:
//!
//! 1. **Candidate tracking**
//!    - [`candidate_set`]: the set of digits 1-9 a single cell may still take
//!    - [`grid`]: the board-wide mapping from cell to candidate set
//!
//! 2. **Board geometry**
//!    - [`cell`]: `(row, col)` coordinates with row/column/box peer predicates
//!    - [`cell_set`]: an efficient set over all 81 board cells
//!    - [`topology`]: the fixed constraint structure of the 9×9 board, computed
//!      once and shared read-only with the solving engine
//!
//! The grid is the single source of truth mutated by propagation, deduction,
//! and search; everything else here is immutable derived data.
//!
//! # Examples
//!
//! ```
//! use arclace_core::{Cell, Grid, Topology};
//!
//! let mut grid = Grid::unconstrained();
//! assert_eq!(grid.candidates(Cell::new(4, 4)).len(), 9);
//!
//! // Determine one cell; the grid itself applies no constraints, that is
//! // the propagator's job.
//! grid.assign(Cell::new(4, 4), 5);
//! assert_eq!(grid.value(Cell::new(4, 4)), Some(5));
//!
//! // The topology knows which cells constrain each other.
//! let topology = Topology::new();
//! assert!(topology.neighbors(Cell::new(4, 4)).contains(Cell::new(4, 8)));
//! ```

pub mod candidate_set;
pub mod cell;
pub mod cell_set;
pub mod grid;
pub mod topology;

pub use self::{
    candidate_set::CandidateSet,
    cell::Cell,
    cell_set::CellSet,
    grid::{Grid, ParseGridError},
    topology::{Arc, Topology},
};
