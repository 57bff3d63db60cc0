//! The fixed constraint structure of the 9×9 board.
//!
//! The board topology never changes: which cells exist, which cells
//! constrain each other, and the directed arcs between them are pure
//! functions of the 9×9/3×3 layout. [`Topology`] computes all of it once at
//! construction and is then shared by reference, read-only, for the life of
//! the solve.

use crate::{cell::Cell, cell_set::CellSet};

/// A directed constraint arc: an ordered pair of distinct cells sharing a
/// row, column, or 3×3 box.
///
/// For an arc `(a, b)`, the propagator revises `a`'s candidate set against
/// `b`'s determined value.
pub type Arc = (Cell, Cell);

/// The precomputed cells, arcs, and neighbor masks of the board.
///
/// Per cell there are 20 neighbors (8 in the row, 8 in the column, and 4
/// more in the box), giving 81 × 20 = 1620 directed arcs in total.
///
/// # Examples
///
/// ```
/// use arclace_core::{Cell, Topology};
///
/// let topology = Topology::new();
/// assert_eq!(topology.cells().len(), 81);
/// assert_eq!(topology.arcs().len(), 1620);
/// assert_eq!(topology.neighbors(Cell::new(0, 0)).len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    cells: [Cell; 81],
    arcs: Vec<Arc>,
    neighbors: [CellSet; 81],
}

impl Topology {
    /// Derives the full topology.
    ///
    /// Arcs are ordered by the row-major double scan over ordered cell
    /// pairs, which fixes the propagator's initial queue order.
    #[must_use]
    pub fn new() -> Self {
        let mut arcs = Vec::with_capacity(81 * 20);
        let mut neighbors = [CellSet::EMPTY; 81];
        for a in Cell::ALL {
            for b in Cell::ALL {
                if a.is_peer(b) {
                    arcs.push((a, b));
                    neighbors[a.index()].insert(b);
                }
            }
        }
        Self {
            cells: Cell::ALL,
            arcs,
            neighbors,
        }
    }

    /// Returns all 81 cells in the fixed row-major scan order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 81] {
        &self.cells
    }

    /// Returns all directed arcs.
    #[must_use]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Returns the set of cells sharing a row, column, or box with `cell`.
    #[must_use]
    pub const fn neighbors(&self, cell: Cell) -> CellSet {
        self.neighbors[cell.index()]
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}
