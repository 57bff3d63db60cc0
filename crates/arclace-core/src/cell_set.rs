//! A set over all 81 board cells.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

use crate::cell::Cell;

/// An 81-bit set of board cells, stored in a `u128`.
///
/// Used for the precomputed neighbor masks in
/// [`Topology`](crate::Topology) and as the duplicate-suppression set when
/// the propagator re-enqueues arcs. Iteration yields cells in row-major
/// order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set of all 81 cells.
    pub const FULL: Self = Self {
        bits: (1u128 << 81) - 1,
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a cell to the set.
    pub const fn insert(&mut self, cell: Cell) {
        self.bits |= 1u128 << cell.index();
    }

    /// Removes a cell from the set, returning whether it was present.
    pub const fn remove(&mut self, cell: Cell) -> bool {
        let bit = 1u128 << cell.index();
        let present = (self.bits & bit) != 0;
        self.bits &= !bit;
        present
    }

    /// Returns `true` if the set contains the cell.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        (self.bits & (1u128 << cell.index())) != 0
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no cells.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the cells in row-major order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for CellSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitAnd for CellSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Cell>,
    {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellSet")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the cells of a [`CellSet`] in row-major order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Cell::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = CellSet::new();
        let cell = Cell::new(4, 4);

        assert!(!set.contains(cell));
        set.insert(cell);
        assert!(set.contains(cell));
        assert_eq!(set.len(), 1);

        assert!(set.remove(cell));
        assert!(!set.remove(cell));
        assert!(set.is_empty());
    }

    #[test]
    fn test_full_contains_every_cell() {
        assert_eq!(CellSet::FULL.len(), 81);
        for cell in Cell::ALL {
            assert!(CellSet::FULL.contains(cell));
        }
    }

    #[test]
    fn test_iteration_is_row_major() {
        let set = CellSet::from_iter([Cell::new(8, 8), Cell::new(0, 1), Cell::new(3, 0)]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(
            collected,
            vec![Cell::new(0, 1), Cell::new(3, 0), Cell::new(8, 8)]
        );
    }

    #[test]
    fn test_bit_ops() {
        let a = CellSet::from_iter([Cell::new(0, 0), Cell::new(1, 1)]);
        let b = CellSet::from_iter([Cell::new(1, 1), Cell::new(2, 2)]);

        assert_eq!((a | b).len(), 3);
        assert_eq!((a & b).len(), 1);
        assert!((a & b).contains(Cell::new(1, 1)));
    }
}
