//! Board coordinates.

use std::fmt::{self, Display};

/// A board coordinate pair `(row, col)`, each in the range 0-8.
///
/// Cell identity is purely positional: the 81 cells of the board are fixed
/// and only ever referenced, never created or destroyed during a solve.
/// [`Cell::ALL`] is the canonical row-major ordering used everywhere a
/// deterministic cell scan is required.
///
/// # Examples
///
/// ```
/// use arclace_core::Cell;
///
/// let cell = Cell::new(4, 7);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 7);
/// assert_eq!(cell.index(), 43);
/// assert_eq!(cell.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// All 81 cells in row-major order, from `(0, 0)` to `(8, 8)`.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a cell from a `(row, col)` pair.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "cell coordinates must be in 0..=8");
        Self { row, col }
    }

    /// Creates a cell from its row-major linear index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index must be in 0..=80");
        #[expect(clippy::cast_possible_truncation)]
        let cell = Self {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        };
        cell
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major linear index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index of the 3×3 box containing this cell (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Returns `true` if both cells lie in the same row.
    #[must_use]
    pub const fn same_row(self, other: Self) -> bool {
        self.row == other.row
    }

    /// Returns `true` if both cells lie in the same column.
    #[must_use]
    pub const fn same_col(self, other: Self) -> bool {
        self.col == other.col
    }

    /// Returns `true` if both cells lie in the same 3×3 box.
    ///
    /// Box membership compares the block origins `row / 3 * 3` and
    /// `col / 3 * 3`.
    #[must_use]
    pub const fn same_box(self, other: Self) -> bool {
        self.row / 3 == other.row / 3 && self.col / 3 == other.col / 3
    }

    /// Returns `true` if `other` is a distinct cell sharing a row, column,
    /// or 3×3 box with this cell.
    #[must_use]
    pub const fn is_peer(self, other: Self) -> bool {
        let distinct = self.row != other.row || self.col != other.col;
        distinct && (self.same_row(other) || self.same_col(other) || self.same_box(other))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
