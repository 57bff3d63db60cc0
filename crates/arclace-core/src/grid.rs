//! The candidate grid: the entire mutable state of a solve.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{candidate_set::CandidateSet, cell::Cell};

/// The mapping from every one of the 81 cells to its candidate set.
///
/// A `Grid` is the single source of truth mutated by propagation, deduction,
/// and search. A caller supplies an initial grid and receives back either a
/// fully determined grid or a failure signal; nothing else in the engine
/// carries state.
///
/// Cloning a grid is the snapshot mechanism the search uses for rollback:
/// the representation is a flat array of 9-bit sets, so a clone is a plain
/// copy and restoring from it reproduces the prior state exactly.
///
/// # Text format
///
/// Grids parse from and render to a 9×9 character layout: digits `1`-`9` are
/// givens, and `*`, `_`, or `.` mark unknown cells (full candidate set).
/// Whitespace is ignored, so grid literals can be laid out freely:
///
/// ```
/// use std::str::FromStr as _;
///
/// use arclace_core::{Cell, Grid};
///
/// let grid = Grid::from_str(
///     "53**7****
///      6**195***
///      *98****6*
///      8***6***3
///      4**8*3**1
///      7***2***6
///      *6****28*
///      ***419**5
///      ****8**79",
/// )?;
///
/// assert_eq!(grid.value(Cell::new(0, 0)), Some(5));
/// assert_eq!(grid.candidates(Cell::new(0, 2)).len(), 9);
/// # Ok::<(), arclace_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [CandidateSet; 81],
}

impl Grid {
    /// Creates a grid with every cell holding the full candidate set.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            cells: [CandidateSet::FULL; 81],
        }
    }

    /// Returns the candidate set of a cell.
    #[must_use]
    pub const fn candidates(&self, cell: Cell) -> CandidateSet {
        self.cells[cell.index()]
    }

    /// Replaces the candidate set of a cell.
    pub const fn set_candidates(&mut self, cell: Cell, candidates: CandidateSet) {
        self.cells[cell.index()] = candidates;
    }

    /// Collapses a cell to a single value.
    ///
    /// This is the raw mutation used for givens and guesses; it applies no
    /// constraint reasoning of its own.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn assign(&mut self, cell: Cell, value: u8) {
        self.cells[cell.index()] = CandidateSet::singleton(value);
    }

    /// Removes one candidate from a cell, returning whether it was present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn remove_candidate(&mut self, cell: Cell, value: u8) -> bool {
        self.cells[cell.index()].remove(value)
    }

    /// Returns the determined value of a cell, or `None` if the cell is
    /// still undetermined (or contradictory).
    #[must_use]
    pub const fn value(&self, cell: Cell) -> Option<u8> {
        self.candidates(cell).sole()
    }

    /// Returns `true` if every cell is determined to exactly one value.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|set| set.is_singleton())
    }

    /// Returns `true` if any cell's candidate set is empty.
    ///
    /// An empty candidate set is the one unrecoverable condition of a
    /// partial assignment: no value can legally go in that cell.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|set| set.is_empty())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::unconstrained()
    }
}

/// Errors produced when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of non-whitespace characters found.
        count: usize,
    },
    /// A cell character was neither a digit 1-9 nor a placeholder.
    #[display("invalid cell character {ch:?}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::unconstrained();
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            match ch {
                '1'..='9' => {
                    // ch is an ASCII digit, the cast cannot truncate
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch as u8 - b'0';
                    if count < 81 {
                        grid.assign(Cell::from_index(count), value);
                    }
                }
                '*' | '_' | '.' => {}
                _ => return Err(ParseGridError::InvalidCharacter { ch }),
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9u8 {
            if row > 0 {
                f.write_char('\n')?;
            }
            for col in 0..9u8 {
                match self.value(Cell::new(row, col)) {
                    Some(value) => write!(f, "{value}")?,
                    None => f.write_char('*')?,
                }
            }
        }
        Ok(())
    }
}
