//! Shared fixtures and assertions for the engine tests.

use std::str::FromStr as _;

use arclace_core::{Cell, Grid, Topology};

/// A puzzle fully determined by inference alone (no guessing needed).
pub const EASY: &str = "53**7****
                        6**195***
                        *98****6*
                        8***6***3
                        4**8*3**1
                        7***2***6
                        *6****28*
                        ***419**5
                        ****8**79";

/// The unique solution of [`EASY`].
pub const EASY_SOLUTION: &str = "534678912
                                 672195348
                                 198342567
                                 859761423
                                 426853791
                                 713924856
                                 961537284
                                 287419635
                                 345286179";

/// A puzzle that defeats inference and needs guess-and-backtrack cycles.
pub const HARD: &str = "8********
                        **36*****
                        *7**9*2**
                        *5***7***
                        ****457**
                        ***1***3*
                        **1****68
                        **85***1*
                        *9****4**";

/// The unique solution of [`HARD`].
pub const HARD_SOLUTION: &str = "812753649
                                 943682175
                                 675491283
                                 154237896
                                 369845721
                                 287169534
                                 521974368
                                 438526917
                                 796318452";

/// Parses a grid literal, panicking on malformed fixtures.
pub fn grid(s: &str) -> Grid {
    Grid::from_str(s).expect("fixture grid must parse")
}

/// Builds a grid where one row follows a 9-character pattern (digits are
/// givens, `*` is unknown) and every other cell is unconstrained.
pub fn unconstrained_except_row(row: u8, pattern: &str) -> Grid {
    assert_eq!(pattern.len(), 9, "row pattern must have 9 cells");
    let mut grid = Grid::unconstrained();
    for (col, ch) in (0..9u8).zip(pattern.chars()) {
        if let Some(value) = ch.to_digit(10) {
            let value = u8::try_from(value).expect("digit fits in u8");
            grid.assign(Cell::new(row, col), value);
        }
    }
    grid
}

/// Asserts that a grid is a fully determined, constraint-respecting
/// solution: every cell holds exactly one value and no two peers agree.
#[track_caller]
pub fn assert_valid_solution(grid: &Grid) {
    let topology = Topology::new();
    for &cell in topology.cells() {
        let value = grid
            .value(cell)
            .unwrap_or_else(|| panic!("cell {cell} is not determined"));
        for peer in topology.neighbors(cell) {
            assert_ne!(
                grid.value(peer),
                Some(value),
                "cells {cell} and {peer} both hold {value}"
            );
        }
    }
}
