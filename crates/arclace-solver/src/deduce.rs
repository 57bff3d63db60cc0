//! Positional deduction: the "only remaining candidate" pass.

use arclace_core::{Cell, Grid, Topology};

/// Sweeps the grid once, collapsing every cell whose value is forced by
/// position.
///
/// For each undetermined cell and each of its candidates `v` (ascending),
/// the pass checks whether the cell is the *only* cell in its row that can
/// still hold `v`, then the only one in its column, then the only one in
/// its box; the first scope that matches wins. A match collapses the cell
/// to `{v}` in place and the pass moves on to the next cell.
///
/// Returns `true` if any deduction occurred during the sweep. Callers must
/// re-run the pass (alternating with [`propagate`](crate::propagate)) until
/// a full sweep reports no progress; [`infer`](crate::infer) does exactly
/// that.
pub fn deduce(topology: &Topology, grid: &mut Grid) -> bool {
    let mut progressed = false;
    for &cell in topology.cells() {
        if grid.candidates(cell).len() <= 1 {
            continue;
        }
        for value in grid.candidates(cell) {
            if is_sole_position(grid, cell, value) {
                grid.assign(cell, value);
                progressed = true;
                break;
            }
        }
    }
    progressed
}

/// Returns `true` if no other cell in `cell`'s row, column, or box still
/// has `value` as a candidate.
fn is_sole_position(grid: &Grid, cell: Cell, value: u8) -> bool {
    let sole_in_row = (0..9u8)
        .filter(|&col| col != cell.col())
        .all(|col| !grid.candidates(Cell::new(cell.row(), col)).contains(value));
    if sole_in_row {
        return true;
    }

    let sole_in_col = (0..9u8)
        .filter(|&row| row != cell.row())
        .all(|row| !grid.candidates(Cell::new(row, cell.col())).contains(value));
    if sole_in_col {
        return true;
    }

    let box_row = cell.row() / 3 * 3;
    let box_col = cell.col() / 3 * 3;
    (box_row..box_row + 3)
        .flat_map(|row| (box_col..box_col + 3).map(move |col| Cell::new(row, col)))
        .filter(|&other| other != cell)
        .all(|other| !grid.candidates(other).contains(value))
}
