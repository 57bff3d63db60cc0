//! The inference driver: propagation and deduction to a joint fixed point.

use arclace_core::{Grid, Topology};
use log::trace;

use crate::{deduce, propagate};

/// Runs [`propagate`] and [`deduce`] alternately until neither makes
/// progress.
///
/// Each round first propagates to an arc-consistent state, then performs
/// one positional deduction sweep. A successful deduction creates new
/// singletons that can enable fresh propagation, so the loop continues; the
/// next [`propagate`] call re-seeds its work queue from the full arc set.
/// The loop stops after the first sweep with no deductions, at which point
/// the grid is at the combined fixed point.
///
/// This is the complete "solve by inference alone" phase, used both
/// standalone and after every guess of the backtracking search.
pub fn infer(topology: &Topology, grid: &mut Grid) {
    let mut rounds = 0u32;
    loop {
        propagate(topology, grid);
        if !deduce(topology, grid) {
            break;
        }
        rounds += 1;
    }
    trace!("inference reached a fixed point after {rounds} deduction rounds");
}
