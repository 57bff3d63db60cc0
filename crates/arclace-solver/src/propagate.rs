//! Arc-consistency propagation (AC-3).

use std::collections::VecDeque;

use arclace_core::{Grid, Topology};

/// Runs arc-consistency propagation over the grid until a fixed point.
///
/// A FIFO work queue is seeded with every arc of the topology. For each arc
/// `(cell, peer)` popped from the front: if `peer` is determined and its
/// sole value is still a candidate of `cell`, the value is removed (a
/// *revision*). A revision shrinks `cell`'s domain, so every arc
/// `(other, cell)` for the remaining neighbors `other != peer` is appended
/// to the back of the queue to be re-checked. The neighbor mask is a set,
/// so no neighbor is enqueued twice within one revision step even though
/// rows, columns, and boxes overlap.
///
/// Termination is guaranteed: candidate sets only ever shrink and are
/// bounded below, so only finitely many revisions can occur.
///
/// Mutates the grid in place. Propagation alone is known to be insufficient
/// to fully solve many puzzles; see [`infer`](crate::infer) and
/// [`Solver`](crate::Solver) for the layers above it.
pub fn propagate(topology: &Topology, grid: &mut Grid) {
    let mut queue: VecDeque<_> = topology.arcs().iter().copied().collect();
    while let Some((cell, peer)) = queue.pop_front() {
        // Only a determined peer can force a removal.
        let Some(value) = grid.candidates(peer).sole() else {
            continue;
        };
        if !grid.remove_candidate(cell, value) {
            continue;
        }
        for other in topology.neighbors(cell) {
            if other != peer {
                queue.push_back((other, cell));
            }
        }
    }
}
