//! Fusion detection: deciding whether an edge's split block is exactly zero.

use carp_graph::EdgeGraph;

/// Scans `v` (length `graph.num_edges() * graph.p()`) and writes `true` into
/// `zeta[i]` iff edge `i`'s p-block is exactly zero.
///
/// The same "exactly zero" test applies to both penalty variants: the L2
/// prox collapses a fused block to precisely zero, and the L1 prox zeroes
/// individual coordinates, so "all p components zero" is the correct fusion
/// test in both cases.
pub fn scan(graph: &EdgeGraph, v: &[f64], zeta: &mut [bool]) {
    for (i, _) in graph.edges().iter().enumerate() {
        let block = graph.block(i);
        zeta[i] = v[block].iter().all(|value| *value == 0.0);
    }
}
