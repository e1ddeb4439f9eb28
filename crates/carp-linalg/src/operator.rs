//! Implicit `D` and `Dᵀ` differencing operators.
//!
//! Neither operator is ever materialized as a matrix (spec §9 design note):
//! both are simple edge-indexed scatter/gather loops over the stacked
//! vectors, costing `O(|E| * p)` per application.

use carp_graph::EdgeGraph;

/// Applies `D`: for each edge, writes `u_l - u_m` into the edge's p-block of `out`.
///
/// `u` must have length `graph.n() * graph.p()`; `out` must have length
/// `graph.num_edges() * graph.p()`.
pub fn apply_d(graph: &EdgeGraph, u: &[f64], out: &mut [f64]) {
    let p = graph.p();
    for (i, edge) in graph.edges().iter().enumerate() {
        let block = graph.block(i);
        let l = edge.range_l(p);
        let m = edge.range_m(p);
        for k in 0..p {
            out[block.start + k] = u[l.start + k] - u[m.start + k];
        }
    }
}

/// Applies `Dᵀ`: for each edge, adds the edge's p-block of `v` into the lower
/// endpoint's block of `out` and subtracts it from the higher endpoint's block.
///
/// `v` must have length `graph.num_edges() * graph.p()`; `out` must have
/// length `graph.n() * graph.p()` and is zeroed before accumulation.
pub fn apply_dt(graph: &EdgeGraph, v: &[f64], out: &mut [f64]) {
    out.iter_mut().for_each(|x| *x = 0.0);
    let p = graph.p();
    for (i, edge) in graph.edges().iter().enumerate() {
        let block = graph.block(i);
        let l = edge.range_l(p);
        let m = edge.range_m(p);
        for k in 0..p {
            let value = v[block.start + k];
            out[l.start + k] += value;
            out[m.start + k] -= value;
        }
    }
}
