//! Group (L2) and element-wise (L1) soft-thresholding proximal operators.

use carp_graph::EdgeGraph;

/// Applies the per-edge threshold `sigma_i = w_i * gamma / rho` used by both
/// proximal variants.
fn threshold(weight: f64, gamma: f64, rho: f64) -> f64 {
    weight * gamma / rho
}

/// Group (L2) soft-threshold: each edge's `p`-block either survives scaled
/// toward zero or collapses to the zero vector as a unit.
///
/// `x` and `out` both have length `graph.num_edges() * graph.p()`; `out` may
/// alias `x`.
pub fn apply_l2(graph: &EdgeGraph, rho: f64, gamma: f64, x: &[f64], out: &mut [f64]) {
    let p = graph.p();
    for (i, edge) in graph.edges().iter().enumerate() {
        let block = graph.block(i);
        let sigma = threshold(edge.w, gamma, rho);
        let block_x = &x[block.clone()];
        let norm = block_x.iter().map(|v| v * v).sum::<f64>().sqrt();
        let scale = if norm > sigma { 1.0 - sigma / norm } else { 0.0 };
        for k in 0..p {
            out[block.start + k] = scale * block_x[k];
        }
    }
}

/// Element-wise (L1) soft-threshold: each coordinate of each edge block is
/// thresholded independently, so a block may fuse on some coordinates and
/// not others.
///
/// `x` and `out` both have length `graph.num_edges() * graph.p()`; `out` may
/// alias `x`.
pub fn apply_l1(graph: &EdgeGraph, rho: f64, gamma: f64, x: &[f64], out: &mut [f64]) {
    for (i, edge) in graph.edges().iter().enumerate() {
        let block = graph.block(i);
        let sigma = threshold(edge.w, gamma, rho);
        for idx in block {
            let value = x[idx];
            out[idx] = value.signum() * (value.abs() - sigma).max(0.0);
        }
    }
}
