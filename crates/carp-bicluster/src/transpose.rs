//! Row-major `(n, p)` / `(p, n)` re-layouts of the shared primal `U`.
//!
//! The column fusion graph indexes `U` by observation (`obs * p + var`); the
//! row fusion graph reuses the same [`carp_graph::EdgeGraph`]/`CarpFactor`
//! machinery with its axes swapped, so it needs `U` indexed by variable
//! (`var * n + obs`). These two helpers convert between the layouts.

/// Converts observation-major `u` (`obs * p + var`) into variable-major
/// order (`var * n + obs`).
pub fn to_variable_major(u: &[f64], n: usize, p: usize, out: &mut [f64]) {
    for obs in 0..n {
        for var in 0..p {
            out[var * n + obs] = u[obs * p + var];
        }
    }
}

/// Converts variable-major `u` (`var * n + obs`) into observation-major
/// order (`obs * p + var`).
pub fn to_observation_major(u: &[f64], n: usize, p: usize, out: &mut [f64]) {
    for var in 0..p {
        for obs in 0..n {
            out[obs * p + var] = u[var * n + obs];
        }
    }
}
