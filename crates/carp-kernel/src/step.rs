//! The single ADMM update shared by the plain and VIZ kernels.

use carp_core::errors::{CarpError, ErrorInfo};
use carp_core::shape::Shape;
use carp_core::PenaltyKind;
use carp_graph::EdgeGraph;
use carp_linalg::{apply_d, apply_dt, CarpFactor};
use carp_prox::{apply_l1, apply_l2, scan_fusions};

/// Mutable iterate state threaded through successive ADMM steps.
#[derive(Debug, Clone)]
pub struct KernelState {
    /// Primal iterate `U` (`n * p`).
    pub u: Vec<f64>,
    /// Split iterate `V` (`|E| * p`).
    pub v: Vec<f64>,
    /// Scaled dual iterate `Z` (`|E| * p`).
    pub z: Vec<f64>,
    /// Fusion indicator, one entry per edge.
    pub zeta: Vec<bool>,
}

impl KernelState {
    /// Builds the initial state from caller-supplied `U0`/`V0`, a zero dual,
    /// and a fusion scan over `V0`.
    pub fn initial(graph: &EdgeGraph, u0: &[f64], v0: &[f64]) -> Self {
        let mut zeta = vec![false; graph.num_edges()];
        scan_fusions(graph, v0, &mut zeta);
        Self {
            u: u0.to_vec(),
            v: v0.to_vec(),
            z: vec![0.0; graph.shape().split_len()],
            zeta,
        }
    }

    /// Number of currently fused edges.
    pub fn num_fused(&self) -> usize {
        self.zeta.iter().filter(|fused| **fused).count()
    }
}

/// Reusable scratch buffers for [`admm_step`], avoiding per-step allocation.
pub struct Scratch {
    rho_v_minus_z: Vec<f64>,
    dt_term: Vec<f64>,
    b: Vec<f64>,
    du: Vec<f64>,
    y: Vec<f64>,
}

impl Scratch {
    /// Allocates scratch buffers sized for `shape`.
    pub fn new(shape: Shape) -> Self {
        Self {
            rho_v_minus_z: vec![0.0; shape.split_len()],
            dt_term: vec![0.0; shape.primal_len()],
            b: vec![0.0; shape.primal_len()],
            du: vec![0.0; shape.split_len()],
            y: vec![0.0; shape.split_len()],
        }
    }
}

fn check_finite(values: &[f64], code: &str) -> Result<(), CarpError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(CarpError::NumericalOverflow(ErrorInfo::new(
            code,
            "iterate developed a non-finite entry",
        )))
    }
}

/// Performs one full U/V/Z ADMM update in place, then rescans fusions.
///
/// `x` is the fixed right-hand side data term (`n * p`, typically the
/// observed data matrix, stacked row-major by observation).
pub fn admm_step(
    graph: &EdgeGraph,
    factor: &CarpFactor,
    x: &[f64],
    rho: f64,
    gamma: f64,
    penalty: PenaltyKind,
    state: &mut KernelState,
    scratch: &mut Scratch,
) -> Result<(), CarpError> {
    for i in 0..state.v.len() {
        scratch.rho_v_minus_z[i] = rho * state.v[i] - state.z[i];
    }
    apply_dt(graph, &scratch.rho_v_minus_z, &mut scratch.dt_term);
    for i in 0..x.len() {
        scratch.b[i] = x[i] + scratch.dt_term[i];
    }
    state.u = factor.solve(&scratch.b)?;
    check_finite(&state.u, "non-finite-primal")?;

    apply_d(graph, &state.u, &mut scratch.du);
    for i in 0..state.z.len() {
        scratch.y[i] = scratch.du[i] + state.z[i] / rho;
    }
    match penalty {
        PenaltyKind::L2 => apply_l2(graph, rho, gamma, &scratch.y, &mut state.v),
        PenaltyKind::L1 => apply_l1(graph, rho, gamma, &scratch.y, &mut state.v),
    }
    check_finite(&state.v, "non-finite-split")?;

    for i in 0..state.z.len() {
        state.z[i] += rho * (scratch.du[i] - state.v[i]);
    }
    check_finite(&state.z, "non-finite-dual")?;

    scan_fusions(graph, &state.v, &mut state.zeta);
    Ok(())
}
