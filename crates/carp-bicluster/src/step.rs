//! The combined row/column ADMM update shared by `run_cbass`.

use carp_core::errors::{CarpError, ErrorInfo};
use carp_core::PenaltyKind;
use carp_graph::EdgeGraph;
use carp_linalg::{apply_d, apply_dt};
use carp_prox::{apply_l1, apply_l2, scan_fusions};

use crate::factor::BiFactor;
use crate::transpose::{to_observation_major, to_variable_major};

/// Mutable iterate state shared across successive combined ADMM steps.
#[derive(Debug, Clone)]
pub struct BiState {
    /// Shared primal iterate, observation-major (`n * p`).
    pub u: Vec<f64>,
    /// Column-direction split iterate (`|E_col| * p`).
    pub v_col: Vec<f64>,
    /// Column-direction scaled dual iterate (`|E_col| * p`).
    pub z_col: Vec<f64>,
    /// Column-direction fusion indicator.
    pub zeta_col: Vec<bool>,
    /// Row-direction split iterate (`|E_row| * n`).
    pub v_row: Vec<f64>,
    /// Row-direction scaled dual iterate (`|E_row| * n`).
    pub z_row: Vec<f64>,
    /// Row-direction fusion indicator.
    pub zeta_row: Vec<bool>,
}

impl BiState {
    /// Builds the initial state from caller-supplied seeds.
    pub fn initial(
        graph_col: &EdgeGraph,
        graph_row: &EdgeGraph,
        u0: &[f64],
        v0_col: &[f64],
        v0_row: &[f64],
    ) -> Self {
        let mut zeta_col = vec![false; graph_col.num_edges()];
        scan_fusions(graph_col, v0_col, &mut zeta_col);
        let mut zeta_row = vec![false; graph_row.num_edges()];
        scan_fusions(graph_row, v0_row, &mut zeta_row);
        Self {
            u: u0.to_vec(),
            v_col: v0_col.to_vec(),
            z_col: vec![0.0; graph_col.shape().split_len()],
            zeta_col,
            v_row: v0_row.to_vec(),
            z_row: vec![0.0; graph_row.shape().split_len()],
            zeta_row,
        }
    }

    /// Total fused edges across both directions.
    pub fn num_fused(&self) -> usize {
        self.zeta_col.iter().filter(|f| **f).count() + self.zeta_row.iter().filter(|f| **f).count()
    }

    /// Whether every edge in both directions has fused.
    pub fn fully_fused(&self, num_edges_col: usize, num_edges_row: usize) -> bool {
        self.zeta_col.iter().filter(|f| **f).count() == num_edges_col
            && self.zeta_row.iter().filter(|f| **f).count() == num_edges_row
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

/// Reusable scratch buffers for [`cbass_step`].
pub struct Scratch {
    rho_v_minus_z_col: Vec<f64>,
    dt_col_term: Vec<f64>,
    rho_v_minus_z_row: Vec<f64>,
    dt_row_term_var_major: Vec<f64>,
    dt_row_term_obs_major: Vec<f64>,
    b: Vec<f64>,
    du_col: Vec<f64>,
    du_row: Vec<f64>,
    u_var_major: Vec<f64>,
    y_col: Vec<f64>,
    y_row: Vec<f64>,
}

impl Scratch {
    /// Allocates scratch buffers for the given column/row shapes.
    pub fn new(n: usize, p: usize, split_len_col: usize, split_len_row: usize) -> Self {
        Self {
            rho_v_minus_z_col: vec![0.0; split_len_col],
            dt_col_term: vec![0.0; n * p],
            rho_v_minus_z_row: vec![0.0; split_len_row],
            dt_row_term_var_major: vec![0.0; n * p],
            dt_row_term_obs_major: vec![0.0; n * p],
            b: vec![0.0; n * p],
            du_col: vec![0.0; split_len_col],
            du_row: vec![0.0; split_len_row],
            u_var_major: vec![0.0; n * p],
            y_col: vec![0.0; split_len_col],
            y_row: vec![0.0; split_len_row],
        }
    }
}

/// Performs one combined row/column ADMM update in place, then rescans
/// fusions in both directions.
#[allow(clippy::too_many_arguments)]
pub fn cbass_step(
    graph_col: &EdgeGraph,
    graph_row: &EdgeGraph,
    factor: &BiFactor,
    x: &[f64],
    n: usize,
    p: usize,
    rho: f64,
    gamma: f64,
    penalty: PenaltyKind,
    state: &mut BiState,
    scratch: &mut Scratch,
) -> Result<(), CarpError> {
    for i in 0..state.v_col.len() {
        scratch.rho_v_minus_z_col[i] = rho * state.v_col[i] - state.z_col[i];
    }
    apply_dt(graph_col, &scratch.rho_v_minus_z_col, &mut scratch.dt_col_term);

    for i in 0..state.v_row.len() {
        scratch.rho_v_minus_z_row[i] = rho * state.v_row[i] - state.z_row[i];
    }
    apply_dt(graph_row, &scratch.rho_v_minus_z_row, &mut scratch.dt_row_term_var_major);
    to_observation_major(&scratch.dt_row_term_var_major, n, p, &mut scratch.dt_row_term_obs_major);

    for i in 0..x.len() {
        scratch.b[i] = x[i] + scratch.dt_col_term[i] + scratch.dt_row_term_obs_major[i];
    }
    state.u = factor.solve(&scratch.b)?;
    check_finite(&state.u, "non-finite-primal")?;

    apply_d(graph_col, &state.u, &mut scratch.du_col);
    for i in 0..state.z_col.len() {
        scratch.y_col[i] = scratch.du_col[i] + state.z_col[i] / rho;
    }
    match penalty {
        PenaltyKind::L2 => apply_l2(graph_col, rho, gamma, &scratch.y_col, &mut state.v_col),
        PenaltyKind::L1 => apply_l1(graph_col, rho, gamma, &scratch.y_col, &mut state.v_col),
    }
    check_finite(&state.v_col, "non-finite-split-col")?;
    for i in 0..state.z_col.len() {
        state.z_col[i] += rho * (scratch.du_col[i] - state.v_col[i]);
    }
    check_finite(&state.z_col, "non-finite-dual-col")?;
    scan_fusions(graph_col, &state.v_col, &mut state.zeta_col);

    to_variable_major(&state.u, n, p, &mut scratch.u_var_major);
    apply_d(graph_row, &scratch.u_var_major, &mut scratch.du_row);
    for i in 0..state.z_row.len() {
        scratch.y_row[i] = scratch.du_row[i] + state.z_row[i] / rho;
    }
    match penalty {
        PenaltyKind::L2 => apply_l2(graph_row, rho, gamma, &scratch.y_row, &mut state.v_row),
        PenaltyKind::L1 => apply_l1(graph_row, rho, gamma, &scratch.y_row, &mut state.v_row),
    }
    check_finite(&state.v_row, "non-finite-split-row")?;
    for i in 0..state.z_row.len() {
        state.z_row[i] += rho * (scratch.du_row[i] - state.v_row[i]);
    }
    check_finite(&state.z_row, "non-finite-dual-row")?;
    scan_fusions(graph_row, &state.v_row, &mut state.zeta_row);

    Ok(())
}
