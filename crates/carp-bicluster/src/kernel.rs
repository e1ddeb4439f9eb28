//! `run_cbass`: the convex biclustering entry point coupling a row and a
//! column `PathKernel` over a single shared primal.

use carp_core::errors::{CarpError, ErrorInfo};
use carp_core::{CancelToken, RunConfig, RunStatus, Variant};
use carp_graph::EdgeGraph;
use carp_kernel::report::RunReport;
use carp_kernel::{VizOutcome, VizState};

use crate::factor::BiFactor;
use crate::step::{cbass_step, BiState, Scratch};

fn check_len(actual: usize, expected: usize, code: &str, label: &str) -> Result<(), CarpError> {
    if actual == expected {
        Ok(())
    } else {
        Err(CarpError::InvalidInput(
            ErrorInfo::new(code, format!("{label} has the wrong length"))
                .with_context("expected", expected.to_string())
                .with_context("actual", actual.to_string()),
        ))
    }
}

/// Full result of a `run_cbass` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BiPathResult {
    /// Shared primal path, observation-major (`columns * n * p`).
    pub u_path: Vec<f64>,
    /// Column-direction split path (`columns * |E_col| * p`).
    pub v_path_col: Vec<f64>,
    /// Row-direction split path (`columns * |E_row| * n`).
    pub v_path_row: Vec<f64>,
    /// Column-direction fusion path (`columns * |E_col|`).
    pub zeta_path_col: Vec<bool>,
    /// Row-direction fusion path (`columns * |E_row|`).
    pub zeta_path_row: Vec<bool>,
    /// Recorded `gamma` value for each column.
    pub gamma_path: Vec<f64>,
    /// Summary report for the run.
    pub report: RunReport,
}

struct Columns {
    u: Vec<f64>,
    v_col: Vec<f64>,
    v_row: Vec<f64>,
    zeta_col: Vec<bool>,
    zeta_row: Vec<bool>,
    gamma: Vec<f64>,
}

impl Columns {
    fn new() -> Self {
        Self {
            u: Vec::new(),
            v_col: Vec::new(),
            v_row: Vec::new(),
            zeta_col: Vec::new(),
            zeta_row: Vec::new(),
            gamma: Vec::new(),
        }
    }

    fn push(&mut self, state: &BiState, gamma: f64) {
        self.u.extend_from_slice(&state.u);
        self.v_col.extend_from_slice(&state.v_col);
        self.v_row.extend_from_slice(&state.v_row);
        self.zeta_col.extend_from_slice(&state.zeta_col);
        self.zeta_row.extend_from_slice(&state.zeta_row);
        self.gamma.push(gamma);
    }

    fn len(&self) -> usize {
        self.gamma.len()
    }
}

/// Runs the CBASS biclustering path, coupling row and column fusion graphs
/// over a single shared primal.
///
/// `x` is the data matrix (`n * p`, observation-major); `edges_col` are
/// 1-based observation-pair edges, `edges_row` are 1-based variable-pair
/// edges. `u0` seeds the shared primal; `v0_col`/`v0_row` seed the two
/// split iterates.
#[allow(clippy::too_many_arguments)]
pub fn run_cbass(
    x: &[f64],
    n: usize,
    p: usize,
    edges_col: &[(usize, usize, f64)],
    edges_row: &[(usize, usize, f64)],
    u0: &[f64],
    v0_col: &[f64],
    v0_row: &[f64],
    config: &RunConfig,
    cancel: &CancelToken,
) -> Result<BiPathResult, CarpError> {
    config.validate()?;
    let graph_col = EdgeGraph::new(n, p, edges_col)?;
    let graph_row = EdgeGraph::new(p, n, edges_row)?;
    let shape_col = graph_col.shape();
    let shape_row = graph_row.shape();

    check_len(x.len(), n * p, "bad-data-length", "data matrix `x`")?;
    check_len(u0.len(), n * p, "bad-u0-length", "initial primal `u0`")?;
    check_len(v0_col.len(), shape_col.split_len(), "bad-v0-col-length", "initial iterate `v0_col`")?;
    check_len(v0_row.len(), shape_row.split_len(), "bad-v0-row-length", "initial iterate `v0_row`")?;

    let factor = BiFactor::build(&graph_col, &graph_row, config.rho)?;
    let mut state = BiState::initial(&graph_col, &graph_row, u0, v0_col, v0_row);
    let mut scratch = Scratch::new(n, p, shape_col.split_len(), shape_row.split_len());
    let mut columns = Columns::new();
    let mut gamma = config.gamma0;
    let mut k = 0usize;
    let mut multi_merge_events = Vec::new();
    let mut prev_zeta_col = state.zeta_col.clone();
    let mut prev_zeta_row = state.zeta_row.clone();

    let mut step = |gamma: f64, state: &mut BiState| -> Result<(), CarpError> {
        cbass_step(&graph_col, &graph_row, &factor, x, n, p, config.rho, gamma, config.penalty, state, &mut scratch)
    };

    let status = 'run: loop {
        while k < config.burn_in {
            if k > 0 && k % config.check_interval == 0 && cancel.is_cancelled() {
                break 'run RunStatus::Cancelled;
            }
            if k >= config.max_iter {
                break 'run RunStatus::MaxIterReached;
            }
            match step(gamma, &mut state) {
                Ok(()) => {}
                Err(CarpError::NumericalOverflow(info)) => break 'run RunStatus::NumericalOverflow(info),
                Err(other) => return Err(other),
            }
            if state.zeta_col != prev_zeta_col || state.zeta_row != prev_zeta_row || k % config.keep == 0 {
                columns.push(&state, gamma);
            }
            prev_zeta_col = state.zeta_col.clone();
            prev_zeta_row = state.zeta_row.clone();
            k += 1;
            if state.fully_fused(shape_col.num_edges, shape_row.num_edges) {
                break 'run RunStatus::Completed;
            }
        }

        match config.variant {
            Variant::Plain => loop {
                if k >= config.max_iter {
                    break 'run RunStatus::MaxIterReached;
                }
                if k > 0 && k % config.check_interval == 0 && cancel.is_cancelled() {
                    break 'run RunStatus::Cancelled;
                }
                match step(gamma, &mut state) {
                    Ok(()) => {}
                    Err(CarpError::NumericalOverflow(info)) => break 'run RunStatus::NumericalOverflow(info),
                    Err(other) => return Err(other),
                }
                if state.zeta_col != prev_zeta_col || state.zeta_row != prev_zeta_row || k % config.keep == 0 {
                    columns.push(&state, gamma);
                }
                prev_zeta_col = state.zeta_col.clone();
                prev_zeta_row = state.zeta_row.clone();
                gamma *= config.t;
                k += 1;
                if state.fully_fused(shape_col.num_edges, shape_row.num_edges) {
                    break 'run RunStatus::Completed;
                }
            },
            Variant::Viz => {
                let mut viz = VizState::start(gamma);
                loop {
                    if k >= config.max_iter {
                        break 'run RunStatus::MaxIterReached;
                    }
                    if k > 0 && k % config.check_interval == 0 && cancel.is_cancelled() {
                        break 'run RunStatus::Cancelled;
                    }
                    let trial_gamma = viz.next_gamma(&config.viz);
                    let mut trial = state.clone();
                    match step(trial_gamma, &mut trial) {
                        Ok(()) => {}
                        Err(CarpError::NumericalOverflow(info)) => break 'run RunStatus::NumericalOverflow(info),
                        Err(other) => return Err(other),
                    }
                    k += 1;
                    let num_new = trial.num_fused().saturating_sub(state.num_fused());
                    match viz.observe(&config.viz, trial_gamma, num_new) {
                        VizOutcome::Advance => {}
                        VizOutcome::SingleFusion(committed_gamma) => {
                            state = trial;
                            columns.push(&state, committed_gamma);
                            if state.fully_fused(shape_col.num_edges, shape_row.num_edges) {
                                break 'run RunStatus::Completed;
                            }
                            viz.restart_from(committed_gamma);
                        }
                        VizOutcome::BudgetExhausted(committed_gamma) => {
                            state = trial;
                            columns.push(&state, committed_gamma);
                            multi_merge_events.push(columns.len() - 1);
                            if state.fully_fused(shape_col.num_edges, shape_row.num_edges) {
                                break 'run RunStatus::Completed;
                            }
                            viz.restart_from(committed_gamma);
                        }
                    }
                }
            }
        }
    };

    let status = if status == RunStatus::Completed && !multi_merge_events.is_empty() {
        RunStatus::MultiMerge { events: multi_merge_events }
    } else {
        status
    };

    let report = RunReport::new(
        k,
        columns.len(),
        state.num_fused(),
        shape_col.num_edges + shape_row.num_edges,
        status,
    )?;

    Ok(BiPathResult {
        u_path: columns.u,
        v_path_col: columns.v_col,
        v_path_row: columns.v_row,
        zeta_path_col: columns.zeta_col,
        zeta_path_row: columns.zeta_row,
        gamma_path: columns.gamma,
        report,
    })
}
