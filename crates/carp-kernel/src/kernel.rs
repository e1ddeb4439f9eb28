//! `run_carp`: the single entry point driving both the plain and VIZ
//! regularization-path kernels.

use carp_core::errors::{CarpError, ErrorInfo};
use carp_core::{CancelToken, RunConfig, RunStatus, Variant};
use carp_graph::EdgeGraph;
use carp_linalg::CarpFactor;

use crate::buffers::PathBuffers;
use crate::report::{PathResult, RunReport};
use crate::step::{admm_step, KernelState, Scratch};
use crate::viz::{VizOutcome, VizState};

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

/// Runs the CARP / CARP-VIZ regularization path for a single fusion graph.
///
/// `x` is the data term (`n * p`, row-major by observation); `u0`/`v0` seed
/// the primal and split iterates. `edges` are 1-based `(l, m, w)` triples
/// defining the fusion graph.
pub fn run_carp(
    x: &[f64],
    n: usize,
    p: usize,
    edges: &[(usize, usize, f64)],
    u0: &[f64],
    v0: &[f64],
    config: &RunConfig,
    cancel: &CancelToken,
) -> Result<PathResult, CarpError> {
    config.validate()?;
    let graph = EdgeGraph::new(n, p, edges)?;
    let shape = graph.shape();
    check_len(x.len(), shape.primal_len(), "bad-data-length", "data term `x`")?;
    check_len(u0.len(), shape.primal_len(), "bad-u0-length", "initial iterate `u0`")?;
    check_len(v0.len(), shape.split_len(), "bad-v0-length", "initial iterate `v0`")?;

    let factor = CarpFactor::build(&graph, config.rho)?;
    let mut state = KernelState::initial(&graph, u0, v0);
    let mut scratch = Scratch::new(shape);
    let mut buffers =
        PathBuffers::with_initial_observations(n, shape.primal_len(), shape.split_len(), shape.num_edges);
    let mut prev_zeta = state.zeta.clone();
    let mut gamma = config.gamma0;
    let mut k = 0usize;
    let mut multi_merge_events = Vec::new();

    let status = 'run: loop {
        // Burn-in: fixed gamma0, identical for both variants.
        while k < config.burn_in {
            if k > 0 && k % config.check_interval == 0 && cancel.is_cancelled() {
                break 'run RunStatus::Cancelled;
            }
            if k >= config.max_iter {
                break 'run RunStatus::MaxIterReached;
            }
            match admm_step(&graph, &factor, x, config.rho, gamma, config.penalty, &mut state, &mut scratch) {
                Ok(()) => {}
                Err(CarpError::NumericalOverflow(info)) => break 'run RunStatus::NumericalOverflow(info),
                Err(other) => return Err(other),
            }
            if state.zeta != prev_zeta || k % config.keep == 0 {
                buffers.push(&state.u, &state.v, &state.zeta, gamma);
            }
            prev_zeta = state.zeta.clone();
            k += 1;
            if state.num_fused() == shape.num_edges {
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
                match admm_step(&graph, &factor, x, config.rho, gamma, config.penalty, &mut state, &mut scratch) {
                    Ok(()) => {}
                    Err(CarpError::NumericalOverflow(info)) => break 'run RunStatus::NumericalOverflow(info),
                    Err(other) => return Err(other),
                }
                if state.zeta != prev_zeta || k % config.keep == 0 {
                    buffers.push(&state.u, &state.v, &state.zeta, gamma);
                }
                prev_zeta = state.zeta.clone();
                gamma *= config.t;
                k += 1;
                if state.num_fused() == shape.num_edges {
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
                    match admm_step(
                        &graph,
                        &factor,
                        x,
                        config.rho,
                        trial_gamma,
                        config.penalty,
                        &mut trial,
                        &mut scratch,
                    ) {
                        Ok(()) => {}
                        Err(CarpError::NumericalOverflow(info)) => break 'run RunStatus::NumericalOverflow(info),
                        Err(other) => return Err(other),
                    }
                    k += 1;
                    let num_new = trial.num_fused().saturating_sub(state.num_fused());
                    match viz.observe(&config.viz, trial_gamma, num_new) {
                        VizOutcome::Advance => {
                            // Rollback: the trial iterate is discarded; the
                            // next attempt is computed fresh from `state`.
                        }
                        VizOutcome::SingleFusion(committed_gamma) => {
                            state = trial;
                            buffers.push(&state.u, &state.v, &state.zeta, committed_gamma);
                            if state.num_fused() == shape.num_edges {
                                break 'run RunStatus::Completed;
                            }
                            viz.restart_from(committed_gamma);
                        }
                        VizOutcome::BudgetExhausted(committed_gamma) => {
                            state = trial;
                            buffers.push(&state.u, &state.v, &state.zeta, committed_gamma);
                            multi_merge_events.push(buffers.len() - 1);
                            if state.num_fused() == shape.num_edges {
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

    buffers.compact();
    let report = RunReport::new(
        k,
        buffers.len(),
        state.num_fused(),
        shape.num_edges,
        status,
    )?;

    Ok(PathResult {
        u_path: buffers.u_path().to_vec(),
        v_path: buffers.v_path().to_vec(),
        zeta_path: buffers.zeta_path().to_vec(),
        gamma_path: buffers.gamma_path().to_vec(),
        report,
    })
}
