use carp_core::{CancelToken, PenaltyKind, RunConfig, RunStatus, Variant, VizConfig};
use carp_graph::EdgeGraph;
use carp_linalg::apply_d;

use carp_bicluster::run_cbass;

fn complete_graph_edges(k: usize) -> Vec<(usize, usize, f64)> {
    let mut edges = Vec::new();
    for i in 1..=k {
        for j in (i + 1)..=k {
            edges.push((i, j, 1.0));
        }
    }
    edges
}

/// S6 — biclustering symmetry: a symmetric data matrix with identical row
/// and column fusion graphs produces identical row and column fusion paths.
#[test]
fn s6_symmetric_matrix_yields_identical_row_and_column_paths() {
    let edges = complete_graph_edges(4);
    let x = vec![
        0.0, 1.0, 2.0, 3.0, //
        1.0, 0.0, 4.0, 5.0, //
        2.0, 4.0, 0.0, 6.0, //
        3.0, 5.0, 6.0, 0.0,
    ];
    let graph_col = EdgeGraph::new(4, 4, &edges).unwrap();
    let graph_row = EdgeGraph::new(4, 4, &edges).unwrap();
    let mut v0_col = vec![0.0; graph_col.shape().split_len()];
    apply_d(&graph_col, &x, &mut v0_col);
    // x is symmetric, so its variable-major layout is itself.
    let mut v0_row = vec![0.0; graph_row.shape().split_len()];
    apply_d(&graph_row, &x, &mut v0_row);

    let config = RunConfig {
        gamma0: 1e-4,
        t: 1.3,
        rho: 1.0,
        max_iter: 500,
        burn_in: 2,
        keep: 1,
        penalty: PenaltyKind::L2,
        variant: Variant::Plain,
        viz: VizConfig::default(),
        check_interval: 50,
    };
    let cancel = CancelToken::new();
    let result = run_cbass(&x, 4, 4, &edges, &edges, &x, &v0_col, &v0_row, &config, &cancel).unwrap();

    assert_eq!(result.zeta_path_col, result.zeta_path_row);
}

/// A non-finite entry in the data matrix drives the first burn-in step to a
/// non-finite primal; `run_cbass` must surface this as a partial result
/// tagged `NumericalOverflow`, not as a hard `Err`.
#[test]
fn non_finite_iterate_surfaces_as_a_partial_numerical_overflow_result() {
    let edges = complete_graph_edges(3);
    let graph_col = EdgeGraph::new(3, 3, &edges).unwrap();
    let graph_row = EdgeGraph::new(3, 3, &edges).unwrap();
    let clean = vec![0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 2.0, 3.0, 0.0];
    let mut x = clean.clone();
    x[0] = f64::NAN;
    let mut v0_col = vec![0.0; graph_col.shape().split_len()];
    apply_d(&graph_col, &clean, &mut v0_col);
    let mut v0_row = vec![0.0; graph_row.shape().split_len()];
    apply_d(&graph_row, &clean, &mut v0_row);

    let config = RunConfig {
        gamma0: 1e-4,
        t: 1.3,
        rho: 1.0,
        max_iter: 500,
        burn_in: 50,
        keep: 1,
        penalty: PenaltyKind::L2,
        variant: Variant::Plain,
        viz: VizConfig::default(),
        check_interval: 50,
    };
    let cancel = CancelToken::new();
    let result = run_cbass(&x, 3, 3, &edges, &edges, &clean, &v0_col, &v0_row, &config, &cancel).unwrap();

    match result.report.status {
        RunStatus::NumericalOverflow(ref info) => assert!(!info.code.is_empty()),
        other => panic!("expected NumericalOverflow, got {other:?}"),
    }
    assert_eq!(result.u_path.len(), 0, "the overflowing first step must not be recorded");
}
