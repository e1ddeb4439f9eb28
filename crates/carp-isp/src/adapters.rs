//! Adapters from the kernel crates' result types into [`RawPath`], closing
//! the control/data flow `PathKernel`/`VizKernel`/`BiKernel` → ISP.

use std::collections::BTreeSet;

use carp_core::RunStatus;
use carp_bicluster::kernel::BiPathResult;
use carp_kernel::report::PathResult;

use crate::path::RawPath;

fn multi_merge_columns(status: &RunStatus) -> BTreeSet<usize> {
    match status {
        RunStatus::MultiMerge { events } => events.iter().copied().collect(),
        _ => BTreeSet::new(),
    }
}

/// Builds a [`RawPath`] from a single-graph `run_carp` result.
///
/// `primal_len` (`n * p`) and `split_len` (`|E| * p`) are supplied by the
/// caller, since a zero-column path carries no columns from which to infer
/// them.
pub fn from_path_result(result: &PathResult, primal_len: usize, split_len: usize) -> RawPath {
    RawPath {
        u_path: result.u_path.clone(),
        v_path: result.v_path.clone(),
        zeta_path: result.zeta_path.clone(),
        gamma_path: result.gamma_path.clone(),
        primal_len,
        split_len,
        num_edges: result.report.num_edges,
        multi_merge_columns: multi_merge_columns(&result.report.status),
        ran_to_full_fusion: result.report.status.is_complete(),
    }
}

/// Builds the column-direction [`RawPath`] from a `run_cbass` result.
pub fn from_bi_path_result_col(
    result: &BiPathResult,
    primal_len: usize,
    split_len_col: usize,
    num_edges_col: usize,
) -> RawPath {
    RawPath {
        u_path: result.u_path.clone(),
        v_path: result.v_path_col.clone(),
        zeta_path: result.zeta_path_col.clone(),
        gamma_path: result.gamma_path.clone(),
        primal_len,
        split_len: split_len_col,
        num_edges: num_edges_col,
        multi_merge_columns: multi_merge_columns(&result.report.status),
        ran_to_full_fusion: result.report.status.is_complete(),
    }
}

/// Builds the row-direction [`RawPath`] from a `run_cbass` result.
pub fn from_bi_path_result_row(
    result: &BiPathResult,
    primal_len: usize,
    split_len_row: usize,
    num_edges_row: usize,
) -> RawPath {
    RawPath {
        u_path: result.u_path.clone(),
        v_path: result.v_path_row.clone(),
        zeta_path: result.zeta_path_row.clone(),
        gamma_path: result.gamma_path.clone(),
        primal_len,
        split_len: split_len_row,
        num_edges: num_edges_row,
        multi_merge_columns: multi_merge_columns(&result.report.status),
        ran_to_full_fusion: result.report.status.is_complete(),
    }
}
