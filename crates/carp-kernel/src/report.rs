//! Structured results returned to callers of [`crate::run_carp`].

use carp_core::hash::hash_report;
use carp_core::{CarpError, RunStatus};
use serde::{Deserialize, Serialize};

/// Summary statistics recorded alongside a path, independent of its (large)
/// `U`/`V`/`zeta` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Number of iterations actually executed.
    pub iterations: usize,
    /// Number of columns recorded in the path.
    pub columns: usize,
    /// Number of fused edges at termination.
    pub final_num_fused: usize,
    /// Total number of edges in the fusion graph.
    pub num_edges: usize,
    /// Terminal status of the run.
    pub status: RunStatus,
    /// Canonical content hash of this report, used to compare two runs for
    /// bit-identical output without diffing their full paths.
    pub run_hash: String,
}

impl RunReport {
    /// Builds a report and stamps it with its own canonical hash.
    pub fn new(
        iterations: usize,
        columns: usize,
        final_num_fused: usize,
        num_edges: usize,
        status: RunStatus,
    ) -> Result<Self, CarpError> {
        let mut report = Self {
            iterations,
            columns,
            final_num_fused,
            num_edges,
            status,
            run_hash: String::new(),
        };
        report.run_hash = hash_report(&report)?;
        Ok(report)
    }
}

/// Full result of a `run_carp` invocation: the recorded path plus its
/// summary report.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// `U` path, column-major (`columns * n * p`).
    pub u_path: Vec<f64>,
    /// `V` path, column-major (`columns * |E| * p`).
    pub v_path: Vec<f64>,
    /// `zeta` path, column-major (`columns * |E|`).
    pub zeta_path: Vec<bool>,
    /// Recorded `gamma` value for each column.
    pub gamma_path: Vec<f64>,
    /// Summary report for the run.
    pub report: RunReport,
}

impl PathResult {
    /// Returns the `U` column at index `k` (length `n * p`).
    pub fn u_column(&self, k: usize, primal_len: usize) -> &[f64] {
        &self.u_path[k * primal_len..(k + 1) * primal_len]
    }

    /// Returns the `V` column at index `k` (length `|E| * p`).
    pub fn v_column(&self, k: usize, split_len: usize) -> &[f64] {
        &self.v_path[k * split_len..(k + 1) * split_len]
    }

    /// Returns the `zeta` column at index `k` (length `|E|`).
    pub fn zeta_column(&self, k: usize, num_edges: usize) -> &[bool] {
        &self.zeta_path[k * num_edges..(k + 1) * num_edges]
    }
}
