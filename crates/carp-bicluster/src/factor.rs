//! One-shot sparse factorization of the combined biclustering operator.
//!
//! `PathKernel`'s single `A = I + rho * D^T D` enjoys a Kronecker reduction
//! to one `n x n` factorization because only one axis is penalized at a
//! time. CBASS penalizes both axes at once: `A = I + rho * (L_col (x) I_p)
//! + rho * (I_n (x) L_row)`, a Kronecker *sum*, which does not separate the
//! same way (it is a discrete Sylvester operator, not a Kronecker product).
//! Rather than diagonalizing both Laplacians to solve the Sylvester
//! equation spectrally, `BiFactor` factors the full `(n*p) x (n*p)` sparse
//! SPD system once per `rho` and reuses it for every outer step, the same
//! amortization strategy `CarpFactor` uses, just without the dimension
//! reduction.

use carp_core::errors::{CarpError, ErrorInfo};
use carp_graph::EdgeGraph;
use nalgebra::DMatrix;
use nalgebra_sparse::factorization::CscCholesky;
use nalgebra_sparse::{CooMatrix, CscMatrix};

/// Reusable factorization of the combined row/column biclustering operator.
pub struct BiFactor {
    dim: usize,
    cholesky: CscCholesky<f64>,
}

impl BiFactor {
    /// Builds and factors the combined operator for the column graph
    /// (`n` observations, `p`-wide blocks) and row graph (`p` variables,
    /// `n`-wide blocks, sharing the same `EdgeGraph` representation with
    /// its axes swapped).
    pub fn build(graph_col: &EdgeGraph, graph_row: &EdgeGraph, rho: f64) -> Result<Self, CarpError> {
        let n = graph_col.n();
        let p = graph_col.p();
        if graph_row.n() != p || graph_row.p() != n {
            return Err(CarpError::InvalidInput(
                ErrorInfo::new("mismatched-bicluster-shape", "row and column graphs disagree on n/p")
                    .with_context("col.n", n.to_string())
                    .with_context("col.p", p.to_string())
                    .with_context("row.n", graph_row.n().to_string())
                    .with_context("row.p", graph_row.p().to_string()),
            ));
        }
        let dim = n * p;
        let mut coo = CooMatrix::<f64>::new(dim, dim);
        for idx in 0..dim {
            coo.push(idx, idx, 1.0);
        }
        for edge in graph_col.edges() {
            for coord in 0..p {
                let i = edge.l * p + coord;
                let j = edge.m * p + coord;
                coo.push(i, i, rho);
                coo.push(j, j, rho);
                coo.push(i, j, -rho);
                coo.push(j, i, -rho);
            }
        }
        for edge in graph_row.edges() {
            for obs in 0..n {
                let i = obs * p + edge.l;
                let j = obs * p + edge.m;
                coo.push(i, i, rho);
                coo.push(j, j, rho);
                coo.push(i, j, -rho);
                coo.push(j, i, -rho);
            }
        }
        let csc = CscMatrix::from(&coo);
        let cholesky = CscCholesky::factor(&csc).map_err(|err| {
            CarpError::LinAlg(
                ErrorInfo::new("factorization-failed", "combined biclustering operator is not SPD")
                    .with_context("rho", rho.to_string())
                    .with_context("cause", format!("{err:?}")),
            )
        })?;
        Ok(Self { dim, cholesky })
    }

    /// Solves the combined system for the observation-major right-hand
    /// side `b` (length `n * p`).
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>, CarpError> {
        if b.len() != self.dim {
            return Err(CarpError::InvalidInput(
                ErrorInfo::new("bad-rhs-length", "right-hand side length does not match n * p")
                    .with_context("expected", self.dim.to_string())
                    .with_context("actual", b.len().to_string()),
            ));
        }
        let rhs = DMatrix::<f64>::from_column_slice(self.dim, 1, b);
        let solution = self.cholesky.solve(&rhs);
        Ok(solution.column(0).iter().copied().collect())
    }
}
