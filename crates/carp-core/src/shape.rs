//! Index and shape primitives shared by every crate in the workspace.

use serde::{Deserialize, Serialize};

use crate::errors::{CarpError, ErrorInfo};

/// Machine-word index type used for all loop counters against `n`, `p`, and
/// `|E|`. The reference implementation mixed `int` and a wider `Index` type;
/// this workspace resolves that ambiguity in favor of the host's native
/// word size throughout (see DESIGN.md).
pub type Index = usize;

/// Validated problem shape: number of observations, variables per
/// observation, and number of fusion edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Number of observations.
    pub n: Index,
    /// Number of variables per observation.
    pub p: Index,
    /// Number of fusion edges.
    pub num_edges: Index,
}

impl Shape {
    /// Creates a new shape, rejecting degenerate dimensions.
    pub fn new(n: Index, p: Index, num_edges: Index) -> Result<Self, CarpError> {
        if n == 0 || p == 0 {
            return Err(CarpError::InvalidInput(
                ErrorInfo::new("degenerate-shape", "n and p must both be positive")
                    .with_context("n", n.to_string())
                    .with_context("p", p.to_string()),
            ));
        }
        Ok(Self { n, p, num_edges })
    }

    /// Length of the primal vector `U` (`n * p`).
    pub fn primal_len(&self) -> Index {
        self.n * self.p
    }

    /// Length of the split/dual vectors `V`/`Z` (`num_edges * p`).
    pub fn split_len(&self) -> Index {
        self.num_edges * self.p
    }
}
