//! A single fusion edge between two observations (or, for the column
//! direction of biclustering, two variables).

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One weighted edge of the fusion graph, stored with 0-based endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Lower-indexed endpoint (0-based).
    pub l: usize,
    /// Higher-indexed endpoint (0-based).
    pub m: usize,
    /// Strictly positive fusion weight.
    pub w: f64,
}

impl Edge {
    /// Returns the `p`-wide index range of this edge's block within the
    /// stacked `V`/`Z` vectors, given the edge's position `i` in the edge list.
    pub fn block(i: usize, p: usize) -> Range<usize> {
        (i * p)..((i + 1) * p)
    }

    /// Returns the `p`-wide index range of this edge's lower endpoint within
    /// the stacked `U` vector.
    pub fn range_l(&self, p: usize) -> Range<usize> {
        (self.l * p)..((self.l + 1) * p)
    }

    /// Returns the `p`-wide index range of this edge's higher endpoint within
    /// the stacked `U` vector.
    pub fn range_m(&self, p: usize) -> Range<usize> {
        (self.m * p)..((self.m + 1) * p)
    }
}
