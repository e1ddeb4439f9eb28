//! `EdgeGraph`: the immutable fusion graph over which the ADMM kernels run.

use std::collections::BTreeSet;
use std::ops::Range;

use carp_core::errors::{CarpError, ErrorInfo};
use carp_core::shape::Shape;
use serde::{Deserialize, Serialize};

use crate::edge::Edge;

/// Deterministic, immutable fusion graph: an ordered edge list plus the
/// index tables needed to read/write per-edge blocks of `U`, `V`, and `Z`.
///
/// Edges are stored in the order they were supplied; that order is the sole
/// source of determinism for fusion tie-breaking (spec §9) and is preserved
/// everywhere the graph is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeGraph {
    n: usize,
    p: usize,
    edges: Vec<Edge>,
}

impl EdgeGraph {
    /// Builds an `EdgeGraph` from 1-based `(l, m, w)` triples.
    ///
    /// Rejects out-of-range or reversed endpoints, non-positive weights, and
    /// duplicate unordered pairs.
    pub fn new(n: usize, p: usize, edges: &[(usize, usize, f64)]) -> Result<Self, CarpError> {
        if n == 0 || p == 0 {
            return Err(CarpError::InvalidInput(
                ErrorInfo::new("degenerate-shape", "n and p must both be positive")
                    .with_context("n", n.to_string())
                    .with_context("p", p.to_string()),
            ));
        }

        let mut seen = BTreeSet::new();
        let mut stored = Vec::with_capacity(edges.len());
        for (idx, &(l, m, w)) in edges.iter().enumerate() {
            if l == 0 || m == 0 || l > n || m > n || l >= m {
                return Err(CarpError::InvalidInput(
                    ErrorInfo::new("bad-edge-endpoints", "edge endpoints out of range or unordered")
                        .with_context("index", idx.to_string())
                        .with_context("l", l.to_string())
                        .with_context("m", m.to_string())
                        .with_context("n", n.to_string()),
                ));
            }
            if !(w > 0.0) {
                return Err(CarpError::InvalidInput(
                    ErrorInfo::new("non-positive-weight", "edge weight must be strictly positive")
                        .with_context("index", idx.to_string())
                        .with_context("w", w.to_string()),
                ));
            }
            if !seen.insert((l, m)) {
                return Err(CarpError::InvalidInput(
                    ErrorInfo::new("duplicate-edge", "edge set contains a duplicate pair")
                        .with_context("l", l.to_string())
                        .with_context("m", m.to_string()),
                ));
            }
            stored.push(Edge {
                l: l - 1,
                m: m - 1,
                w,
            });
        }

        Ok(Self { n, p, edges: stored })
    }

    /// Number of observations (or variables, for a column-direction graph).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of coordinates per observation.
    pub fn p(&self) -> usize {
        self.p
    }

    /// Number of fusion edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the validated problem shape.
    pub fn shape(&self) -> Shape {
        Shape {
            n: self.n,
            p: self.p,
            num_edges: self.edges.len(),
        }
    }

    /// Returns the ordered edge list.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the weight vector in edge order.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.iter().map(|edge| edge.w)
    }

    /// Returns the `p`-wide index range of edge `i`'s block within the
    /// stacked `V`/`Z` vectors.
    pub fn block(&self, i: usize) -> Range<usize> {
        Edge::block(i, self.p)
    }

    /// Returns the `p`-wide index range of edge `i`'s lower endpoint (`E1`)
    /// within the stacked `U` vector.
    pub fn e1(&self, i: usize) -> Range<usize> {
        self.edges[i].range_l(self.p)
    }

    /// Returns the `p`-wide index range of edge `i`'s higher endpoint (`E2`)
    /// within the stacked `U` vector.
    pub fn e2(&self, i: usize) -> Range<usize> {
        self.edges[i].range_m(self.p)
    }
}
