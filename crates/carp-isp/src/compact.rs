//! The pure `compact` transform: raw kernel path in, dendrogram-ready path out.

use carp_core::errors::{CarpError, ErrorInfo};

use crate::path::{CompactPath, RawPath};

struct Builder {
    u_path: Vec<f64>,
    v_path: Vec<f64>,
    zeta_path: Vec<bool>,
    gamma_path: Vec<f64>,
}

impl Builder {
    fn new() -> Self {
        Self {
            u_path: Vec::new(),
            v_path: Vec::new(),
            zeta_path: Vec::new(),
            gamma_path: Vec::new(),
        }
    }

    fn push(&mut self, zeta: &[bool], u: &[f64], v: &[f64], gamma: f64) {
        self.zeta_path.extend_from_slice(zeta);
        self.u_path.extend_from_slice(u);
        self.v_path.extend_from_slice(v);
        self.gamma_path.push(gamma);
    }
}

/// Compacts a raw kernel path into a monotone, deduplicated, interpolated
/// path suitable for dendrogram construction.
///
/// An edge entering the cumulative fused set is never allowed to leave it
/// again, which erases any transient re-unfusion in the raw iterate
/// sequence (spec §4.2: ζ may briefly re-unfuse; compaction enforces
/// monotonicity downstream). A raw column with no newly fused edges is
/// dropped (deduplication); a raw column where more than one edge newly
/// fuses at once is split into one record per edge, in edge-index order,
/// each reusing that raw column's `(U, V, gamma)` (piecewise-constant
/// interpolation) — unless the column was tagged `MultiMerge`, in which
/// case the whole jump is kept as a single record.
pub fn compact(raw: &RawPath) -> Result<CompactPath, CarpError> {
    let mut cumulative = vec![false; raw.num_edges];
    let mut builder = Builder::new();

    for k in 0..raw.columns() {
        let raw_zeta = raw.zeta_column(k);
        let newly_fused: Vec<usize> = (0..raw.num_edges)
            .filter(|&e| raw_zeta[e] && !cumulative[e])
            .collect();
        if newly_fused.is_empty() {
            continue;
        }

        if newly_fused.len() == 1 || raw.multi_merge_columns.contains(&k) {
            for &e in &newly_fused {
                cumulative[e] = true;
            }
            builder.push(&cumulative, raw.u_column(k), raw.v_column(k), raw.gamma_path[k]);
        } else {
            for &e in &newly_fused {
                cumulative[e] = true;
                builder.push(&cumulative, raw.u_column(k), raw.v_column(k), raw.gamma_path[k]);
            }
        }
    }

    let final_fused = cumulative.iter().filter(|f| **f).count();
    if (final_fused == raw.num_edges) != raw.ran_to_full_fusion {
        return Err(CarpError::InvalidInput(
            ErrorInfo::new(
                "isp-fusion-mismatch",
                "final compacted fusion count disagrees with the kernel's reported completion status",
            )
            .with_context("final_fused", final_fused.to_string())
            .with_context("num_edges", raw.num_edges.to_string())
            .with_context("ran_to_full_fusion", raw.ran_to_full_fusion.to_string()),
        ));
    }

    Ok(CompactPath {
        u_path: builder.u_path,
        v_path: builder.v_path,
        zeta_path: builder.zeta_path,
        gamma_path: builder.gamma_path,
        primal_len: raw.primal_len,
        split_len: raw.split_len,
        num_edges: raw.num_edges,
    })
}
