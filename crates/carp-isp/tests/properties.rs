use std::collections::BTreeSet;

use carp_isp::{compact, RawPath};
use proptest::prelude::*;

fn arbitrary_raw_path(num_edges: usize, columns: usize) -> impl Strategy<Value = RawPath> {
    prop::collection::vec(prop::collection::vec(any::<bool>(), num_edges), columns).prop_map(
        move |zeta_columns| {
            let mut zeta_path = Vec::with_capacity(columns * num_edges);
            let mut u_path = Vec::with_capacity(columns);
            let mut v_path = Vec::with_capacity(columns);
            let mut gamma_path = Vec::with_capacity(columns);
            for (k, column) in zeta_columns.iter().enumerate() {
                zeta_path.extend_from_slice(column);
                u_path.push(k as f64);
                v_path.push(k as f64);
                gamma_path.push(1e-8 * 1.05f64.powi(k as i32));
            }
            RawPath {
                u_path,
                v_path,
                zeta_path,
                gamma_path,
                primal_len: 1,
                split_len: 1,
                num_edges,
                multi_merge_columns: BTreeSet::new(),
                ran_to_full_fusion: false,
            }
        },
    )
}

proptest! {
    /// Property 2 (fusion monotonicity post-ISP): the compacted cumulative
    /// fused count is non-decreasing and increases by exactly 1 per column
    /// when no column is tagged `MultiMerge`.
    #[test]
    fn compacted_path_is_monotone_with_unit_increments(
        raw in (2usize..6).prop_flat_map(|num_edges| {
            (3usize..10).prop_flat_map(move |columns| arbitrary_raw_path(num_edges, columns))
        })
    ) {
        let final_fused = {
            let mut cumulative = vec![false; raw.num_edges];
            for k in 0..raw.columns() {
                for (e, fused) in raw.zeta_column(k).iter().enumerate() {
                    cumulative[e] |= *fused;
                }
            }
            cumulative.iter().filter(|f| **f).count()
        };
        let mut raw = raw;
        raw.ran_to_full_fusion = final_fused == raw.num_edges;

        let compacted = compact(&raw).unwrap();
        let mut prev_count = 0usize;
        for k in 0..compacted.columns() {
            let count = compacted.zeta_column(k).iter().filter(|f| **f).count();
            prop_assert!(count >= prev_count);
            prop_assert_eq!(count - prev_count, 1);
            prev_count = count;
        }
        prop_assert_eq!(prev_count, final_fused);
    }
}
