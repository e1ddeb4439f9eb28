use carp_graph::EdgeGraph;
use proptest::prelude::*;

fn arb_edges(n: usize) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((1..=n, 1..=n, 0.1f64..5.0), 0..8).prop_map(move |raw| {
        let mut seen = std::collections::BTreeSet::new();
        raw.into_iter()
            .filter_map(|(a, b, w)| {
                if a == b {
                    return None;
                }
                let (l, m) = if a < b { (a, b) } else { (b, a) };
                if seen.insert((l, m)) {
                    Some((l, m, w))
                } else {
                    None
                }
            })
            .collect()
    })
}

fn check(n: usize, edges: Vec<(usize, usize, f64)>) -> Result<(), TestCaseError> {
    let graph = EdgeGraph::new(n, 1, &edges).unwrap();
    prop_assert_eq!(graph.num_edges(), edges.len());
    for (i, &(l, m, w)) in edges.iter().enumerate() {
        prop_assert_eq!(graph.edges()[i].l, l - 1);
        prop_assert_eq!(graph.edges()[i].m, m - 1);
        prop_assert_eq!(graph.edges()[i].w, w);
    }
    Ok(())
}

proptest! {
    #[test]
    fn constructed_graph_preserves_edge_count_and_order(
        (n, edges) in (2usize..8).prop_flat_map(|n| (Just(n), arb_edges(n)))
    ) {
        check(n, edges)?;
    }
}
