use carp_graph::EdgeGraph;

#[test]
fn builds_a_simple_triangle() {
    let graph = EdgeGraph::new(3, 1, &[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 1.0)]).unwrap();
    assert_eq!(graph.n(), 3);
    assert_eq!(graph.p(), 1);
    assert_eq!(graph.num_edges(), 3);
    assert_eq!(graph.edges()[0].l, 0);
    assert_eq!(graph.edges()[0].m, 1);
}

#[test]
fn block_ranges_are_contiguous_and_p_wide() {
    let graph = EdgeGraph::new(4, 2, &[(1, 2, 1.0), (3, 4, 2.0)]).unwrap();
    assert_eq!(graph.block(0), 0..2);
    assert_eq!(graph.block(1), 2..4);
    assert_eq!(graph.e1(1), 4..6);
    assert_eq!(graph.e2(1), 6..8);
}

#[test]
fn rejects_zero_dimensions() {
    assert!(EdgeGraph::new(0, 1, &[]).is_err());
    assert!(EdgeGraph::new(1, 0, &[]).is_err());
}

#[test]
fn rejects_out_of_range_endpoints() {
    assert!(EdgeGraph::new(3, 1, &[(1, 4, 1.0)]).is_err());
    assert!(EdgeGraph::new(3, 1, &[(0, 2, 1.0)]).is_err());
}

#[test]
fn rejects_unordered_or_self_edges() {
    assert!(EdgeGraph::new(3, 1, &[(2, 1, 1.0)]).is_err());
    assert!(EdgeGraph::new(3, 1, &[(2, 2, 1.0)]).is_err());
}

#[test]
fn rejects_non_positive_weights() {
    assert!(EdgeGraph::new(3, 1, &[(1, 2, 0.0)]).is_err());
    assert!(EdgeGraph::new(3, 1, &[(1, 2, -1.0)]).is_err());
}

#[test]
fn rejects_duplicate_edges() {
    assert!(EdgeGraph::new(3, 1, &[(1, 2, 1.0), (1, 2, 2.0)]).is_err());
}

#[test]
fn edge_order_is_preserved() {
    let graph = EdgeGraph::new(5, 1, &[(4, 5, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
    let pairs: Vec<(usize, usize)> = graph.edges().iter().map(|e| (e.l, e.m)).collect();
    assert_eq!(pairs, vec![(3, 4), (0, 1), (1, 2)]);
}

#[test]
fn serde_round_trip() {
    let graph = EdgeGraph::new(3, 2, &[(1, 2, 1.0), (2, 3, 0.5)]).unwrap();
    let json = serde_json::to_string(&graph).unwrap();
    let back: EdgeGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(graph, back);
}
