use carp_graph::EdgeGraph;
use carp_prox::{apply_l1, apply_l2, scan_fusions};

#[test]
fn l2_collapses_a_small_block_to_zero() {
    let graph = EdgeGraph::new(2, 2, &[(1, 2, 1.0)]).unwrap();
    // norm = sqrt(0.3^2+0.4^2) = 0.5, sigma = w*gamma/rho = 1*1.0/1.0 = 1.0 > norm
    let x = vec![0.3, 0.4];
    let mut out = vec![0.0; 2];
    apply_l2(&graph, 1.0, 1.0, &x, &mut out);
    assert_eq!(out, vec![0.0, 0.0]);
}

#[test]
fn l2_shrinks_a_large_block_toward_zero_without_collapsing() {
    let graph = EdgeGraph::new(2, 2, &[(1, 2, 1.0)]).unwrap();
    // norm = 5.0, sigma = 1.0 -> scale = 1 - 1/5 = 0.8
    let x = vec![3.0, 4.0];
    let mut out = vec![0.0; 2];
    apply_l2(&graph, 1.0, 1.0, &x, &mut out);
    assert!((out[0] - 2.4).abs() < 1e-12);
    assert!((out[1] - 3.2).abs() < 1e-12);
}

#[test]
fn l1_thresholds_each_coordinate_independently() {
    let graph = EdgeGraph::new(2, 3, &[(1, 2, 1.0)]).unwrap();
    // sigma = 1.0; first coord fuses, second shrinks, third stays negative-shrunk
    let x = vec![0.5, 2.0, -3.0];
    let mut out = vec![0.0; 3];
    apply_l1(&graph, 1.0, 1.0, &x, &mut out);
    assert_eq!(out[0], 0.0);
    assert!((out[1] - 1.0).abs() < 1e-12);
    assert!((out[2] - (-2.0)).abs() < 1e-12);
}

#[test]
fn fusion_scan_flags_exactly_zero_blocks() {
    let graph = EdgeGraph::new(3, 2, &[(1, 2, 1.0), (2, 3, 1.0)]).unwrap();
    let v = vec![0.0, 0.0, 1.0, 0.0];
    let mut zeta = vec![false; graph.num_edges()];
    scan_fusions(&graph, &v, &mut zeta);
    assert_eq!(zeta, vec![true, false]);
}

#[test]
fn l1_zero_blocks_are_detected_as_fused() {
    let graph = EdgeGraph::new(2, 2, &[(1, 2, 1.0)]).unwrap();
    let x = vec![0.2, 0.1];
    let mut out = vec![0.0; 2];
    apply_l1(&graph, 1.0, 1.0, &x, &mut out);
    let mut zeta = vec![false];
    scan_fusions(&graph, &out, &mut zeta);
    assert!(zeta[0]);
}
