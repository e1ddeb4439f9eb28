use carp_graph::EdgeGraph;
use carp_linalg::{apply_d, apply_dt, CarpFactor};

#[test]
fn d_computes_pairwise_differences() {
    let graph = EdgeGraph::new(3, 1, &[(1, 2, 1.0), (2, 3, 1.0)]).unwrap();
    let u = vec![1.0, 4.0, 9.0];
    let mut v = vec![0.0; graph.num_edges()];
    apply_d(&graph, &u, &mut v);
    assert_eq!(v, vec![1.0 - 4.0, 4.0 - 9.0]);
}

#[test]
fn dt_is_the_adjoint_of_d() {
    // <Dv, u> == <v, Du> for arbitrary u, v (discrete adjoint check).
    let graph = EdgeGraph::new(4, 2, &[(1, 2, 1.0), (2, 3, 1.0), (1, 4, 1.0)]).unwrap();
    let u = vec![1.0, 2.0, -1.0, 3.0, 0.5, -0.5, 2.0, 1.0];
    let v = vec![0.3, -0.1, 1.2, 0.4, -0.7, 0.9];

    let mut du = vec![0.0; graph.num_edges() * graph.p()];
    apply_d(&graph, &u, &mut du);
    let lhs: f64 = du.iter().zip(v.iter()).map(|(a, b)| a * b).sum();

    let mut dtv = vec![0.0; graph.n() * graph.p()];
    apply_dt(&graph, &v, &mut dtv);
    let rhs: f64 = dtv.iter().zip(u.iter()).map(|(a, b)| a * b).sum();

    assert!((lhs - rhs).abs() < 1e-10, "lhs={lhs} rhs={rhs}");
}

#[test]
fn factor_solves_identity_when_rho_times_laplacian_vanishes() {
    let graph = EdgeGraph::new(3, 1, &[(1, 2, 1.0)]).unwrap();
    let factor = CarpFactor::build(&graph, 0.0).unwrap();
    let b = vec![1.0, 2.0, 3.0];
    let x = factor.solve(&b).unwrap();
    for (a, e) in x.iter().zip(b.iter()) {
        assert!((a - e).abs() < 1e-9);
    }
}

#[test]
fn factor_recovers_known_solution() {
    let graph = EdgeGraph::new(2, 1, &[(1, 2, 1.0)]).unwrap();
    let rho = 2.0;
    let factor = CarpFactor::build(&graph, rho).unwrap();
    // A = [[1+rho, -rho], [-rho, 1+rho]]; pick x = (1, -1) and compute b = A x.
    let x_true = [1.0, -1.0];
    let a = [[1.0 + rho, -rho], [-rho, 1.0 + rho]];
    let b = vec![
        a[0][0] * x_true[0] + a[0][1] * x_true[1],
        a[1][0] * x_true[0] + a[1][1] * x_true[1],
    ];
    let x = factor.solve(&b).unwrap();
    assert!((x[0] - x_true[0]).abs() < 1e-9);
    assert!((x[1] - x_true[1]).abs() < 1e-9);
}

#[test]
fn solve_rejects_mismatched_rhs_length() {
    let graph = EdgeGraph::new(3, 2, &[(1, 2, 1.0)]).unwrap();
    let factor = CarpFactor::build(&graph, 1.0).unwrap();
    assert!(factor.solve(&[1.0, 2.0]).is_err());
}
