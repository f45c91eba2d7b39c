#![allow(non_snake_case)]

use clarabel_c::{algebra::*, solver::*};

fn dist(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

#[allow(clippy::type_complexity)]
fn basic_qp_data() -> (
    CscMatrix<f64>,
    Vec<f64>,
    CscMatrix<f64>,
    Vec<f64>,
    Vec<SupportedConeT<f64>>,
) {
    // P = [4. 1;1 2]
    let P = CscMatrix::new(
        2,                    // m
        2,                    // n
        vec![0, 2, 4],        // colptr
        vec![0, 1, 0, 1],     // rowval
        vec![4., 1., 1., 2.], // nzval
    )
    .unwrap();

    // A = [1. 1;1 0; 0 1]; A = [-A;A]
    let A = CscMatrix::new(
        3,                    // m
        2,                    // n
        vec![0, 2, 4],        //colptr
        vec![0, 1, 0, 2],     //rowval
        vec![1., 1., 1., 1.], //nzval
    )
    .unwrap();

    let (mut A1, A2) = (A.clone(), A);
    A1.negate();
    let A = CscMatrix::vcat(&A1, &A2).unwrap();

    let c = vec![1., 1.];
    let b = vec![-1., 0., 0., 1., 0.7, 0.7];

    let cones = vec![NonnegativeConeT(3), NonnegativeConeT(3)];

    (P, c, A, b, cones)
}

fn quiet() -> DefaultSettings<f64> {
    DefaultSettingsBuilder::default().verbose(false).build().unwrap()
}

#[test]
fn test_qp_univariate() {
    let P = CscMatrix::identity(1);
    let c = [0.];
    let A = CscMatrix::identity(1);
    let b = [1.];
    let cones = [NonnegativeConeT(1)];

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();

    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Solved);

    assert!(f64::abs(solution.x[0]) <= 1e-6);
    assert!(f64::abs(solution.obj_val) <= 1e-6);
    assert!(f64::abs(solution.obj_val_dual) <= 1e-6);
}

#[test]
fn test_qp_feasible() {
    let (P, c, A, b, cones) = basic_qp_data();

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();

    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Solved);

    let refsol = vec![0.3, 0.7];
    assert!(dist(&solution.x, &refsol) <= 1e-6);

    let refobj = 1.8800000298331538;
    assert!(f64::abs(solution.obj_val - refobj) <= 1e-6);
    assert!(f64::abs(solution.obj_val_dual - refobj) <= 1e-6);
}

#[test]
fn test_qp_upper_triangle_only() {
    // only the upper triangle of P is read, so passing
    // it directly gives the same solution
    let (P, c, A, b, cones) = basic_qp_data();
    let P = P.to_triu();
    assert!(P.is_triu());

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();
    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Solved);
    assert!(dist(&solution.x, &[0.3, 0.7]) <= 1e-6);
}

#[test]
fn test_qp_primal_infeasible() {
    let (P, c, A, mut b, cones) = basic_qp_data();

    b[0] = -1.;
    b[3] = -1.;

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();

    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::PrimalInfeasible);
    assert!(solution.obj_val.is_nan());
    assert!(solution.obj_val_dual.is_nan());
}

#[test]
fn test_qp_dual_infeasible() {
    // P = [1. 1;1 1]
    let P = CscMatrix::from(&[
        [1., 1.], //
        [1., 1.], //
    ]);

    // A = [1. 1;1 0]
    let A = CscMatrix::from(&[
        [1., 1.], //
        [1., 0.], //
    ]);

    let c = vec![1., -1.];
    let b = vec![1., 1.];
    let cones = vec![NonnegativeConeT(2)];

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();

    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::DualInfeasible);
    assert!(solution.obj_val.is_nan());
    assert!(solution.obj_val_dual.is_nan());
}
