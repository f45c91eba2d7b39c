#![allow(non_snake_case)]

use clarabel_c::{algebra::*, solver::*};

fn dist(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

fn quiet() -> DefaultSettings<f64> {
    DefaultSettingsBuilder::default().verbose(false).build().unwrap()
}

#[allow(clippy::type_complexity)]
fn basic_expcone_data() -> (
    CscMatrix<f64>, //P
    Vec<f64>,       //c
    CscMatrix<f64>, //A
    Vec<f64>,       //b
    Vec<SupportedConeT<f64>>,
) {
    // produces data for the following exponential cone problem
    // max  x
    // s.t. y * exp(x / y) <= z
    //      y == 1, z == exp(5)

    let P = CscMatrix::<f64>::zeros((3, 3));
    let c = vec![-1., 0., 0.];

    let mut A1 = CscMatrix::<f64>::identity(3);
    A1.negate();
    let b1 = vec![0.; 3];

    let A2 = CscMatrix::from_triplets(2, 3, &[(0, 1, 1.), (1, 2, 1.)]).unwrap();
    let b2 = vec![1., f64::exp(5.)];

    let A = CscMatrix::vcat(&A1, &A2).unwrap();
    let b = [b1, b2].concat();

    let cones = vec![ExponentialConeT(), ZeroConeT(2)];

    (P, c, A, b, cones)
}

#[test]
fn test_expcone_feasible() {
    // max  x
    // s.t. y * exp(x / y) <= z
    //      y == 1, z == exp(5)

    let (P, c, A, b, cones) = basic_expcone_data();

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();
    assert_eq!(solver.cone_ranges(), &[0..3, 3..5]);

    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Solved);

    let refsol = vec![5.0, 1.0, f64::exp(5.0)];
    assert!(dist(&solution.x, &refsol) <= 1e-6);

    let refobj = -5.0;
    assert!(f64::abs(solution.obj_val - refobj) <= 1e-6);
}

#[test]
fn test_expcone_primal_infeasible() {
    // max  x
    // s.t. y * exp(x / y) <= z
    //      y == 1, z == -1

    let (P, c, A, mut b, cones) = basic_expcone_data();

    b[4] = -1.;

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();

    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::PrimalInfeasible);
}

#[test]
fn test_expcone_dual_infeasible() {
    // max  x
    // s.t. y * exp(x / y) <= z

    let P = CscMatrix::<f64>::zeros((3, 3));
    let c = vec![-1., 0., 0.];

    let mut A = CscMatrix::<f64>::identity(3);
    A.negate();
    let b = vec![0.; 3];
    let cones = vec![ExponentialConeT()];

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();

    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::DualInfeasible);
}
