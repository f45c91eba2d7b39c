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
fn basic_lp_data() -> (
    CscMatrix<f64>,
    Vec<f64>,
    CscMatrix<f64>,
    Vec<f64>,
    Vec<SupportedConeT<f64>>,
) {
    let P = CscMatrix::<f64>::zeros((3, 3));

    let I1 = CscMatrix::<f64>::identity(3);
    let mut I2 = CscMatrix::<f64>::identity(3);
    I2.negate();
    let mut A = CscMatrix::vcat(&I1, &I2).unwrap();
    A.scale(2.);

    let c = vec![3., -2., 1.];
    let b = vec![1.; 6];

    let cones = vec![NonnegativeConeT(3), NonnegativeConeT(3)];

    (P, c, A, b, cones)
}

fn quiet() -> DefaultSettings<f64> {
    DefaultSettings {
        verbose: false,
        ..DefaultSettings::default()
    }
}

#[test]
fn test_lp_box() {
    // minimize x0 - x1 subject to -1 <= x <= 1
    let P = CscMatrix::<f64>::zeros((2, 2));
    let q = [1., -1.];
    let A = CscMatrix::from(&[
        [1., 0.],  //
        [0., 1.],  //
        [-1., 0.], //
        [0., -1.], //
    ]);
    let b = [1.; 4];
    let cones = [NonnegativeConeT(4)];

    let mut solver = DefaultSolver::new(&P, &q, &A, &b, &cones, quiet()).unwrap();
    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Solved);
    assert!(dist(&solution.x, &[-1., 1.]) <= 1e-6);
    assert!(f64::abs(solution.obj_val - (-2.)) <= 1e-6);
    assert_eq!(solution.z.len(), 4);
    assert_eq!(solution.s.len(), 4);
    assert_eq!(solver.state(), SolverState::Solved);
}

#[test]
fn test_lp_feasible() {
    let (P, c, A, b, cones) = basic_lp_data();

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();

    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::Solved);

    let refsol = vec![-0.5, 0.5, -0.5];
    assert!(dist(&solution.x, &refsol) <= 1e-8);

    let refobj = -3.;
    assert!(f64::abs(solution.obj_val - refobj) <= 1e-8);
    assert!(f64::abs(solution.obj_val_dual - refobj) <= 1e-8);
}

#[test]
fn test_lp_primal_infeasible() {
    let (P, c, A, mut b, cones) = basic_lp_data();

    b[0] = -1.;
    b[3] = -1.;

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();

    // infeasibility is an outcome, not an error
    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::PrimalInfeasible);
    assert!(solution.obj_val.is_nan());
    assert!(solution.obj_val_dual.is_nan());
}

#[test]
fn test_lp_dual_infeasible() {
    let (P, _c, mut A, b, cones) = basic_lp_data();

    A.nzval[1] = 1.; //swap lower bound on first variable to redundant upper bound
    let c = vec![1., 0., 0.];

    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap();

    let solution = solver.solve().unwrap();

    assert_eq!(solution.status, SolverStatus::DualInfeasible);
    assert!(solution.obj_val.is_nan());
    assert!(solution.obj_val_dual.is_nan());
}

#[test]
fn test_lp_max_iterations() {
    let (P, c, A, b, cones) = basic_lp_data();

    let settings = DefaultSettings {
        max_iter: 1,
        ..quiet()
    };
    let mut solver = DefaultSolver::new(&P, &c, &A, &b, &cones, settings).unwrap();

    let solution = solver.solve().unwrap();
    assert_eq!(solution.status, SolverStatus::MaxIterations);
}

#[test]
fn test_lp_inputs_released_after_construction() {
    let mut solver = {
        let (P, c, A, b, cones) = basic_lp_data();
        DefaultSolver::new(&P, &c, &A, &b, &cones, quiet()).unwrap()
        // caller data dropped here
    };
    assert_eq!(solver.solve().unwrap().status, SolverStatus::Solved);
}
