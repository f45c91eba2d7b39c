#![allow(non_snake_case)]

use clarabel_c::{algebra::*, solver::*};
use std::sync::Arc;
use std::thread;

// independent solvers on separate threads, sharing read-only inputs

#[test]
fn test_independent_solvers_on_threads() {
    let A = Arc::new(CscMatrix::from(&[
        [1., 0.],  //
        [0., 1.],  //
        [-1., 0.], //
        [0., -1.], //
    ]));
    let b = Arc::new(vec![1.; 4]);

    let handles: Vec<_> = (0..4)
        .map(|k| {
            let A = Arc::clone(&A);
            let b = Arc::clone(&b);
            thread::spawn(move || {
                // alternate the sign of the objective so each thread
                // has its own optimal vertex
                let sign = if k % 2 == 0 { 1. } else { -1. };
                let P = CscMatrix::<f64>::zeros((2, 2));
                let q = [sign, -sign];
                let cones = [NonnegativeConeT(4)];
                let settings = DefaultSettingsBuilder::default()
                    .verbose(false)
                    .build()
                    .unwrap();

                let mut solver = DefaultSolver::new(&P, &q, &A, &b, &cones, settings).unwrap();
                let solution = solver.solve().unwrap().clone();
                solver.dispose().unwrap();
                (sign, solution)
            })
        })
        .collect();

    for handle in handles {
        let (sign, solution) = handle.join().unwrap();
        assert_eq!(solution.status, SolverStatus::Solved);
        assert!(f64::abs(solution.x[0] + sign) <= 1e-6);
        assert!(f64::abs(solution.x[1] - sign) <= 1e-6);
        assert!(f64::abs(solution.obj_val + 2.) <= 1e-6);
    }
}
