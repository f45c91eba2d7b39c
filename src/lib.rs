//!  __clarabel_c__ is a Rust, C and C++ front end to the Clarabel interior point solver for convex optimization problems.  It solves problems of the form:
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & \frac{1}{2}x^T P x + q^T x\\\\\[2ex\]
//!  \text{subject to} & Ax + s = b \\\\\[1ex\]
//!         & s \in \mathcal{K}
//!  \end{array}
//! $$
//!
//!
//! with decision variables
//! $x \in \mathbb{R}^n$,
//! $s \in \mathbb{R}^m$
//! and data matrices
//! $P=P^\top \succeq 0$,
//! $q \in \mathbb{R}^n$,
//! $A \in \mathbb{R}^{m \times n}$, and
//! $b \in \mathbb{R}^m$.
//! The convex set $\mathcal{K}$ is a composition of convex cones.
//!
//! The crate is the layer between callers and the numerical engine:
//!
//! * [`algebra`]: sparse matrices in compressed sparse column format,
//! built from triplets, dense data or explicit CSC arrays.
//!
//! * [`solver`]: cone specifications, settings, and the
//! [`DefaultSolver`](crate::solver::DefaultSolver), which owns a copy of the
//! problem and moves through the states `Constructed`, `Solved` and `Disposed`.
//!
//! * [`ffi`]: an `extern "C"` interface over opaque handles, declared for
//! C and C++ callers in `include/clarabel_c.h`.
//!
//! ## Example
//!
//! ```no_run
//! use clarabel_c::algebra::*;
//! use clarabel_c::solver::*;
//!
//! // minimize x0 - x1 subject to -1 <= x <= 1
//! let P = CscMatrix::<f64>::zeros((2, 2));
//! let q = [1., -1.];
//! let A = CscMatrix::from(&[
//!     [ 1.,  0.],
//!     [ 0.,  1.],
//!     [-1.,  0.],
//!     [ 0., -1.],
//! ]);
//! let b = [1.; 4];
//! let cones = [NonnegativeConeT(4)];
//!
//! let settings = DefaultSettingsBuilder::default().verbose(false).build().unwrap();
//! let mut solver = DefaultSolver::new(&P, &q, &A, &b, &cones, settings).unwrap();
//! let solution = solver.solve().unwrap();
//! assert_eq!(solution.status, SolverStatus::Solved);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod ffi;
pub mod solver;

/// Version of this crate
pub fn version() -> &'static str {
    VERSION
}
