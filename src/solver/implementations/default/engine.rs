#![allow(non_snake_case)]

use super::{DefaultProblemData, DefaultSettings, DefaultSolution};
use crate::algebra::*;
use crate::solver::core::{cones::SupportedConeT, SolverError, SolverStatus};
use clarabel::solver::IPSolver;

/// Interface to the numerical engine that runs the interior point method.
///
/// A [`DefaultSolver`](crate::solver::DefaultSolver) creates exactly one
/// engine instance, from its own validated copy of the problem data, and
/// calls [`solve`](ConicEngine::solve) at most once.  The engine is dropped
/// before the problem data it was created from.
pub trait ConicEngine<T: FloatT>: Sized {
    /// Create an engine instance for a validated problem.
    fn setup(
        data: &DefaultProblemData<T>,
        settings: &DefaultSettings<T>,
    ) -> Result<Self, SolverError>;

    /// Run the interior point method to termination.  Numerical failures
    /// are reported through the status of the returned solution.
    fn solve(&mut self) -> DefaultSolution<T>;
}

/// [`ConicEngine`] backed by the `clarabel` interior point solver.
pub struct ClarabelEngine<T: FloatT> {
    solver: clarabel::solver::DefaultSolver<T>,
}

impl<T> ConicEngine<T> for ClarabelEngine<T>
where
    T: FloatT,
{
    fn setup(
        data: &DefaultProblemData<T>,
        settings: &DefaultSettings<T>,
    ) -> Result<Self, SolverError> {
        let cones = data
            .cones
            .iter()
            .map(engine_cone)
            .collect::<Result<Vec<_>, _>>()?;

        // the engine reads the upper triangle of P only
        let P = engine_matrix(&data.P.to_triu());
        let A = engine_matrix(&data.A);

        let solver = clarabel::solver::DefaultSolver::new(
            &P,
            &data.q,
            &A,
            &data.b,
            &cones,
            settings.clone(),
        )
        .into_engine()?;

        Ok(Self { solver })
    }

    fn solve(&mut self) -> DefaultSolution<T> {
        self.solver.solve();

        let sol = &self.solver.solution;
        DefaultSolution {
            x: sol.x.clone(),
            z: sol.z.clone(),
            s: sol.s.clone(),
            status: engine_status(sol.status),
            obj_val: sol.obj_val,
            obj_val_dual: sol.obj_val_dual,
            solve_time: sol.solve_time,
            iterations: sol.iterations,
            r_prim: sol.r_prim,
            r_dual: sol.r_dual,
        }
    }
}

// engine releases differ on whether construction is fallible.
// Both forms are accepted.
trait IntoEngine<T: FloatT> {
    fn into_engine(self) -> Result<clarabel::solver::DefaultSolver<T>, SolverError>;
}

impl<T: FloatT> IntoEngine<T> for clarabel::solver::DefaultSolver<T> {
    fn into_engine(self) -> Result<clarabel::solver::DefaultSolver<T>, SolverError> {
        Ok(self)
    }
}

impl<T, E> IntoEngine<T> for Result<clarabel::solver::DefaultSolver<T>, E>
where
    T: FloatT,
    E: std::fmt::Debug,
{
    fn into_engine(self) -> Result<clarabel::solver::DefaultSolver<T>, SolverError> {
        self.map_err(|e| SolverError::Engine(format!("{:?}", e)))
    }
}

// ---------------------------------------------------------
// conversions into the engine's own types
// ---------------------------------------------------------

fn engine_matrix<T: FloatT>(M: &CscMatrix<T>) -> clarabel::algebra::CscMatrix<T> {
    let M = M.to_sorted();
    clarabel::algebra::CscMatrix::new(M.m, M.n, M.colptr, M.rowval, M.nzval)
}

fn engine_cone<T: FloatT>(
    cone: &SupportedConeT<T>,
) -> Result<clarabel::solver::SupportedConeT<T>, SolverError> {
    use clarabel::solver::SupportedConeT as E;
    let out = match *cone {
        SupportedConeT::ZeroConeT(dim) => E::ZeroConeT(dim),
        SupportedConeT::NonnegativeConeT(dim) => E::NonnegativeConeT(dim),
        SupportedConeT::SecondOrderConeT(dim) => E::SecondOrderConeT(dim),
        SupportedConeT::ExponentialConeT() => E::ExponentialConeT(),
        SupportedConeT::PowerConeT(alpha) => E::PowerConeT(alpha),
        #[cfg(feature = "sdp")]
        SupportedConeT::PSDTriangleConeT(n) => E::PSDTriangleConeT(n),
        #[cfg(not(feature = "sdp"))]
        SupportedConeT::PSDTriangleConeT(_) => {
            return Err(SolverError::UnsupportedCone(cone.tag()));
        }
    };
    Ok(out)
}

fn engine_status(status: clarabel::solver::SolverStatus) -> SolverStatus {
    use clarabel::solver::SolverStatus as E;
    match status {
        E::Unsolved => SolverStatus::Unsolved,
        E::Solved => SolverStatus::Solved,
        E::PrimalInfeasible => SolverStatus::PrimalInfeasible,
        E::DualInfeasible => SolverStatus::DualInfeasible,
        E::AlmostSolved => SolverStatus::AlmostSolved,
        E::AlmostPrimalInfeasible => SolverStatus::AlmostPrimalInfeasible,
        E::AlmostDualInfeasible => SolverStatus::AlmostDualInfeasible,
        E::MaxIterations => SolverStatus::MaxIterations,
        E::MaxTime => SolverStatus::MaxTime,
        E::NumericalError => SolverStatus::NumericalError,
        E::InsufficientProgress => SolverStatus::InsufficientProgress,
        // later engine releases may add new codes
        #[allow(unreachable_patterns)]
        _ => SolverStatus::NumericalError,
    }
}
