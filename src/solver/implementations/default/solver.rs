#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::solver::core::{cones::SupportedConeT, SolverError, SolverState};
use std::ops::Range;

/// Solver for problems in standard conic program form.
///
/// A `DefaultSolver` owns a copy of its problem data and one instance of
/// the numerical engine `E`.  Its lifecycle is strictly
/// `Constructed -> Solved -> Disposed`: [`solve`](DefaultSolver::solve) may
/// be called once, and [`dispose`](DefaultSolver::dispose) (or `drop`)
/// releases the engine and then the problem data.
pub struct DefaultSolver<T = f64, E = ClarabelEngine<T>>
where
    T: FloatT,
    E: ConicEngine<T>,
{
    // declared first so that it is dropped before the data
    engine: Option<E>,
    data: Option<DefaultProblemData<T>>,
    settings: DefaultSettings<T>,
    state: SolverState,
    solution: Option<DefaultSolution<T>>,
}

impl<T> DefaultSolver<T>
where
    T: FloatT,
{
    /// Create a solver for the problem
    ///
    /// ```text
    /// minimize    ½xᵀPx + qᵀx
    /// subject to  Ax + s = b,  s ∈ K
    /// ```
    ///
    /// All inputs are copied, and may be dropped as soon as this
    /// function returns.  Only the upper triangle of `P` is used.
    pub fn new(
        P: &CscMatrix<T>,
        q: &[T],
        A: &CscMatrix<T>,
        b: &[T],
        cones: &[SupportedConeT<T>],
        settings: DefaultSettings<T>,
    ) -> Result<Self, SolverError> {
        Self::with_engine(P, q, A, b, cones, settings)
    }
}

impl<T, E> DefaultSolver<T, E>
where
    T: FloatT,
    E: ConicEngine<T>,
{
    /// As [`new`](DefaultSolver::new), but with an explicitly chosen engine.
    pub fn with_engine(
        P: &CscMatrix<T>,
        q: &[T],
        A: &CscMatrix<T>,
        b: &[T],
        cones: &[SupportedConeT<T>],
        settings: DefaultSettings<T>,
    ) -> Result<Self, SolverError> {
        validate_settings(&settings)?;

        let data = DefaultProblemData::new(P, q, A, b, cones)?;
        let engine = E::setup(&data, &settings)?;

        log::debug!(
            "solver constructed: n = {}, m = {}, {} cones, nnz(P) = {}, nnz(A) = {}",
            data.n,
            data.m,
            data.cones.len(),
            data.P.nnz(),
            data.A.nnz()
        );

        Ok(Self {
            engine: Some(engine),
            data: Some(data),
            settings,
            state: SolverState::Constructed,
            solution: None,
        })
    }

    /// Run the solver to termination.
    ///
    /// Only allowed once, on a freshly constructed solver.  The returned
    /// status reports the numerical outcome, including infeasibility.
    pub fn solve(&mut self) -> Result<&DefaultSolution<T>, SolverError> {
        if self.state != SolverState::Constructed {
            return Err(self.invalid_state("solve"));
        }
        let solution = match self.engine.as_mut() {
            Some(engine) => engine.solve(),
            None => return Err(self.invalid_state("solve")),
        };

        log::info!(
            "solve finished: status = {}, iterations = {}, objective = {}",
            solution.status,
            solution.iterations,
            solution.obj_val
        );

        self.state = SolverState::Solved;
        Ok(self.solution.insert(solution))
    }

    /// Release the engine instance, then the problem data and solution.
    ///
    /// Fails on a solver that has already been disposed.
    pub fn dispose(&mut self) -> Result<(), SolverError> {
        if self.state == SolverState::Disposed {
            return Err(self.invalid_state("dispose"));
        }
        self.engine = None;
        self.data = None;
        self.solution = None;
        self.state = SolverState::Disposed;
        log::debug!("solver disposed");
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> SolverState {
        self.state
    }

    /// Solution of the last call to [`solve`](DefaultSolver::solve),
    /// if any and not yet disposed
    pub fn solution(&self) -> Option<&DefaultSolution<T>> {
        self.solution.as_ref()
    }

    /// Settings the solver was constructed with
    pub fn settings(&self) -> &DefaultSettings<T> {
        &self.settings
    }

    /// Owned problem data, `None` once disposed
    pub fn data(&self) -> Option<&DefaultProblemData<T>> {
        self.data.as_ref()
    }

    /// Rows of `A` assigned to each cone.  Empty once disposed.
    pub fn cone_ranges(&self) -> &[Range<usize>] {
        match &self.data {
            Some(data) => &data.cone_ranges,
            None => &[],
        }
    }

    /// Number of variables (columns of `A`), zero once disposed
    pub fn nvars(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.n)
    }

    /// Number of constraints (rows of `A`), zero once disposed
    pub fn nconstraints(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.m)
    }

    pub(crate) fn invalid_state(&self, operation: &'static str) -> SolverError {
        log::warn!("rejected {} on a solver in state {}", operation, self.state);
        SolverError::InvalidState {
            state: self.state,
            operation,
        }
    }
}
