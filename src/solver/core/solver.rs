use super::cones::{ConeError, SupportedConeTag};
use crate::algebra::SparseFormatError;
use super::settings::SettingsError;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------
// Solver status type
// ---------------------------------

/// Status of solver at termination

#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run).
    #[default]
    Unsolved,
    /// Solver terminated with a solution.
    Solved,
    /// Problem is primal infeasible.  Solution returned is a certificate of primal infeasibility.
    PrimalInfeasible,
    /// Problem is dual infeasible.  Solution returned is a certificate of dual infeasibility.
    DualInfeasible,
    /// Solver terminated with a solution (reduced accuracy)
    AlmostSolved,
    /// Problem is primal infeasible.  Solution returned is a certificate of primal infeasibility (reduced accuracy).
    AlmostPrimalInfeasible,
    /// Problem is dual infeasible.  Solution returned is a certificate of dual infeasibility (reduced accuracy).
    AlmostDualInfeasible,
    /// Iteration limit reached before solution or infeasibility certificate found.
    MaxIterations,
    /// Time limit reached before solution or infeasibility certificate found.
    MaxTime,
    /// Solver terminated with a numerical error
    NumericalError,
    /// Solver terminated due to lack of progress.
    InsufficientProgress,
}

impl SolverStatus {
    /// True for the full and reduced accuracy infeasibility certificates
    pub fn is_infeasible(&self) -> bool {
        matches!(
            *self,
            SolverStatus::PrimalInfeasible
                | SolverStatus::DualInfeasible
                | SolverStatus::AlmostPrimalInfeasible
                | SolverStatus::AlmostDualInfeasible
        )
    }

    /// True if the engine stopped on a numerical failure
    pub fn is_errored(&self) -> bool {
        matches!(
            *self,
            SolverStatus::NumericalError | SolverStatus::InsufficientProgress
        )
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------------
// Lifecycle state of a solver handle
// ---------------------------------

/// Lifecycle state of a [`DefaultSolver`](crate::solver::DefaultSolver).
///
/// A solver is `Constructed` when `new` returns, becomes `Solved` after
/// its single call to `solve`, and `Disposed` once its resources have
/// been released.  There is no path back to an earlier state.
#[repr(u32)]
#[derive(PartialEq, Eq, Clone, Debug, Copy)]
pub enum SolverState {
    /// Never observable: a failed constructor returns an error instead
    Uninitialized,
    Constructed,
    Solved,
    Disposed,
}

impl std::fmt::Display for SolverState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ---------------------------------
// Errors
// ---------------------------------

/// Error type returned by solver construction and lifecycle operations.
///
/// Numerical outcomes of a solve (infeasibility, iteration limits etc.)
/// are not errors.  They are reported through [`SolverStatus`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Malformed sparse matrix data
    #[error("Invalid matrix data: {0}")]
    InvalidDimension(#[from] SparseFormatError),
    /// Two problem components have incompatible dimensions
    #[error("Dimension mismatch: {first} has dimension {first_dim} but {second} has dimension {second_dim}")]
    DimensionMismatch {
        first: &'static str,
        second: &'static str,
        first_dim: usize,
        second_dim: usize,
    },
    /// A cone was specified with an invalid parameter
    #[error("Invalid cone parameter: {0}")]
    InvalidConeParameter(#[from] ConeError),
    /// Operation is not allowed in the current lifecycle state
    #[error("Cannot {operation} a solver in state {state}")]
    InvalidState {
        state: SolverState,
        operation: &'static str,
    },
    /// Settings failed validation
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
    /// The engine was built without support for this cone
    #[error("{0} is not supported by this build of the solver")]
    UnsupportedCone(SupportedConeTag),
    /// The engine refused the problem
    #[error("Solver engine error: {0}")]
    Engine(String),
}

impl SolverError {
    pub(crate) fn mismatch(
        first: &'static str,
        first_dim: usize,
        second: &'static str,
        second_dim: usize,
    ) -> Self {
        SolverError::DimensionMismatch {
            first,
            second,
            first_dim,
            second_dim,
        }
    }
}

#[test]
fn test_solver_status_classes() {
    assert_eq!(SolverStatus::default(), SolverStatus::Unsolved);
    assert!(SolverStatus::AlmostDualInfeasible.is_infeasible());
    assert!(!SolverStatus::Solved.is_infeasible());
    assert!(SolverStatus::InsufficientProgress.is_errored());
    assert_eq!(SolverStatus::MaxTime.to_string(), "MaxTime");
}

#[test]
fn test_solver_error_messages() {
    let err = SolverError::mismatch("A.rows", 4, "b", 3);
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: A.rows has dimension 4 but b has dimension 3"
    );
    let err = SolverError::InvalidState {
        state: SolverState::Disposed,
        operation: "solve",
    };
    assert_eq!(err.to_string(), "Cannot solve a solver in state Disposed");
}
