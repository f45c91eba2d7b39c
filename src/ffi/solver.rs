use super::{borrow_slice, guard, to_ptr};
use crate::algebra::*;
use crate::solver::{
    ffi::{DefaultSolutionFFI, ErrorCodeFFI, SolverStateFFI, SolverStatusFFI},
    DefaultSettings, DefaultSolver, SolverError, SolverState, SupportedConeT,
};
use std::ptr;

// write through an optional out-pointer
unsafe fn report<T>(out: *mut T, value: T) {
    if let Some(out) = out.as_mut() {
        *out = value;
    }
}

unsafe fn solver_new(
    P: *const CscMatrix<f64>,
    q: *const f64,
    A: *const CscMatrix<f64>,
    b: *const f64,
    cones: *const *const SupportedConeT<f64>,
    ncones: usize,
    settings: *const DefaultSettings<f64>,
) -> Result<DefaultSolver<f64>, ErrorCodeFFI> {
    let (P, A) = match (P.as_ref(), A.as_ref()) {
        (Some(P), Some(A)) => (P, A),
        _ => return Err(ErrorCodeFFI::NullPointer),
    };
    let settings = settings.as_ref().ok_or(ErrorCodeFFI::NullPointer)?;

    // q and b lengths are implied by the matrices
    let q = borrow_slice(q, P.ncols()).ok_or(ErrorCodeFFI::NullPointer)?;
    let b = borrow_slice(b, A.nrows()).ok_or(ErrorCodeFFI::NullPointer)?;

    // copy the cones, leaving the caller's handles untouched
    let cones = borrow_slice(cones, ncones)
        .ok_or(ErrorCodeFFI::NullPointer)?
        .iter()
        .map(|&cone| cone.as_ref().cloned().ok_or(ErrorCodeFFI::NullPointer))
        .collect::<Result<Vec<_>, _>>()?;

    DefaultSolver::new(P, q, A, b, &cones, settings.clone()).map_err(|e| {
        log::warn!("solver construction failed: {}", e);
        ErrorCodeFFI::from(&e)
    })
}

/// Create a solver for the problem
///
/// ```text
/// minimize    ½xᵀPx + qᵀx
/// subject to  Ax + s = b,  s ∈ K
/// ```
///
/// `q` must have length `ncols(P)` and `b` length `nrows(A)`.  Every input
/// is copied, and may be deleted by the caller as soon as this function
/// returns.  On failure the result is null and the reason is written to
/// `err` (if not null).  A panic inside the engine is reported as
/// `EngineError`.
#[no_mangle]
pub unsafe extern "C" fn DefaultSolver_new(
    P: *const CscMatrix<f64>,
    q: *const f64,
    A: *const CscMatrix<f64>,
    b: *const f64,
    cones: *const *const SupportedConeT<f64>,
    ncones: usize,
    settings: *const DefaultSettings<f64>,
    err: *mut ErrorCodeFFI,
) -> *mut DefaultSolver<f64> {
    let result = guard(|| solver_new(P, q, A, b, cones, ncones, settings))
        .unwrap_or(Err(ErrorCodeFFI::EngineError));
    match result {
        Ok(solver) => {
            report(err, ErrorCodeFFI::Ok);
            to_ptr(solver)
        }
        Err(code) => {
            report(err, code);
            ptr::null_mut()
        }
    }
}

/// Solve the problem, writing the termination status to `status`
/// (if not null).  Fails with `InvalidState` if the solver has
/// already been solved.  If the engine panics the solver is disposed
/// and `EngineError` is returned.
#[no_mangle]
pub unsafe extern "C" fn DefaultSolver_solve(
    solver: *mut DefaultSolver<f64>,
    status: *mut SolverStatusFFI,
) -> ErrorCodeFFI {
    let solver = match solver.as_mut() {
        Some(solver) => solver,
        None => return ErrorCodeFFI::NullPointer,
    };
    match guard(|| solver.solve().map(|solution| solution.status)) {
        Some(Ok(solved)) => {
            report(status, solved);
            ErrorCodeFFI::Ok
        }
        Some(Err(e)) => ErrorCodeFFI::from(&e),
        None => {
            // the engine may have stopped mid-iteration
            if let Some(Err(e)) = guard(|| solver.dispose()) {
                log::warn!("could not release the engine: {}", e);
            }
            ErrorCodeFFI::EngineError
        }
    }
}

/// Fill `out` with the solution.  The array pointers in `out` borrow
/// memory owned by the solver and remain valid until it is deleted.
#[no_mangle]
pub unsafe extern "C" fn DefaultSolver_solution(
    solver: *const DefaultSolver<f64>,
    out: *mut DefaultSolutionFFI<f64>,
) -> ErrorCodeFFI {
    let solver = match solver.as_ref() {
        Some(solver) if !out.is_null() => solver,
        _ => return ErrorCodeFFI::NullPointer,
    };
    match solver.solution() {
        Some(solution) => {
            // `out` may point to uninitialized memory
            out.write(DefaultSolutionFFI::from(solution));
            ErrorCodeFFI::Ok
        }
        None => {
            let err = SolverError::InvalidState {
                state: solver.state(),
                operation: "read the solution of",
            };
            ErrorCodeFFI::from(&err)
        }
    }
}

/// Lifecycle state of the solver.  A null handle reports `Disposed`.
#[no_mangle]
pub unsafe extern "C" fn DefaultSolver_state(solver: *const DefaultSolver<f64>) -> SolverStateFFI {
    solver.as_ref().map_or(SolverState::Disposed, |s| s.state())
}

/// Delete the solver and set `*solver` to null.  Deleting through
/// a null or already cleared pointer does nothing.
#[no_mangle]
pub unsafe extern "C" fn DefaultSolver_delete(solver: *mut *mut DefaultSolver<f64>) {
    let handle = match solver.as_mut() {
        Some(handle) => handle,
        None => return,
    };
    if handle.is_null() {
        return;
    }
    let boxed = Box::from_raw(*handle);
    *handle = ptr::null_mut();
    // field order drops the engine before the problem data
    drop(boxed);
}
