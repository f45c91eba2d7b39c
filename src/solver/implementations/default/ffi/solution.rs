use crate::algebra::*;
use crate::solver::core::ffi::SolverStatusFFI;
use crate::solver::DefaultSolution;

/// FFI interface for [`DefaultSolution`](crate::solver::implementations::default::DefaultSolution).
///
/// The array pointers borrow the vectors of the solution they were
/// made from, and are valid only for as long as that solution is alive
/// and unmodified.
#[allow(missing_docs)]
#[derive(Debug)]
#[repr(C)]
pub struct DefaultSolutionFFI<T: FloatT> {
    pub x: *const T,
    pub x_length: usize,
    pub z: *const T,
    pub z_length: usize,
    pub s: *const T,
    pub s_length: usize,
    pub status: SolverStatusFFI,
    pub obj_val: T,
    pub obj_val_dual: T,
    pub solve_time: f64,
    pub iterations: u32,
    pub r_prim: T,
    pub r_dual: T,
}

impl<T> From<&DefaultSolution<T>> for DefaultSolutionFFI<T>
where
    T: FloatT,
{
    fn from(sol: &DefaultSolution<T>) -> Self {
        Self {
            x: sol.x.as_ptr(),
            x_length: sol.x.len(),
            z: sol.z.as_ptr(),
            z_length: sol.z.len(),
            s: sol.s.as_ptr(),
            s_length: sol.s.len(),
            status: sol.status,
            obj_val: sol.obj_val,
            obj_val_dual: sol.obj_val_dual,
            solve_time: sol.solve_time,
            iterations: sol.iterations,
            r_prim: sol.r_prim,
            r_dual: sol.r_dual,
        }
    }
}

// No From<DefaultSolutionFFI> because solutions
// flow only one way

#[test]
fn test_solution_ffi() {
    let mut sol = DefaultSolution::<f64>::new(2, 1);
    sol.x[1] = 3.0;
    let sol_ffi = DefaultSolutionFFI::from(&sol);
    assert_eq!(sol_ffi.x_length, 2);
    assert_eq!(sol_ffi.z_length, 1);
    assert_eq!(unsafe { *sol_ffi.x.add(1) }, 3.0);
}
