use crate::{algebra::*, solver::core::SolverStatus};

/// Solution of a [`DefaultSolver`](crate::solver::DefaultSolver) problem,
/// as reported by the engine at termination.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultSolution<T> {
    /// primal solution
    pub x: Vec<T>,
    /// dual solution (in dual cone)
    pub z: Vec<T>,
    /// vector of slacks (in primal cone)
    pub s: Vec<T>,
    /// final solver status
    pub status: SolverStatus,
    /// primal objective value
    pub obj_val: T,
    /// dual objective value
    pub obj_val_dual: T,
    /// solve time in seconds
    pub solve_time: f64,
    /// number of iterations
    pub iterations: u32,
    /// primal residual
    pub r_prim: T,
    /// dual residual
    pub r_dual: T,
}

impl<T> DefaultSolution<T>
where
    T: FloatT,
{
    /// Create a new, unsolved `DefaultSolution` object
    pub fn new(n: usize, m: usize) -> Self {
        let x = vec![T::zero(); n];
        let z = vec![T::zero(); m];
        let s = vec![T::zero(); m];

        Self {
            x,
            z,
            s,
            status: SolverStatus::Unsolved,
            obj_val: T::nan(),
            obj_val_dual: T::nan(),
            solve_time: 0f64,
            iterations: 0,
            r_prim: T::nan(),
            r_dual: T::nan(),
        }
    }
}

#[test]
fn test_unsolved_solution() {
    let sol = DefaultSolution::<f64>::new(2, 3);
    assert_eq!(sol.x.len(), 2);
    assert_eq!(sol.z.len(), 3);
    assert_eq!(sol.s.len(), 3);
    assert_eq!(sol.status, SolverStatus::Unsolved);
    assert!(sol.obj_val.is_nan());
}
