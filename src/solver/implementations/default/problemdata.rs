#![allow(non_snake_case)]
use crate::algebra::*;
use crate::solver::core::{
    cones::{make_cone_ranges, total_numel, SupportedConeT},
    SolverError,
};
use std::ops::Range;

// ---------------
// Data type for default problem format
// ---------------

/// Owned copy of a problem in the standard conic form
///
/// ```text
/// minimize    ½xᵀPx + qᵀx
/// subject to  Ax + s = b,  s ∈ K
/// ```
///
/// where `K` is the product of the cones in `cones`, in order.  All data
/// is copied from the caller at construction, so the caller's buffers may
/// be released as soon as `new` returns.
#[derive(Debug, Clone)]
pub struct DefaultProblemData<T> {
    pub P: CscMatrix<T>,
    pub q: Vec<T>,
    pub A: CscMatrix<T>,
    pub b: Vec<T>,
    pub cones: Vec<SupportedConeT<T>>,
    /// number of variables
    pub n: usize,
    /// number of constraints
    pub m: usize,
    /// rows of `A` assigned to each cone
    pub cone_ranges: Vec<Range<usize>>,
}

impl<T> DefaultProblemData<T>
where
    T: FloatT,
{
    /// Validate and copy problem data.
    ///
    /// Checks, in order: the parameters of every cone, the structure of
    /// `P` and `A`, and then the dimensional consistency of all inputs.
    /// The first failure is returned and nothing is retained.
    pub fn new(
        P: &CscMatrix<T>,
        q: &[T],
        A: &CscMatrix<T>,
        b: &[T],
        cones: &[SupportedConeT<T>],
    ) -> Result<Self, SolverError> {
        for cone in cones {
            cone.validate()?;
        }

        P.check_format()?;
        A.check_format()?;

        check_dimensions(P, q, A, b, cones)?;

        let (m, n) = A.size();

        Ok(Self {
            P: P.clone(),
            q: q.to_vec(),
            A: A.clone(),
            b: b.to_vec(),
            cones: cones.to_vec(),
            n,
            m,
            cone_ranges: make_cone_ranges(cones),
        })
    }
}

fn check_dimensions<T: FloatT>(
    P: &CscMatrix<T>,
    q: &[T],
    A: &CscMatrix<T>,
    b: &[T],
    cones: &[SupportedConeT<T>],
) -> Result<(), SolverError> {
    if !P.is_square() {
        return Err(SolverError::mismatch("P.rows", P.nrows(), "P.cols", P.ncols()));
    }
    if P.ncols() != q.len() {
        return Err(SolverError::mismatch("P", P.ncols(), "q", q.len()));
    }
    if A.ncols() != P.ncols() {
        return Err(SolverError::mismatch("A.cols", A.ncols(), "P.cols", P.ncols()));
    }
    if A.nrows() != b.len() {
        return Err(SolverError::mismatch("A.rows", A.nrows(), "b", b.len()));
    }
    // a total that overflows can never equal the row count of A
    match total_numel(cones) {
        Some(numel) if numel == A.nrows() => Ok(()),
        Some(numel) => Err(SolverError::mismatch("cones", numel, "A.rows", A.nrows())),
        None => Err(SolverError::mismatch("cones", usize::MAX, "A.rows", A.nrows())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::core::cones::SupportedConeT::*;

    #[test]
    fn test_problemdata_copies_inputs() {
        let P = CscMatrix::<f64>::identity(2);
        let A = CscMatrix::<f64>::identity(2);
        let data =
            DefaultProblemData::new(&P, &[1., 2.], &A, &[3., 4.], &[ZeroConeT(1), NonnegativeConeT(1)])
                .unwrap();
        assert_eq!((data.n, data.m), (2, 2));
        assert_eq!(data.q, vec![1., 2.]);
        assert_eq!(data.cone_ranges, vec![0..1, 1..2]);
    }

    #[test]
    fn test_problemdata_rejects_bad_cone_first() {
        // a zero dimension cone is reported even though the cone
        // dimensions also fail to match A
        let P = CscMatrix::<f64>::identity(1);
        let A = CscMatrix::<f64>::identity(1);
        let err = DefaultProblemData::new(&P, &[0.], &A, &[0.], &[NonnegativeConeT(0)]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidConeParameter(_)));
    }

    #[test]
    fn test_problemdata_rejects_bad_csc() {
        let P = CscMatrix::<f64>::identity(1);
        let mut A = CscMatrix::<f64>::identity(1);
        A.rowval[0] = 3;
        let err = DefaultProblemData::new(&P, &[0.], &A, &[0.], &[ZeroConeT(1)]).unwrap_err();
        assert_eq!(err, SolverError::InvalidDimension(SparseFormatError::BadRowval));
    }

    #[test]
    fn test_problemdata_rejects_wrapping_cone_total() {
        // usize::MAX + 2 wraps to 1, which must not pass as a match for A
        let P = CscMatrix::<f64>::identity(1);
        let A = CscMatrix::<f64>::identity(1);
        let cones = [NonnegativeConeT(usize::MAX), NonnegativeConeT(2)];
        let err = DefaultProblemData::new(&P, &[0.], &A, &[1.], &cones).unwrap_err();
        assert!(matches!(err, SolverError::DimensionMismatch { .. }));
    }
}
