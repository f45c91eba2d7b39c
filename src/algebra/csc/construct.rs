#![allow(non_snake_case)]

//---------------------------------------------------------
// conversion of triplet and dense data into CSC format
//---------------------------------------------------------

use crate::algebra::{CscMatrix, FloatT, SparseFormatError};
use itertools::izip;

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Construct an `m x n` matrix from `(row, col, value)` triplets.
    ///
    /// Triplets may be supplied in any order.  Entries that share the same
    /// `(row, col)` index are __summed__, and the sum is kept as a
    /// structural entry even if it is zero.  Entries in each column of the
    /// output are sorted by row index.
    ///
    /// ```no_run
    /// use clarabel_c::algebra::CscMatrix;
    ///
    /// let A = CscMatrix::from_triplets(1, 1, &[(0, 0, 1.0), (0, 0, 2.0)]).unwrap();
    /// assert_eq!(A.nzval, vec![3.0]);
    /// ```
    pub fn from_triplets(
        m: usize,
        n: usize,
        triplets: &[(usize, usize, T)],
    ) -> Result<Self, SparseFormatError> {
        let (rows, (cols, vals)): (Vec<usize>, (Vec<usize>, Vec<T>)) =
            triplets.iter().map(|&(r, c, v)| (r, (c, v))).unzip();
        Self::from_triplet_arrays(m, n, &rows, &cols, &vals)
    }

    /// As [`from_triplets`](CscMatrix::from_triplets), but with
    /// the row indices, column indices and values in separate arrays
    /// of equal length.
    pub fn from_triplet_arrays(
        m: usize,
        n: usize,
        rows: &[usize],
        cols: &[usize],
        vals: &[T],
    ) -> Result<Self, SparseFormatError> {
        if rows.len() != cols.len() || rows.len() != vals.len() {
            return Err(SparseFormatError::dimension(format!(
                "triplet arrays have lengths {}, {} and {}",
                rows.len(),
                cols.len(),
                vals.len()
            )));
        }
        for (&r, &c) in rows.iter().zip(cols) {
            if r >= m || c >= n {
                return Err(SparseFormatError::dimension(format!(
                    "index ({}, {}) is out of bounds for a {} x {} matrix",
                    r, c, m, n
                )));
            }
        }

        // bucket the entries by column using the colptr as counter
        let mut A = CscMatrix::spalloc(m, n, rows.len());
        A.colptr.fill(0);
        for &c in cols {
            A.colptr[c] += 1;
        }
        A.colcount_to_colptr();
        for (&r, &c, &v) in izip!(rows, cols, vals) {
            let dest = A.colptr[c];
            A.rowval[dest] = r;
            A.nzval[dest] = v;
            A.colptr[c] += 1;
        }
        A.backshift_colptrs();

        // sort each column and sum duplicates in place
        A = A.to_sorted();
        A.sum_duplicates();
        Ok(A)
    }

    /// Construct an `m x n` matrix from dense data in column-major order.
    ///
    /// Entries equal to positive zero are not stored.  Every other value,
    /// including `-0.0`, becomes a structural entry, so that
    /// [`to_dense`](CscMatrix::to_dense) recovers the input exactly.
    pub fn from_dense(m: usize, n: usize, values: &[T]) -> Result<Self, SparseFormatError> {
        // an m x n size that overflows can never match a slice length
        if m.checked_mul(n) != Some(values.len()) {
            return Err(SparseFormatError::dimension(format!(
                "dense data has length {} but the matrix is {} x {}",
                values.len(),
                m,
                n
            )));
        }

        let nnz = values.iter().filter(|v| !is_positive_zero(**v)).count();

        if nnz == 0 {
            return Ok(CscMatrix::zeros((m, n)));
        }

        if nnz == values.len() {
            // fully dense pattern
            let colptr = (0..=n).map(|j| j * m).collect();
            let rowval = (0..n).flat_map(|_| 0..m).collect();
            return Ok(CscMatrix::new_unchecked(m, n, colptr, rowval, values.to_vec()));
        }

        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::with_capacity(nnz);
        let mut nzval = Vec::with_capacity(nnz);
        colptr.push(0);
        for column in values.chunks(m) {
            for (row, &v) in column.iter().enumerate() {
                if !is_positive_zero(v) {
                    rowval.push(row);
                    nzval.push(v);
                }
            }
            colptr.push(rowval.len());
        }

        Ok(CscMatrix::new_unchecked(m, n, colptr, rowval, nzval))
    }

    /// Dense copy of the matrix in column-major order
    pub fn to_dense(&self) -> Vec<T> {
        let mut dense = vec![T::zero(); self.m * self.n];
        for col in 0..self.n {
            for k in self.colptr[col]..self.colptr[col + 1] {
                dense[col * self.m + self.rowval[k]] = self.nzval[k];
            }
        }
        dense
    }

    /// vertical matrix concatenation
    ///
    /// ```text
    /// C = [ A ]
    ///     [ B ]
    /// ```
    pub fn vcat(A: &Self, B: &Self) -> Result<Self, SparseFormatError> {
        //first check for compatible column dimensions
        if A.n != B.n {
            return Err(SparseFormatError::dimension(format!(
                "cannot stack a matrix with {} columns on one with {}",
                A.n, B.n
            )));
        }

        let mut colptr = Vec::with_capacity(A.n + 1);
        let mut rowval = Vec::with_capacity(A.nnz() + B.nnz());
        let mut nzval = Vec::with_capacity(A.nnz() + B.nnz());
        colptr.push(0);

        for col in 0..A.n {
            let rngA = A.colptr[col]..A.colptr[col + 1];
            rowval.extend_from_slice(&A.rowval[rngA.clone()]);
            nzval.extend_from_slice(&A.nzval[rngA]);

            let rngB = B.colptr[col]..B.colptr[col + 1];
            rowval.extend(B.rowval[rngB.clone()].iter().map(|r| r + A.m));
            nzval.extend_from_slice(&B.nzval[rngB]);

            colptr.push(rowval.len());
        }

        Ok(CscMatrix::new_unchecked(A.m + B.m, A.n, colptr, rowval, nzval))
    }

    /// multiply every stored entry by -1
    pub fn negate(&mut self) {
        self.nzval.iter_mut().for_each(|v| *v = -*v);
    }

    /// multiply every stored entry by `c`
    pub fn scale(&mut self, c: T) {
        self.nzval.iter_mut().for_each(|v| *v *= c);
    }

    // sum entries with the same row index within each column.
    // assumes that each column is already sorted by row
    fn sum_duplicates(&mut self) {
        let mut dest = 0;
        let mut start = 0;
        for col in 0..self.n {
            let stop = self.colptr[col + 1];
            let colstart = dest;
            for k in start..stop {
                if dest > colstart && self.rowval[dest - 1] == self.rowval[k] {
                    let v = self.nzval[k];
                    self.nzval[dest - 1] += v;
                } else {
                    self.rowval[dest] = self.rowval[k];
                    self.nzval[dest] = self.nzval[k];
                    dest += 1;
                }
            }
            start = stop;
            self.colptr[col + 1] = dest;
        }
        self.rowval.truncate(dest);
        self.nzval.truncate(dest);
    }

    pub(crate) fn colcount_to_colptr(&mut self) {
        let mut currentptr = 0;
        for p in &mut self.colptr {
            let count = *p;
            *p = currentptr;
            currentptr += count;
        }
    }

    pub(crate) fn backshift_colptrs(&mut self) {
        self.colptr.rotate_right(1);
        self.colptr[0] = 0;
    }
}

fn is_positive_zero<T: FloatT>(v: T) -> bool {
    v == T::zero() && v.is_sign_positive()
}

/// Construct from row-major literal arrays, e.g.
///
/// ```no_run
/// use clarabel_c::algebra::CscMatrix;
///
/// let A = CscMatrix::from(&[
///     [1., 0.],
///     [0., 2.],
/// ]);
/// ```
///
/// Positive zeros are dropped, as in [`CscMatrix::from_dense`].
impl<'a, I, J, T> From<I> for CscMatrix<T>
where
    I: IntoIterator<Item = J>,
    J: IntoIterator<Item = &'a T>,
    T: FloatT,
{
    fn from(rows: I) -> CscMatrix<T> {
        let rows: Vec<Vec<T>> = rows
            .into_iter()
            .map(|r| r.into_iter().copied().collect())
            .collect();
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        assert!(rows.iter().all(|r| r.len() == n), "ragged row data");

        // transpose into column-major order
        let mut values = Vec::with_capacity(m * n);
        for col in 0..n {
            values.extend(rows.iter().map(|r| r[col]));
        }
        // lengths are consistent by construction
        CscMatrix::from_dense(m, n, &values).unwrap()
    }
}

#[test]
fn test_from_triplets_sums_duplicates() {
    let A = CscMatrix::from_triplets(1, 1, &[(0, 0, 1.0), (0, 0, 2.0)]).unwrap();
    assert_eq!(A.colptr, vec![0, 1]);
    assert_eq!(A.rowval, vec![0]);
    assert_eq!(A.nzval, vec![3.0]);
}

#[test]
fn test_from_triplets_unordered() {
    // [1 . 4]
    // [. 3 .]
    // [2 . 5]
    let A = CscMatrix::from_triplets(
        3,
        3,
        &[(2, 2, 5.), (0, 0, 1.), (1, 1, 3.), (2, 0, 2.), (0, 2, 4.)],
    )
    .unwrap();
    assert!(A.check_format().is_ok());
    assert_eq!(A.colptr, vec![0, 2, 3, 5]);
    assert_eq!(A.rowval, vec![0, 2, 1, 0, 2]);
    assert_eq!(A.nzval, vec![1., 2., 3., 4., 5.]);
}

#[test]
fn test_from_triplets_bad_index() {
    let err = CscMatrix::from_triplets(2, 2, &[(2, 0, 1.0)]).unwrap_err();
    assert!(matches!(err, SparseFormatError::InvalidDimension(_)));
    let err = CscMatrix::from_triplets(2, 2, &[(0, 5, 1.0)]).unwrap_err();
    assert!(matches!(err, SparseFormatError::InvalidDimension(_)));
    let err = CscMatrix::from_triplet_arrays(2, 2, &[0, 1], &[0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, SparseFormatError::InvalidDimension(_)));
}

#[test]
fn test_from_dense_patterns() {
    let Z = CscMatrix::<f64>::from_dense(2, 3, &[0.; 6]).unwrap();
    assert_eq!(Z.nnz(), 0);
    assert_eq!(Z.colptr, vec![0; 4]);

    let F = CscMatrix::from_dense(2, 2, &[1., 2., 3., 4.]).unwrap();
    assert_eq!(F.colptr, vec![0, 2, 4]);
    assert_eq!(F.rowval, vec![0, 1, 0, 1]);
    assert_eq!(F.get_entry((0, 1)), Some(3.));

    let S = CscMatrix::from_dense(2, 2, &[0., 2., -0., 0.]).unwrap();
    assert_eq!(S.nnz(), 2);
    assert_eq!(S.colptr, vec![0, 1, 2]);

    assert!(CscMatrix::from_dense(2, 2, &[1., 2., 3.]).is_err());
}

#[test]
fn test_vcat() {
    let I = CscMatrix::<f64>::identity(2);
    let mut J = CscMatrix::<f64>::identity(2);
    J.negate();
    let A = CscMatrix::vcat(&I, &J).unwrap();
    assert_eq!(A.size(), (4, 2));
    assert_eq!(A.rowval, vec![0, 2, 1, 3]);
    assert_eq!(A.nzval, vec![1., -1., 1., -1.]);

    let B = CscMatrix::<f64>::identity(3);
    assert!(CscMatrix::vcat(&I, &B).is_err());
}

#[cfg(test)]
use crate::algebra::ShapedMatrix;
