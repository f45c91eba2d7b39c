#![allow(non_snake_case)]

use crate::algebra::{FloatT, ShapedMatrix, SparseFormatError};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```no_run
/// use clarabel_c::algebra::CscMatrix;
///
/// let A : CscMatrix<f64> = CscMatrix::new(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  ).unwrap();
///
/// ```
///
/// Row indices within a column may appear in any order but must be unique.
/// All of the constructors in this crate other than [`CscMatrix::new`]
/// produce columns sorted by increasing row index.

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct CscMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSC format column pointer.
    ///
    /// Ths field should have length `n+1`. The last entry corresponds
    /// to the the number of nonzeros and should agree with the lengths
    /// of the `rowval` and `nzval` fields.
    pub colptr: Vec<usize>,
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Checked `CscMatrix` constructor.
    ///
    /// Returns an error unless the data satisfies every condition
    /// tested by [`check_format`](CscMatrix::check_format).
    pub fn new(
        m: usize,
        n: usize,
        colptr: Vec<usize>,
        rowval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Result<Self, SparseFormatError> {
        let A = CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        };
        A.check_format()?;
        Ok(A)
    }

    /// Unchecked `CscMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__ ensure that rows indices
    /// are all in bounds or unique within each column.
    pub fn new_unchecked(
        m: usize,
        n: usize,
        colptr: Vec<usize>,
        rowval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colptr.len(), n + 1);
        assert_eq!(colptr[n], rowval.len());
        CscMatrix {
            m,
            n,
            colptr,
            rowval,
            nzval,
        }
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// All entries of `colptr` other than the last are zero, so the
    /// result is only well formed once the caller has filled it.
    pub fn spalloc(m: usize, n: usize, nnz: usize) -> Self {
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        CscMatrix::new_unchecked(m, n, colptr, rowval, nzval)
    }

    /// Sparse matrix of zeros of the given size, with no structural entries
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        CscMatrix::spalloc(m, n, 0)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        CscMatrix::new_unchecked(n, n, colptr, rowval, nzval)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::dimension(format!(
                "rowval has length {} but nzval has length {}",
                self.rowval.len(),
                self.nzval.len()
            )));
        }

        if self.colptr.len().checked_sub(1) != Some(self.n) {
            return Err(SparseFormatError::dimension(format!(
                "colptr has length {} for a matrix with {} columns",
                self.colptr.len(),
                self.n
            )));
        }

        if self.colptr[0] != 0 || self.colptr[self.n] != self.rowval.len() {
            return Err(SparseFormatError::BadColptr);
        }

        //check for colptr monotonicity
        if self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        //check for repeated rows within each column.  Rows need
        //not be sorted, so unsorted columns are checked on a sorted
        //copy.  Scratch space is bounded by the longest column.
        let mut scratch = Vec::new();
        for col in 0..self.n {
            let rows = &self.rowval[self.colptr[col]..self.colptr[col + 1]];
            if rows.windows(2).all(|r| r[0] < r[1]) {
                continue;
            }
            scratch.clear();
            scratch.extend_from_slice(rows);
            scratch.sort_unstable();
            if let Some(r) = scratch.windows(2).find(|r| r[0] == r[1]) {
                return Err(SparseFormatError::DuplicateEntry { row: r[0], col });
            }
        }

        Ok(())
    }

    /// True if entries within every column appear in order of
    /// increasing row index
    pub fn is_sorted(&self) -> bool {
        (0..self.n).all(|col| {
            let rng = self.colptr[col]..self.colptr[col + 1];
            self.rowval[rng].windows(2).all(|c| c[0] < c[1])
        })
    }

    /// Returns a copy with the entries of each column sorted by row index
    pub fn to_sorted(&self) -> Self {
        let mut out = self.clone();
        if self.is_sorted() {
            return out;
        }
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            let mut entries: Vec<(usize, T)> = self.rowval[rng.clone()]
                .iter()
                .copied()
                .zip(self.nzval[rng.clone()].iter().copied())
                .collect();
            entries.sort_unstable_by_key(|&(row, _)| row);
            for (k, (row, val)) in rng.zip(entries) {
                out.rowval[k] = row;
                out.nzval[k] = val;
            }
        }
        out
    }

    /// Allocates a new matrix containing only entries from the upper triangular part
    ///
    /// # Panics
    /// Panics if the matrix is not square
    pub fn to_triu(&self) -> Self {
        assert_eq!(self.m, self.n);
        let n = self.n;
        let mut colptr = vec![0; n + 1];
        let mut rowval = Vec::with_capacity(self.nnz());
        let mut nzval = Vec::with_capacity(self.nnz());

        for col in 0..n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            for (&row, &val) in self.rowval[rng.clone()].iter().zip(&self.nzval[rng]) {
                if row <= col {
                    rowval.push(row);
                    nzval.push(val);
                }
            }
            colptr[col + 1] = rowval.len();
        }
        CscMatrix::new_unchecked(n, n, colptr, rowval, nzval)
    }

    /// True if the matrix is upper triangular
    pub fn is_triu(&self) -> bool {
        // check lower triangle for any structural entries, regardless
        // of the values that may be assigned to them
        (0..self.n).all(|col| {
            let rows = &self.rowval[self.colptr[col]..self.colptr[col + 1]];
            rows.iter().all(|&row| row <= col)
        })
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        let first = self.colptr[col];
        let last = self.colptr[col + 1];
        self.rowval[first..last]
            .iter()
            .position(|&r| r == row)
            .map(|k| self.nzval[first + k])
    }
}

impl<T> ShapedMatrix for CscMatrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

#[test]
fn test_csc_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]
    //[ ⋅   8.0  11.0   ⋅   14.0]
    //[3.0  9.0    ⋅    ⋅     ⋅ ]

    let A = CscMatrix::new(
        6,                                                                 // m
        5,                                                                 // n
        vec![0, 3, 9, 11, 11, 14],                                         // colptr
        vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // rowval
        vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
    )
    .unwrap();

    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((5, 0)).unwrap(), 3.);
    assert_eq!(A.get_entry((0, 1)).unwrap(), 4.);
    assert_eq!(A.get_entry((3, 1)).unwrap(), 7.);
    assert_eq!(A.get_entry((5, 1)).unwrap(), 9.);
    assert_eq!(A.get_entry((3, 2)).unwrap(), 10.);
    assert_eq!(A.get_entry((4, 2)).unwrap(), 11.);
    assert_eq!(A.get_entry((4, 4)).unwrap(), 14.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((4, 0)).is_none());
    assert!(A.get_entry((2, 2)).is_none());
    assert!(A.get_entry((1, 3)).is_none());
    assert!(A.get_entry((3, 4)).is_none());
}

#[test]
fn test_csc_check_format() {
    // unsorted but unique rows are accepted
    let A = CscMatrix::new(3, 1, vec![0, 2], vec![2, 0], vec![1., 2.]).unwrap();
    assert!(!A.is_sorted());
    let B = A.to_sorted();
    assert_eq!(B.rowval, vec![0, 2]);
    assert_eq!(B.nzval, vec![2., 1.]);

    // repeated row within a column
    let err = CscMatrix::new(3, 1, vec![0, 2], vec![1, 1], vec![1., 2.]).unwrap_err();
    assert_eq!(err, SparseFormatError::DuplicateEntry { row: 1, col: 0 });

    // row out of bounds
    let err = CscMatrix::new(2, 1, vec![0, 1], vec![2], vec![1.]).unwrap_err();
    assert_eq!(err, SparseFormatError::BadRowval);

    // colptr decreasing
    let err = CscMatrix::new(2, 2, vec![0, 2, 1], vec![0], vec![1.]).unwrap_err();
    assert_eq!(err, SparseFormatError::BadColptr);

    // colptr of the wrong length
    let err = CscMatrix::<f64>::new(2, 2, vec![0, 0], vec![], vec![]).unwrap_err();
    assert!(matches!(err, SparseFormatError::InvalidDimension(_)));

    // mismatched value arrays
    let err = CscMatrix::new(2, 1, vec![0, 1], vec![0], vec![1., 2.]).unwrap_err();
    assert!(matches!(err, SparseFormatError::InvalidDimension(_)));
}

#[test]
fn test_csc_to_triu() {
    let A = CscMatrix::from(&[
        [4., 1., 0.], //
        [1., 5., 2.], //
        [0., 2., 6.], //
    ]);
    assert!(!A.is_triu());
    let U = A.to_triu();
    assert!(U.is_triu());
    assert_eq!(U.nnz(), 5);
    assert_eq!(U.get_entry((0, 1)), Some(1.));
    assert!(U.get_entry((1, 0)).is_none());
}
