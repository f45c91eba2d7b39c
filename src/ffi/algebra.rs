use super::{borrow_slice, drop_ptr, to_ptr};
use crate::algebra::*;
use std::ptr;

fn matrix_or_null(result: Result<CscMatrix<f64>, SparseFormatError>) -> *mut CscMatrix<f64> {
    match result {
        Ok(matrix) => to_ptr(matrix),
        Err(e) => {
            log::warn!("rejected matrix data: {}", e);
            ptr::null_mut()
        }
    }
}

/// Create a matrix from CSC arrays.  `colptr` must have length `n + 1`,
/// and `rowval` and `nzval` length `colptr[n]`.  Returns null if the data
/// does not describe a valid `m x n` matrix.
#[no_mangle]
pub unsafe extern "C" fn CscMatrix_new(
    m: usize,
    n: usize,
    colptr: *const usize,
    rowval: *const usize,
    nzval: *const f64,
) -> *mut CscMatrix<f64> {
    let colptr = match n.checked_add(1).and_then(|len| borrow_slice(colptr, len)) {
        Some(colptr) => colptr,
        None => return ptr::null_mut(),
    };
    let nnz = colptr[n];
    match (borrow_slice(rowval, nnz), borrow_slice(nzval, nnz)) {
        (Some(rowval), Some(nzval)) => matrix_or_null(CscMatrix::new(
            m,
            n,
            colptr.to_vec(),
            rowval.to_vec(),
            nzval.to_vec(),
        )),
        _ => ptr::null_mut(),
    }
}

/// Create a matrix from `nnz` triplets given as three arrays.  Repeated
/// entries are summed.  Returns null on an out of range index.
#[no_mangle]
pub unsafe extern "C" fn CscMatrix_from_triplets(
    m: usize,
    n: usize,
    nnz: usize,
    rows: *const usize,
    cols: *const usize,
    vals: *const f64,
) -> *mut CscMatrix<f64> {
    match (
        borrow_slice(rows, nnz),
        borrow_slice(cols, nnz),
        borrow_slice(vals, nnz),
    ) {
        (Some(rows), Some(cols), Some(vals)) => {
            matrix_or_null(CscMatrix::from_triplet_arrays(m, n, rows, cols, vals))
        }
        _ => ptr::null_mut(),
    }
}

/// Create a matrix from `m * n` values in column-major order.
/// Positive zeros are not stored.
#[no_mangle]
pub unsafe extern "C" fn CscMatrix_from_dense(
    m: usize,
    n: usize,
    values: *const f64,
) -> *mut CscMatrix<f64> {
    let len = match m.checked_mul(n) {
        Some(len) => len,
        None => return ptr::null_mut(),
    };
    match borrow_slice(values, len) {
        Some(values) => matrix_or_null(CscMatrix::from_dense(m, n, values)),
        None => ptr::null_mut(),
    }
}

/// Create an `m x n` matrix with no entries
#[no_mangle]
pub extern "C" fn CscMatrix_zeros(m: usize, n: usize) -> *mut CscMatrix<f64> {
    to_ptr(CscMatrix::zeros((m, n)))
}

/// Create the `n x n` identity matrix
#[no_mangle]
pub extern "C" fn CscMatrix_identity(n: usize) -> *mut CscMatrix<f64> {
    to_ptr(CscMatrix::identity(n))
}

/// Number of stored entries, zero for a null matrix
#[no_mangle]
pub unsafe extern "C" fn CscMatrix_nnz(matrix: *const CscMatrix<f64>) -> usize {
    matrix.as_ref().map_or(0, |M| M.nnz())
}

/// Number of rows, zero for a null matrix
#[no_mangle]
pub unsafe extern "C" fn CscMatrix_nrows(matrix: *const CscMatrix<f64>) -> usize {
    matrix.as_ref().map_or(0, |M| M.nrows())
}

/// Number of columns, zero for a null matrix
#[no_mangle]
pub unsafe extern "C" fn CscMatrix_ncols(matrix: *const CscMatrix<f64>) -> usize {
    matrix.as_ref().map_or(0, |M| M.ncols())
}

#[no_mangle]
pub unsafe extern "C" fn CscMatrix_delete(matrix: *mut CscMatrix<f64>) {
    drop_ptr(matrix);
}

#[test]
fn test_csc_ffi() {
    unsafe {
        let colptr = [0, 1, 2];
        let rowval = [0, 1];
        let nzval = [1.0, 2.0];
        let M = CscMatrix_new(2, 2, colptr.as_ptr(), rowval.as_ptr(), nzval.as_ptr());
        assert!(!M.is_null());
        assert_eq!(CscMatrix_nnz(M), 2);
        assert_eq!(CscMatrix_nrows(M), 2);
        CscMatrix_delete(M);

        // row index out of range
        let rowval = [0, 2];
        let M = CscMatrix_new(2, 2, colptr.as_ptr(), rowval.as_ptr(), nzval.as_ptr());
        assert!(M.is_null());

        let M = CscMatrix_from_dense(0, 3, ptr::null());
        assert_eq!(CscMatrix_ncols(M), 3);
        CscMatrix_delete(M);

        CscMatrix_delete(ptr::null_mut());
        assert_eq!(CscMatrix_nnz(ptr::null()), 0);
    }
}
