#![allow(non_snake_case)]

use clarabel_c::algebra::*;

#[test]
fn test_csc_zeros() {
    let Z = CscMatrix::<f64>::zeros((3, 4));
    assert_eq!(Z.size(), (3, 4));
    assert_eq!(Z.nnz(), 0);
    assert_eq!(Z.colptr, vec![0; 5]);
    assert!(Z.check_format().is_ok());
    assert_eq!(Z.to_dense(), vec![0.; 12]);

    // degenerate shapes are still valid matrices
    let E = CscMatrix::<f64>::zeros((0, 2));
    assert!(E.check_format().is_ok());
    assert_eq!(E.colptr, vec![0, 0, 0]);
}

#[test]
fn test_csc_identity() {
    let I = CscMatrix::<f64>::identity(3);
    assert_eq!(I.size(), (3, 3));
    assert_eq!(I.colptr, vec![0, 1, 2, 3]);
    assert_eq!(I.rowval, vec![0, 1, 2]);
    assert_eq!(I.nzval, vec![1.; 3]);
    assert!(I.is_triu());
    assert_eq!(I.to_dense(), vec![1., 0., 0., 0., 1., 0., 0., 0., 1.]);
}

#[test]
fn test_csc_dense_exact_round_trip() {
    // column-major 3 x 2
    let values = [1.5, 0.0, -0.0, f64::NAN, 0.0, f64::NEG_INFINITY];
    let A = CscMatrix::from_dense(3, 2, &values).unwrap();
    assert!(A.check_format().is_ok());

    // positive zeros are dropped, everything else is kept
    assert_eq!(A.nnz(), 4);
    assert_eq!(A.colptr, vec![0, 2, 4]);
    assert_eq!(A.rowval, vec![0, 2, 0, 2]);

    let dense = A.to_dense();
    assert_eq!(dense.len(), values.len());
    for (x, y) in dense.iter().zip(values.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn test_csc_dense_bad_length() {
    let err = CscMatrix::<f64>::from_dense(2, 3, &[1.; 5]).unwrap_err();
    assert!(matches!(err, SparseFormatError::InvalidDimension(_)));
}

#[test]
fn test_csc_dense_size_overflow() {
    // (usize::MAX / 2 + 1) * 2 wraps to zero, matching an empty slice
    let m = usize::MAX / 2 + 1;
    let err = CscMatrix::<f64>::from_dense(m, 2, &[]).unwrap_err();
    assert!(matches!(err, SparseFormatError::InvalidDimension(_)));

    let err = CscMatrix::<f64>::from_dense(usize::MAX, 2, &[1.]).unwrap_err();
    assert!(matches!(err, SparseFormatError::InvalidDimension(_)));

    // an empty dimension is not an overflow
    let E = CscMatrix::<f64>::from_dense(usize::MAX, 0, &[]).unwrap();
    assert_eq!(E.size(), (usize::MAX, 0));
}

#[test]
fn test_csc_literal_rows() {
    let A = CscMatrix::from(&[
        [1., 0., 2.], //
        [0., 3., 0.], //
    ]);
    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.colptr, vec![0, 1, 2, 3]);
    assert_eq!(A.rowval, vec![0, 1, 0]);
    assert_eq!(A.nzval, vec![1., 3., 2.]);
}

#[test]
fn test_csc_triplets() {
    // [4 . .]
    // [. . 1]
    // with (0,0) supplied as 1 + 3
    let A = CscMatrix::from_triplets(2, 3, &[(1, 2, 1.), (0, 0, 1.), (0, 0, 3.)]).unwrap();
    assert!(A.check_format().is_ok());
    assert_eq!(A.colptr, vec![0, 1, 1, 2]);
    assert_eq!(A.rowval, vec![0, 1]);
    assert_eq!(A.nzval, vec![4., 1.]);

    // cancelling duplicates remain as a stored zero
    let B = CscMatrix::from_triplets(1, 1, &[(0, 0, 1.), (0, 0, -1.)]).unwrap();
    assert_eq!(B.nnz(), 1);
    assert_eq!(B.nzval, vec![0.]);

    let E = CscMatrix::<f64>::from_triplets(2, 2, &[]).unwrap();
    assert_eq!(E.nnz(), 0);
}

#[test]
fn test_csc_checked_new() {
    // valid
    let A = CscMatrix::new(2, 2, vec![0, 1, 2], vec![1, 0], vec![1., 2.]);
    assert!(A.is_ok());

    // wrong colptr length
    let A = CscMatrix::new(2, 2, vec![0, 1], vec![1], vec![1.]);
    assert!(A.is_err());

    // decreasing colptr
    let A = CscMatrix::new(2, 2, vec![0, 2, 1], vec![0, 1], vec![1., 2.]);
    assert!(A.is_err());

    // row index out of range
    let A = CscMatrix::new(2, 1, vec![0, 1], vec![2], vec![1.]);
    assert!(A.is_err());

    // repeated row within a column
    let A = CscMatrix::new(2, 1, vec![0, 2], vec![1, 1], vec![1., 2.]);
    assert!(A.is_err());
}

#[test]
fn test_csc_triu_and_scale() {
    let mut A = CscMatrix::from(&[
        [1., 2.], //
        [2., 5.], //
    ]);
    A.scale(2.);
    assert_eq!(A.nzval, vec![2., 4., 4., 10.]);

    let U = A.to_triu();
    assert!(U.is_triu());
    assert_eq!(U.nnz(), 3);
    assert_eq!(U.get_entry((1, 0)), None);
    assert_eq!(U.get_entry((0, 1)), Some(4.));
}

#[test]
fn test_csc_check_tall_matrix() {
    // validation cost follows the stored entries, not the row count
    let A = CscMatrix::<f64>::zeros((usize::MAX, 1));
    assert!(A.check_format().is_ok());

    let A = CscMatrix::new(usize::MAX, 2, vec![0, 2, 3], vec![usize::MAX - 1, 5, 0], vec![1., 2., 3.]);
    assert!(A.is_ok());

    let A = CscMatrix::new(usize::MAX, 1, vec![0, 2], vec![7, 7], vec![1., 2.]);
    assert_eq!(
        A.unwrap_err(),
        SparseFormatError::DuplicateEntry { row: 7, col: 0 }
    );
}

#[test]
fn test_csc_check_unsorted_duplicates() {
    // unsorted but distinct rows are accepted
    let A = CscMatrix::new(3, 1, vec![0, 3], vec![2, 0, 1], vec![1., 2., 3.]);
    assert!(A.is_ok());

    // a repeat that is not adjacent in storage
    let A = CscMatrix::new(3, 2, vec![0, 1, 4], vec![0, 2, 0, 2], vec![1.; 4]);
    assert_eq!(
        A.unwrap_err(),
        SparseFormatError::DuplicateEntry { row: 2, col: 1 }
    );
}
