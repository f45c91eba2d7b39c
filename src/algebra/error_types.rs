use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparse matrix assembly operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible,
    /// or an index exceeds the declared matrix dimensions
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    /// A row index appears more than once within a single column
    #[error("Duplicate entry at row {row}, column {col}")]
    DuplicateEntry { row: usize, col: usize },
}

impl SparseFormatError {
    pub(crate) fn dimension(msg: impl Into<String>) -> Self {
        SparseFormatError::InvalidDimension(msg.into())
    }
}
