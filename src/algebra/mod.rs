//! Clarabel_c algebra module.
//!
//! Sparse matrix types accepted by the solver interface.   Matrices are
//! stored in Compressed Sparse Column format, and can be built from
//! triplets, from dense data or from explicit CSC arrays.

// first import and flatten the solver's collection
// of core numeric types and matrix / vector traits.

mod csc;
mod error_types;
mod floats;
mod matrix_traits;
mod scalarmath;

pub use csc::*;
pub use error_types::*;
pub use floats::*;
pub use matrix_traits::*;
pub use scalarmath::*;
