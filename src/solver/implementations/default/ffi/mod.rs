//! C-compatible counterparts of the default solver's settings and solution

mod settings;
mod solution;
pub use crate::solver::core::ffi::*;
pub use settings::*;
pub use solution::*;
