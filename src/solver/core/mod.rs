// package together all of the following and re-export
// in a partially flattened structure :
// : cone specifications
// : settings errors
// : solver status, lifecycle state and errors
// : ffi interfaces for C bindings

pub mod cones;
pub mod ffi;

//partially flatten top level pieces

mod settings;
mod solver;
pub use settings::*;
pub use solver::*;
