#![allow(non_snake_case)]

mod engine;
pub mod ffi;
#[cfg(feature = "serde")]
mod json;
mod problemdata;
mod settings;
mod solution;
mod solver;

//export flattened
pub use engine::*;
#[cfg(feature = "serde")]
pub use json::*;
pub use problemdata::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
