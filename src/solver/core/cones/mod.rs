//! Cone specifications accepted by the solver.

mod supportedcone;
pub use supportedcone::*;
