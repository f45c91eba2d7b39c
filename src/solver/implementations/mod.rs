//! Solver implementations.
//!
//! Only the [default](crate::solver::implementations::default) implementation,
//! for problems in the standard conic form, is currently provided.

pub mod default;
