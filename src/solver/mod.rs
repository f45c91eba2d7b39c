//! Clarabel_c solver main module.
//!
//! This module contains the main types for building and solving conic
//! programs: cone specifications, settings, and the
//! [`DefaultSolver`](crate::solver::DefaultSolver) lifecycle manager.
//!
//! The numerical work is delegated to an engine implementing
//! [`ConicEngine`](crate::solver::ConicEngine).   The default engine is the
//! `clarabel` interior point solver, and a custom engine can be supplied
//! through [`DefaultSolver::with_engine`](crate::solver::DefaultSolver::with_engine).

// internal module structure
pub(crate) mod core;
pub mod implementations;

//Here we expose only part of the solver internals
//and rearrange public modules a bit to give a more
//user friendly API

//allows declaration of cone constraints
pub use crate::solver::core::cones::{
    make_cone_ranges, total_numel, ConeError, SupportedConeT, SupportedConeT::*,
    SupportedConeTag,
};

//user facing status, state and error types
pub use crate::solver::core::{SettingsError, SolverError, SolverState, SolverStatus};

//C-compatible counterparts of the solver types
pub use crate::solver::implementations::default::ffi;

//Since we only have the default implementation,
//it is exposed at the top level as well

pub use crate::solver::implementations::default;
pub use crate::solver::implementations::default::*;
