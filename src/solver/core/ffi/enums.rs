#![allow(non_snake_case)]
#![allow(clippy::upper_case_acronyms)]
#![allow(non_camel_case_types)]

use crate::solver::core::{SettingsError, SolverError, SolverState, SolverStatus};

/// Direct linear solver methods, numbered as in the C header.
///
/// Settings carry this value as a plain `u32`, so any number a C caller
/// writes is decoded with [`TryFrom`] rather than trusted.  Every
/// method has a number, whether or not it is compiled in; availability
/// is checked when the settings are validated.
#[allow(missing_docs)]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectSolveMethodsFFI {
    AUTO = 0,
    QDLDL = 1,
    FAER = 2,
}

impl DirectSolveMethodsFFI {
    /// Method name as used in the settings
    pub fn name(self) -> &'static str {
        match self {
            DirectSolveMethodsFFI::AUTO => "auto",
            DirectSolveMethodsFFI::QDLDL => "qdldl",
            DirectSolveMethodsFFI::FAER => "faer",
        }
    }

    /// Inverse of [`name`](DirectSolveMethodsFFI::name)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(DirectSolveMethodsFFI::AUTO),
            "qdldl" => Some(DirectSolveMethodsFFI::QDLDL),
            "faer" => Some(DirectSolveMethodsFFI::FAER),
            _ => None,
        }
    }
}

impl TryFrom<u32> for DirectSolveMethodsFFI {
    type Error = SettingsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DirectSolveMethodsFFI::AUTO),
            1 => Ok(DirectSolveMethodsFFI::QDLDL),
            2 => Ok(DirectSolveMethodsFFI::FAER),
            _ => Err(SettingsError::BadFieldValue("direct_solve_method")),
        }
    }
}

/// Clique merging methods for chordal decomposition, numbered as in
/// the C header.  Carried as a `u32` in the settings, like
/// [`DirectSolveMethodsFFI`].
#[allow(missing_docs)]
#[cfg(feature = "sdp")]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliqueMergeMethodsFFI {
    CLIQUE_GRAPH = 0,
    PARENT_CHILD = 1,
    NONE = 2,
}

#[cfg(feature = "sdp")]
impl CliqueMergeMethodsFFI {
    /// Method name as used in the settings
    pub fn name(self) -> &'static str {
        match self {
            CliqueMergeMethodsFFI::CLIQUE_GRAPH => "clique_graph",
            CliqueMergeMethodsFFI::PARENT_CHILD => "parent_child",
            CliqueMergeMethodsFFI::NONE => "none",
        }
    }

    /// Inverse of [`name`](CliqueMergeMethodsFFI::name)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clique_graph" => Some(CliqueMergeMethodsFFI::CLIQUE_GRAPH),
            "parent_child" => Some(CliqueMergeMethodsFFI::PARENT_CHILD),
            "none" => Some(CliqueMergeMethodsFFI::NONE),
            _ => None,
        }
    }
}

#[cfg(feature = "sdp")]
impl TryFrom<u32> for CliqueMergeMethodsFFI {
    type Error = SettingsError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CliqueMergeMethodsFFI::CLIQUE_GRAPH),
            1 => Ok(CliqueMergeMethodsFFI::PARENT_CHILD),
            2 => Ok(CliqueMergeMethodsFFI::NONE),
            _ => Err(SettingsError::BadFieldValue(
                "chordal_decomposition_merge_method",
            )),
        }
    }
}

#[allow(missing_docs)]
/// FFI interface for [`SolverStatus`](crate::solver::SolverStatus)
pub type SolverStatusFFI = SolverStatus;

#[allow(missing_docs)]
/// FFI interface for [`SolverState`](crate::solver::SolverState)
pub type SolverStateFFI = SolverState;

/// Result code returned across the C interface.  Every
/// [`SolverError`] maps to exactly one non-`Ok` code.
#[allow(missing_docs)]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCodeFFI {
    Ok = 0,
    NullPointer,
    InvalidDimension,
    DimensionMismatch,
    InvalidConeParameter,
    InvalidState,
    InvalidSettings,
    UnsupportedCone,
    EngineError,
}

impl From<&SolverError> for ErrorCodeFFI {
    fn from(err: &SolverError) -> Self {
        match err {
            SolverError::InvalidDimension(_) => ErrorCodeFFI::InvalidDimension,
            SolverError::DimensionMismatch { .. } => ErrorCodeFFI::DimensionMismatch,
            SolverError::InvalidConeParameter(_) => ErrorCodeFFI::InvalidConeParameter,
            SolverError::InvalidState { .. } => ErrorCodeFFI::InvalidState,
            SolverError::Settings(_) => ErrorCodeFFI::InvalidSettings,
            SolverError::UnsupportedCone(_) => ErrorCodeFFI::UnsupportedCone,
            SolverError::Engine(_) => ErrorCodeFFI::EngineError,
        }
    }
}

#[test]
fn test_enum_ffis() {
    let method = DirectSolveMethodsFFI::from_name("qdldl").unwrap();
    assert_eq!(method, DirectSolveMethodsFFI::QDLDL);
    assert_eq!(method.name(), "qdldl");
    assert_eq!(DirectSolveMethodsFFI::from_name("mkl"), None);

    assert_eq!(
        DirectSolveMethodsFFI::try_from(DirectSolveMethodsFFI::FAER as u32),
        Ok(DirectSolveMethodsFFI::FAER)
    );
    assert_eq!(
        DirectSolveMethodsFFI::try_from(7),
        Err(SettingsError::BadFieldValue("direct_solve_method"))
    );

    let err = SolverError::mismatch("P", 2, "q", 3);
    assert_eq!(ErrorCodeFFI::from(&err), ErrorCodeFFI::DimensionMismatch);
    assert_eq!(ErrorCodeFFI::Ok as u32, 0);
}

#[cfg(feature = "sdp")]
#[test]
fn test_enum_ffis_sdps() {
    let method = CliqueMergeMethodsFFI::from_name("clique_graph").unwrap();
    assert_eq!(method.name(), "clique_graph");
    assert_eq!(CliqueMergeMethodsFFI::try_from(2), Ok(CliqueMergeMethodsFFI::NONE));
    assert!(CliqueMergeMethodsFFI::try_from(3).is_err());
}
