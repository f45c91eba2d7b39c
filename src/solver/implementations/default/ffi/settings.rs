use crate::algebra::*;
use crate::solver::core::{ffi::*, SettingsError};
use crate::solver::DefaultSettings;

/// C layout of [`DefaultSettings`].
///
/// String options cross the interface as `u32` method numbers (see
/// [`DirectSolveMethodsFFI`]), since a C caller may store any value in
/// an enum field.  Converting into [`DefaultSettings`] is fallible for
/// that reason.
#[allow(missing_docs)]
#[derive(Debug, Clone)]
#[repr(C)]
pub struct DefaultSettingsFFI<T: FloatT> {
    pub max_iter: u32,
    pub time_limit: f64,
    pub verbose: bool,
    pub max_step_fraction: T,

    pub tol_gap_abs: T,
    pub tol_gap_rel: T,
    pub tol_feas: T,
    pub tol_infeas_abs: T,
    pub tol_infeas_rel: T,
    pub tol_ktratio: T,

    pub reduced_tol_gap_abs: T,
    pub reduced_tol_gap_rel: T,
    pub reduced_tol_feas: T,
    pub reduced_tol_infeas_abs: T,
    pub reduced_tol_infeas_rel: T,
    pub reduced_tol_ktratio: T,

    pub equilibrate_enable: bool,
    pub equilibrate_max_iter: u32,
    pub equilibrate_min_scaling: T,
    pub equilibrate_max_scaling: T,

    pub linesearch_backtrack_step: T,
    pub min_switch_step_length: T,
    pub min_terminate_step_length: T,

    pub max_threads: u32,
    pub direct_kkt_solver: bool,
    /// a [`DirectSolveMethodsFFI`] number
    pub direct_solve_method: u32,

    pub static_regularization_enable: bool,
    pub static_regularization_constant: T,
    pub static_regularization_proportional: T,

    pub dynamic_regularization_enable: bool,
    pub dynamic_regularization_eps: T,
    pub dynamic_regularization_delta: T,

    pub iterative_refinement_enable: bool,
    pub iterative_refinement_reltol: T,
    pub iterative_refinement_abstol: T,
    pub iterative_refinement_max_iter: u32,
    pub iterative_refinement_stop_ratio: T,

    pub presolve_enable: bool,
    pub input_sparse_dropzeros: bool,

    #[cfg(feature = "sdp")]
    pub chordal_decomposition_enable: bool,
    /// a [`CliqueMergeMethodsFFI`] number
    #[cfg(feature = "sdp")]
    pub chordal_decomposition_merge_method: u32,
    #[cfg(feature = "sdp")]
    pub chordal_decomposition_compact: bool,
    #[cfg(feature = "sdp")]
    pub chordal_decomposition_complete_dual: bool,
}

// Builds `$Target { .. }` from `$src`, copying every field whose type is
// the same on both sides.  The method fields and anything else the
// target needs are passed in `$rest`.
macro_rules! mirror_settings {
    ($src:ident => $Target:ident { $($rest:tt)* }) => {
        $Target {
            max_iter: $src.max_iter,
            time_limit: $src.time_limit,
            verbose: $src.verbose,
            max_step_fraction: $src.max_step_fraction,
            tol_gap_abs: $src.tol_gap_abs,
            tol_gap_rel: $src.tol_gap_rel,
            tol_feas: $src.tol_feas,
            tol_infeas_abs: $src.tol_infeas_abs,
            tol_infeas_rel: $src.tol_infeas_rel,
            tol_ktratio: $src.tol_ktratio,
            reduced_tol_gap_abs: $src.reduced_tol_gap_abs,
            reduced_tol_gap_rel: $src.reduced_tol_gap_rel,
            reduced_tol_feas: $src.reduced_tol_feas,
            reduced_tol_infeas_abs: $src.reduced_tol_infeas_abs,
            reduced_tol_infeas_rel: $src.reduced_tol_infeas_rel,
            reduced_tol_ktratio: $src.reduced_tol_ktratio,
            equilibrate_enable: $src.equilibrate_enable,
            equilibrate_max_iter: $src.equilibrate_max_iter,
            equilibrate_min_scaling: $src.equilibrate_min_scaling,
            equilibrate_max_scaling: $src.equilibrate_max_scaling,
            linesearch_backtrack_step: $src.linesearch_backtrack_step,
            min_switch_step_length: $src.min_switch_step_length,
            min_terminate_step_length: $src.min_terminate_step_length,
            max_threads: $src.max_threads,
            direct_kkt_solver: $src.direct_kkt_solver,
            static_regularization_enable: $src.static_regularization_enable,
            static_regularization_constant: $src.static_regularization_constant,
            static_regularization_proportional: $src.static_regularization_proportional,
            dynamic_regularization_enable: $src.dynamic_regularization_enable,
            dynamic_regularization_eps: $src.dynamic_regularization_eps,
            dynamic_regularization_delta: $src.dynamic_regularization_delta,
            iterative_refinement_enable: $src.iterative_refinement_enable,
            iterative_refinement_reltol: $src.iterative_refinement_reltol,
            iterative_refinement_abstol: $src.iterative_refinement_abstol,
            iterative_refinement_max_iter: $src.iterative_refinement_max_iter,
            iterative_refinement_stop_ratio: $src.iterative_refinement_stop_ratio,
            presolve_enable: $src.presolve_enable,
            input_sparse_dropzeros: $src.input_sparse_dropzeros,
            #[cfg(feature = "sdp")]
            chordal_decomposition_enable: $src.chordal_decomposition_enable,
            #[cfg(feature = "sdp")]
            chordal_decomposition_compact: $src.chordal_decomposition_compact,
            #[cfg(feature = "sdp")]
            chordal_decomposition_complete_dual: $src.chordal_decomposition_complete_dual,
            $($rest)*
        }
    };
}

// method names without a number (e.g. set through a struct literal)
// become u32::MAX, which decodes back to an error
const UNKNOWN_METHOD: u32 = u32::MAX;

impl<T: FloatT> From<&DefaultSettings<T>> for DefaultSettingsFFI<T> {
    fn from(s: &DefaultSettings<T>) -> Self {
        mirror_settings!(s => DefaultSettingsFFI {
            direct_solve_method: DirectSolveMethodsFFI::from_name(&s.direct_solve_method)
                .map_or(UNKNOWN_METHOD, |m| m as u32),
            #[cfg(feature = "sdp")]
            chordal_decomposition_merge_method: CliqueMergeMethodsFFI::from_name(
                &s.chordal_decomposition_merge_method,
            )
            .map_or(UNKNOWN_METHOD, |m| m as u32),
        })
    }
}

impl<T: FloatT> TryFrom<&DefaultSettingsFFI<T>> for DefaultSettings<T> {
    type Error = SettingsError;

    /// Decodes the method numbers.  Field ranges are not checked here;
    /// see [`validate_settings`](crate::solver::validate_settings).
    fn try_from(s: &DefaultSettingsFFI<T>) -> Result<Self, Self::Error> {
        let direct_solve_method = DirectSolveMethodsFFI::try_from(s.direct_solve_method)?;
        #[cfg(feature = "sdp")]
        let merge_method = CliqueMergeMethodsFFI::try_from(s.chordal_decomposition_merge_method)?;

        Ok(mirror_settings!(s => DefaultSettings {
            direct_solve_method: direct_solve_method.name().to_string(),
            #[cfg(feature = "sdp")]
            chordal_decomposition_merge_method: merge_method.name().to_string(),
            ..DefaultSettings::default()
        }))
    }
}

impl<T: FloatT> Default for DefaultSettingsFFI<T> {
    fn default() -> Self {
        (&DefaultSettings::<T>::default()).into()
    }
}
