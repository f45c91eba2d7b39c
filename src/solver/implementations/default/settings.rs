use crate::algebra::*;
use crate::solver::core::SettingsError;

/// Settings for the [`DefaultSolver`](crate::solver::DefaultSolver).
///
/// This is the engine's own settings type, so every engine option is
/// available and no copy is made when a solver is set up.  Use
/// `DefaultSettings::default()` or the [`DefaultSettingsBuilder`] to
/// obtain a fully populated object.  The builder rejects unknown
/// string options at `build()`, and the numerical ranges are checked by
/// [`validate_settings`] when a solver is constructed.
pub use clarabel::solver::{DefaultSettings, DefaultSettingsBuilder, DefaultSettingsBuilderError};

cfg_if::cfg_if! {
    if #[cfg(feature = "faer-sparse")] {
        const DIRECT_SOLVE_METHODS: &[&str] = &["auto", "qdldl", "faer"];
    } else {
        const DIRECT_SOLVE_METHODS: &[&str] = &["auto", "qdldl"];
    }
}

#[cfg(feature = "sdp")]
const MERGE_METHODS: &[&str] = &["clique_graph", "parent_child", "none"];

/// Checks a settings object before a solver is built from it.
///
/// String options must name a method compiled into this library, and
/// tolerances, step fractions and time limits must lie in their legal
/// ranges.  NaN fails every range check.
pub fn validate_settings<T: FloatT>(settings: &DefaultSettings<T>) -> Result<(), SettingsError> {
    // indirect solvers are not available at all
    if !settings.direct_kkt_solver {
        return Err(SettingsError::BadFieldValue("direct_kkt_solver"));
    }
    if !DIRECT_SOLVE_METHODS.contains(&settings.direct_solve_method.as_str()) {
        return Err(SettingsError::BadFieldValue("direct_solve_method"));
    }

    #[cfg(feature = "sdp")]
    if !MERGE_METHODS.contains(&settings.chordal_decomposition_merge_method.as_str()) {
        return Err(SettingsError::BadFieldValue(
            "chordal_decomposition_merge_method",
        ));
    }

    if !(settings.time_limit > 0.0) {
        return Err(SettingsError::BadFieldValue("time_limit"));
    }
    let step = settings.max_step_fraction;
    if !(step > T::zero() && step <= T::one()) {
        return Err(SettingsError::BadFieldValue("max_step_fraction"));
    }

    let positive = [
        ("tol_gap_abs", settings.tol_gap_abs),
        ("tol_gap_rel", settings.tol_gap_rel),
        ("tol_feas", settings.tol_feas),
        ("tol_infeas_abs", settings.tol_infeas_abs),
        ("tol_infeas_rel", settings.tol_infeas_rel),
        ("tol_ktratio", settings.tol_ktratio),
        ("reduced_tol_gap_abs", settings.reduced_tol_gap_abs),
        ("reduced_tol_gap_rel", settings.reduced_tol_gap_rel),
        ("reduced_tol_feas", settings.reduced_tol_feas),
        ("reduced_tol_infeas_abs", settings.reduced_tol_infeas_abs),
        ("reduced_tol_infeas_rel", settings.reduced_tol_infeas_rel),
        ("reduced_tol_ktratio", settings.reduced_tol_ktratio),
        ("equilibrate_min_scaling", settings.equilibrate_min_scaling),
        ("equilibrate_max_scaling", settings.equilibrate_max_scaling),
    ];
    for (name, value) in positive {
        if !(value > T::zero()) {
            return Err(SettingsError::BadFieldValue(name));
        }
    }
    if !(settings.equilibrate_min_scaling <= settings.equilibrate_max_scaling) {
        return Err(SettingsError::BadFieldValue("equilibrate_min_scaling"));
    }

    Ok(())
}

/// Whether `method` names a direct solve method compiled into this library
pub fn is_direct_solve_method(method: &str) -> bool {
    DIRECT_SOLVE_METHODS.contains(&method)
}
