use super::{drop_ptr, guard, to_ptr};
use crate::solver::{ffi::DefaultSettingsFFI, validate_settings, DefaultSettings, SettingsError};
use std::ptr;

/// Settings with all fields at their default values
#[no_mangle]
pub extern "C" fn DefaultSettings_default() -> *mut DefaultSettings<f64> {
    to_ptr(DefaultSettings::default())
}

fn settings_from_fields(fields: &DefaultSettingsFFI<f64>) -> Result<DefaultSettings<f64>, SettingsError> {
    let settings = DefaultSettings::try_from(fields)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Settings copied from a C struct.  Null if `settings` is null, if a
/// method field holds a number that names no method, or if any field
/// fails validation.
#[no_mangle]
pub unsafe extern "C" fn DefaultSettings_new(
    settings: *const DefaultSettingsFFI<f64>,
) -> *mut DefaultSettings<f64> {
    let fields = match settings.as_ref() {
        Some(fields) => fields,
        None => return ptr::null_mut(),
    };
    match guard(|| settings_from_fields(fields)) {
        Some(Ok(settings)) => to_ptr(settings),
        Some(Err(e)) => {
            log::warn!("rejected settings: {}", e);
            ptr::null_mut()
        }
        None => ptr::null_mut(),
    }
}

/// Copy of the fields of a settings object.  A null handle
/// yields the defaults.
#[no_mangle]
pub unsafe extern "C" fn DefaultSettings_get(
    settings: *const DefaultSettings<f64>,
) -> DefaultSettingsFFI<f64> {
    match settings.as_ref() {
        Some(settings) => DefaultSettingsFFI::from(settings),
        None => DefaultSettingsFFI::default(),
    }
}

/// C struct holding the default settings, as a starting point
/// for [`DefaultSettings_new`]
#[no_mangle]
pub extern "C" fn DefaultSettingsFFI_default() -> DefaultSettingsFFI<f64> {
    DefaultSettingsFFI::default()
}

#[no_mangle]
pub unsafe extern "C" fn DefaultSettings_delete(settings: *mut DefaultSettings<f64>) {
    drop_ptr(settings);
}

#[test]
fn test_settings_ffi_roundtrip() {
    unsafe {
        let mut fields = DefaultSettingsFFI_default();
        fields.max_iter = 50;
        fields.verbose = false;
        let settings = DefaultSettings_new(&fields);
        assert!(!settings.is_null());
        assert_eq!(DefaultSettings_get(settings).max_iter, 50);
        assert!(!(*settings).verbose);
        DefaultSettings_delete(settings);

        fields.tol_gap_abs = -1.0;
        assert!(DefaultSettings_new(&fields).is_null());
        assert!(DefaultSettings_new(ptr::null()).is_null());
    }
}

#[test]
fn test_settings_ffi_method_numbers() {
    use crate::solver::ffi::DirectSolveMethodsFFI;

    unsafe {
        // a number outside the declared methods
        let mut fields = DefaultSettingsFFI_default();
        fields.direct_solve_method = 99;
        assert!(DefaultSettings_new(&fields).is_null());

        // a declared method that may not be compiled in
        fields.direct_solve_method = DirectSolveMethodsFFI::FAER as u32;
        let settings = DefaultSettings_new(&fields);
        assert_eq!(settings.is_null(), !cfg!(feature = "faer-sparse"));
        DefaultSettings_delete(settings);

        fields.direct_solve_method = DirectSolveMethodsFFI::QDLDL as u32;
        let settings = DefaultSettings_new(&fields);
        assert!(!settings.is_null());
        assert_eq!((*settings).direct_solve_method, "qdldl");
        assert_eq!(
            DefaultSettings_get(settings).direct_solve_method,
            DirectSolveMethodsFFI::QDLDL as u32
        );
        DefaultSettings_delete(settings);
    }
}
