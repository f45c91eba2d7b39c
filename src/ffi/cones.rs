use super::{drop_ptr, to_ptr};
use crate::solver::{ConeError, SupportedConeT};
use std::ptr;

fn cone_or_null(result: Result<SupportedConeT<f64>, ConeError>) -> *mut SupportedConeT<f64> {
    match result {
        Ok(cone) => to_ptr(cone),
        Err(e) => {
            log::warn!("rejected cone: {}", e);
            ptr::null_mut()
        }
    }
}

/// Zero cone of dimension `n`.  Null if `n == 0`.
#[no_mangle]
pub extern "C" fn ZeroCone(n: usize) -> *mut SupportedConeT<f64> {
    cone_or_null(SupportedConeT::zero(n))
}

/// Nonnegative cone of dimension `n`.  Null if `n == 0`.
#[no_mangle]
pub extern "C" fn NonnegativeCone(n: usize) -> *mut SupportedConeT<f64> {
    cone_or_null(SupportedConeT::nonnegative(n))
}

/// Second order cone of dimension `n`.  Null if `n == 0`.
#[no_mangle]
pub extern "C" fn SecondOrderCone(n: usize) -> *mut SupportedConeT<f64> {
    cone_or_null(SupportedConeT::second_order(n))
}

/// Exponential cone (dimension 3)
#[no_mangle]
pub extern "C" fn ExponentialCone() -> *mut SupportedConeT<f64> {
    to_ptr(SupportedConeT::exponential())
}

/// Power cone (dimension 3) with exponent `power`.
/// Null unless `0 < power < 1`.
#[no_mangle]
pub extern "C" fn PowerCone(power: f64) -> *mut SupportedConeT<f64> {
    cone_or_null(SupportedConeT::power(power))
}

/// PSD cone over `n x n` matrices, covering `n(n+1)/2` rows.
/// Null if `n == 0` or if `n(n+1)/2` does not fit in a `size_t`.
#[no_mangle]
pub extern "C" fn PSDTriangleCone(n: usize) -> *mut SupportedConeT<f64> {
    cone_or_null(SupportedConeT::psd_triangle(n))
}

/// Number of constraint rows covered by the cone, zero for null
#[no_mangle]
pub unsafe extern "C" fn SupportedCone_numel(cone: *const SupportedConeT<f64>) -> usize {
    cone.as_ref().map_or(0, |c| c.numel())
}

#[no_mangle]
pub unsafe extern "C" fn SupportedCone_delete(cone: *mut SupportedConeT<f64>) {
    drop_ptr(cone);
}

#[test]
fn test_cone_ffi() {
    unsafe {
        let cone = PSDTriangleCone(3);
        assert_eq!(SupportedCone_numel(cone), 6);
        SupportedCone_delete(cone);

        let cone = ExponentialCone();
        assert_eq!(SupportedCone_numel(cone), 3);
        SupportedCone_delete(cone);

        assert!(NonnegativeCone(0).is_null());
        assert!(PowerCone(1.5).is_null());
        assert!(PSDTriangleCone(usize::MAX).is_null());

        let cone = NonnegativeCone(usize::MAX);
        assert_eq!(SupportedCone_numel(cone), usize::MAX);
        SupportedCone_delete(cone);
        SupportedCone_delete(ptr::null_mut());
    }
}
