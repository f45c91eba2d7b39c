//! C interface to the solver.
//!
//! Every resource (matrices, cones, settings and solvers) crosses the
//! boundary as an opaque pointer, created by exactly one `_new`-style
//! function and released by exactly one `_delete` function.  All `_delete`
//! functions accept null.  Inputs passed to constructors are borrowed and
//! copied, so the caller keeps ownership of everything it passes in.
//!
//! The declarations for C and C++ callers are in `include/clarabel_c.h`.
//! All functions operate on `f64` data.

#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

mod algebra;
mod cones;
mod settings;
mod solver;

pub use algebra::*;
pub use cones::*;
pub use settings::*;
pub use solver::*;

use libc::c_char;
use std::panic::{self, AssertUnwindSafe};

// functions for moving owned values to and from raw pointers

pub(crate) fn to_ptr<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

pub(crate) unsafe fn drop_ptr<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

// borrow a caller array of known length.  A null pointer is
// accepted only for an empty array.
pub(crate) unsafe fn borrow_slice<'a, T>(ptr: *const T, len: usize) -> Option<&'a [T]> {
    if len == 0 {
        Some(&[])
    } else if ptr.is_null() {
        None
    } else {
        Some(std::slice::from_raw_parts(ptr, len))
    }
}

// run `f` without letting a panic unwind into the C caller.
// A panic is logged and reported as `None`.
pub(crate) fn guard<R>(f: impl FnOnce() -> R) -> Option<R> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
                .unwrap_or("unknown cause");
            log::error!("panic stopped at the C interface: {}", msg);
            None
        }
    }
}

static VERSION_CSTR: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Version of the library as a NUL terminated string
#[no_mangle]
pub extern "C" fn clarabel_c_version() -> *const c_char {
    VERSION_CSTR.as_ptr() as *const c_char
}

#[test]
fn test_borrow_slice() {
    let data = [1.0, 2.0];
    unsafe {
        assert_eq!(borrow_slice(data.as_ptr(), 2), Some(&data[..]));
        assert_eq!(borrow_slice::<f64>(std::ptr::null(), 0), Some(&[][..]));
        assert_eq!(borrow_slice::<f64>(std::ptr::null(), 1), None);
    }
}

#[test]
fn test_guard() {
    assert_eq!(guard(|| 3), Some(3));
    assert_eq!(guard(|| -> i32 { panic!("engine failure") }), None);

    let index = 5;
    let data = vec![0.0; 2];
    assert_eq!(guard(|| data[index]), None);
}

#[test]
fn test_version_cstr() {
    let version = unsafe { std::ffi::CStr::from_ptr(clarabel_c_version()) };
    assert_eq!(version.to_str(), Ok(crate::VERSION));
}
