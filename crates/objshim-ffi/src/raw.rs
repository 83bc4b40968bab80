//! Unchecked pointer surface: `construct`, `destruct`, `multiply`, `subtract`.
//!
//! The handle is a `Box<Object>` leaked to `void*`. The caller owns it from
//! `construct` until `destruct`; nothing is tracked on this side. Passing a
//! pointer that did not come from [`construct`], or one that was already
//! passed to [`destruct`], is undefined behavior.

use std::ffi::c_void;

use objshim_core::Object;

/// Allocate an object holding `value` and return an owning opaque handle.
///
/// Never returns null; allocation failure aborts the process.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn construct(value: i32) -> *mut c_void {
    Box::into_raw(Box::new(Object::new(value))).cast()
}

/// Destroy the object behind `handle` and free its memory.
///
/// A null handle is ignored.
///
/// # Safety
///
/// `handle` must be null or a pointer returned by [`construct`] that has not
/// been destructed yet. It must not be used again after this call.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn destruct(handle: *mut c_void) {
    if handle.is_null() {
        return;
    }
    // SAFETY: non-null handle came from Box::into_raw in `construct` and is
    // released exactly once per caller contract.
    drop(unsafe { Box::from_raw(handle.cast::<Object>()) });
}

/// `value * b` for the object behind `handle`, wrapping on overflow.
///
/// # Safety
///
/// `handle` must be a live pointer returned by [`construct`].
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn multiply(handle: *mut c_void, b: i32) -> i32 {
    // SAFETY: handle is live per caller contract.
    unsafe { object_ref(handle) }.multiply(b)
}

/// `value - b` for the object behind `handle`, wrapping on overflow.
///
/// # Safety
///
/// `handle` must be a live pointer returned by [`construct`].
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn subtract(handle: *mut c_void, b: i32) -> i32 {
    // SAFETY: handle is live per caller contract.
    unsafe { object_ref(handle) }.subtract(b)
}

#[allow(unsafe_code)]
unsafe fn object_ref<'a>(handle: *mut c_void) -> &'a Object {
    // SAFETY: forwarded from the exported functions' contracts.
    unsafe { &*handle.cast_const().cast::<Object>() }
}
