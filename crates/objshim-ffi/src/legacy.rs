//! Symbol aliases matching the fixture's original shared-object exports.
//!
//! Binding maps written against `obj.so` name `objconstructor`,
//! `objdestructor`, `mul` and `sub`. Each alias forwards to the [`raw`]
//! function with the same signature and contract.
//!
//! [`raw`]: crate::raw

use std::ffi::c_void;

use crate::raw;

/// Alias of [`raw::construct`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn objconstructor(a: i32) -> *mut c_void {
    raw::construct(a)
}

/// Alias of [`raw::destruct`].
///
/// # Safety
///
/// Same contract as [`raw::destruct`].
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn objdestructor(ptr: *mut c_void) {
    // SAFETY: forwarded contract.
    unsafe { raw::destruct(ptr) }
}

/// Alias of [`raw::multiply`].
///
/// # Safety
///
/// Same contract as [`raw::multiply`].
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn mul(ptr: *mut c_void, b: i32) -> i32 {
    // SAFETY: forwarded contract.
    unsafe { raw::multiply(ptr, b) }
}

/// Alias of [`raw::subtract`].
///
/// # Safety
///
/// Same contract as [`raw::subtract`].
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn sub(ptr: *mut c_void, b: i32) -> i32 {
    // SAFETY: forwarded contract.
    unsafe { raw::subtract(ptr, b) }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;

    #[test]
    fn aliases_drive_the_same_object() {
        let p = objconstructor(8);
        unsafe {
            assert_eq!(mul(p, 4), 32);
            assert_eq!(sub(p, 3), 5);
            assert_eq!(raw::multiply(p, 4), 32);
            objdestructor(p);
        }
    }

    #[test]
    fn alias_destructor_frees_raw_handle() {
        let p = raw::construct(-2);
        unsafe {
            assert_eq!(sub(p, i32::MAX), i32::MAX);
            objdestructor(p);
        }
    }
}
