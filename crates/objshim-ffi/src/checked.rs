//! Checked handle surface: `objshim_create`, `objshim_destroy`, and the
//! method wrappers over generation-tagged `u64` handles.
//!
//! Objects live in one process-wide [`SlotTable`] behind a mutex that is
//! held only for the lookup itself. Stale, destroyed and never-issued
//! handles all report `InvalidHandle`; no call on this surface can reach
//! undefined behavior through a bad handle.

use std::sync::Mutex;

use objshim_core::Object;
use tracing::{debug, warn};

use crate::handle::SlotTable;
use crate::status::ShimStatus;

static OBJECTS: Mutex<SlotTable<Object>> = Mutex::new(SlotTable::new());

/// Create an object holding `value`. Writes its handle to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn objshim_create(value: i32, out: *mut u64) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return ShimStatus::InvalidArgument as i32;
        }
        let obj = Object::new(value);
        let handle = ffi_lock!(OBJECTS).insert(obj);
        debug!(handle, value, "checked handle issued");
        // SAFETY: out is non-null and valid for writes per caller contract.
        unsafe { *out = handle };
        ShimStatus::Ok as i32
    })
}

/// Destroy the object behind `handle`.
///
/// Destroying the same handle twice returns `InvalidHandle` the second time.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn objshim_destroy(handle: u64) -> i32 {
    ffi_guard!({
        let removed = ffi_lock!(OBJECTS).remove(handle);
        match removed {
            Some(obj) => {
                debug!(handle, value = obj.value(), "checked handle released");
                drop(obj);
                ShimStatus::Ok as i32
            }
            None => {
                warn!(handle, "destroy on stale or unknown handle");
                ShimStatus::InvalidHandle as i32
            }
        }
    })
}

/// Run `f` on the object behind `handle` and store the result in `out`.
///
/// `out` is left untouched on any error.
#[allow(unsafe_code)]
fn with_object(handle: u64, out: *mut i32, f: impl FnOnce(&Object) -> i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return ShimStatus::InvalidArgument as i32;
        }
        let result = {
            let table = ffi_lock!(OBJECTS);
            table.get(handle).map(f)
        };
        match result {
            Some(v) => {
                // SAFETY: out is non-null and valid for writes per caller contract.
                unsafe { *out = v };
                ShimStatus::Ok as i32
            }
            None => {
                warn!(handle, "call on stale or unknown handle");
                ShimStatus::InvalidHandle as i32
            }
        }
    })
}

/// `value * b` for the object behind `handle`, wrapping on overflow.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn objshim_multiply(handle: u64, b: i32, out: *mut i32) -> i32 {
    with_object(handle, out, |obj| obj.multiply(b))
}

/// `value - b` for the object behind `handle`, wrapping on overflow.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn objshim_subtract(handle: u64, b: i32, out: *mut i32) -> i32 {
    with_object(handle, out, |obj| obj.subtract(b))
}

/// Read the value the object behind `handle` was created with.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn objshim_value(handle: u64, out: *mut i32) -> i32 {
    with_object(handle, out, Object::value)
}

/// Number of live objects on the checked surface.
///
/// Returns 0 if the object table is poisoned.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn objshim_live_count() -> u64 {
    ffi_guard_or!(0, {
        match OBJECTS.lock() {
            Ok(table) => table.len() as u64,
            Err(_) => 0,
        }
    })
}
