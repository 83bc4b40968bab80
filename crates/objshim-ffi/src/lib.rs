//! C FFI surface for the objshim test object.
//!
//! Two surfaces are exported from the same `cdylib`:
//!
//! - [`raw`]: `construct` / `destruct` / `multiply` / `subtract` over a bare
//!   `void*`. No validation; misuse is undefined behavior. [`legacy`] adds
//!   the `objconstructor` / `objdestructor` / `mul` / `sub` aliases.
//! - [`checked`]: `objshim_*` functions over generation-tagged `u64`
//!   handles returning [`ShimStatus`] codes.
//!
//! Outside benchmarks, this is the only crate in the workspace that
//! contains `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run `$body`, converting a panic into `$default`.
///
/// `return` inside `$body` returns from the guarded closure, not from the
/// enclosing function, so early-exit status codes pass straight through.
macro_rules! ffi_guard_or {
    ($default:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(v) => v,
            Err(_) => {
                ::tracing::error!("panic caught at FFI boundary");
                $default
            }
        }
    };
}

/// Run `$body`, converting a panic into `ShimStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::ShimStatus::Panicked as i32, $body)
    };
}

/// Lock a mutex, returning `ShimStatus::InternalError` if it is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::ShimStatus::InternalError as i32,
        }
    };
}

pub mod checked;
mod handle;
pub mod legacy;
pub mod logging;
pub mod raw;
pub mod status;
pub mod types;

pub use checked::{
    objshim_create, objshim_destroy, objshim_live_count, objshim_multiply, objshim_subtract,
    objshim_value,
};
pub use legacy::{mul, objconstructor, objdestructor, sub};
pub use logging::objshim_log_init;
pub use raw::{construct, destruct, multiply, subtract};
pub use status::ShimStatus;
pub use types::ObjshimLogFormat;
