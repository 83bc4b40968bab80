//! ShimStatus -> Python exception mapping with recovery hints.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::PyResult;

use objshim_ffi::ShimStatus;

/// Check an FFI status code. Returns `Ok(())` on success, raises a typed
/// Python exception with a recovery hint on error.
pub(crate) fn check_status(code: i32) -> PyResult<()> {
    if code == ShimStatus::Ok as i32 {
        return Ok(());
    }
    let (msg, hint) = error_detail(code);
    let full = format!("objshim error {code}: {msg}\n  Hint: {hint}");
    match ShimStatus::from_code(code) {
        Some(ShimStatus::InvalidArgument) => Err(PyValueError::new_err(full)),
        _ => Err(PyRuntimeError::new_err(full)),
    }
}

/// Returns `(message, recovery_hint)` for each FFI status code.
fn error_detail(code: i32) -> (String, &'static str) {
    let Some(status) = ShimStatus::from_code(code) else {
        return (
            "unknown objshim error".to_string(),
            "An unrecognized status code came back from the native library. \
             This may indicate a version mismatch between the Python \
             bindings and the shared object.",
        );
    };
    let hint = match status {
        ShimStatus::Ok => "No action needed.",
        ShimStatus::InvalidHandle => {
            "The Object has been destroyed. Don't call .destroy() and then \
             keep using it. Inside a `with` block, the object is only valid \
             until the block exits."
        }
        ShimStatus::InvalidArgument => {
            "An argument was out of range. init_logging() accepts \
             'pretty', 'compact' or 'json'."
        }
        ShimStatus::InternalError => {
            "A previous call panicked and poisoned the object table. \
             Restart the process."
        }
        ShimStatus::LoggingAlreadyInitialized => {
            "A global log subscriber is already installed. Call \
             init_logging() at most once per process."
        }
        ShimStatus::Panicked => {
            "The native library panicked. This is a bug; please report it \
             with the input that triggered it."
        }
    };
    (status.to_string(), hint)
}
