//! Object: Python wrapper around a checked objshim handle.
//!
//! Mirrors the fixture's original Python usage: `Object(8)` constructs,
//! `obj.mul(4)` / `obj.sub(3)` call through, and the native object is
//! destroyed when the Python object goes away. Calls release the GIL while
//! the FFI object table is locked.

use pyo3::prelude::*;

use objshim_ffi::{
    objshim_create, objshim_destroy, objshim_live_count, objshim_multiply, objshim_subtract,
    objshim_value,
};

use crate::error::check_status;

type BinaryFn = extern "C" fn(u64, i32, *mut i32) -> i32;

/// A native object holding one 32-bit integer.
///
/// Arithmetic wraps on 32-bit overflow, exactly as the native code does.
#[pyclass(module = "_objshim")]
pub(crate) struct Object {
    handle: Option<u64>,
}

#[pymethods]
impl Object {
    /// Construct a native object holding `value` (a signed 32-bit int).
    #[new]
    fn new(py: Python<'_>, value: i32) -> PyResult<Self> {
        let (status, handle) = py.detach(|| {
            let mut h: u64 = 0;
            let s = objshim_create(value, &mut h);
            (s, h)
        });
        check_status(status)?;
        Ok(Object {
            handle: Some(handle),
        })
    }

    /// Return `value * b`, wrapping at 32 bits.
    fn mul(&self, py: Python<'_>, b: i32) -> PyResult<i32> {
        self.call(py, objshim_multiply, b)
    }

    /// Return `value - b`, wrapping at 32 bits.
    fn sub(&self, py: Python<'_>, b: i32) -> PyResult<i32> {
        self.call(py, objshim_subtract, b)
    }

    /// The value passed to the constructor.
    #[getter]
    fn value(&self, py: Python<'_>) -> PyResult<i32> {
        let h = self.require_handle()?;
        let (status, out) = py.detach(|| {
            let mut out: i32 = 0;
            let s = objshim_value(h, &mut out);
            (s, out)
        });
        check_status(status)?;
        Ok(out)
    }

    /// Whether the native object still exists.
    #[getter]
    fn alive(&self) -> bool {
        self.handle.is_some()
    }

    /// Explicitly destroy the native object. Safe to call more than once.
    fn destroy(&mut self, py: Python<'_>) -> PyResult<()> {
        match self.handle.take() {
            Some(h) => check_status(py.detach(|| objshim_destroy(h))),
            None => Ok(()),
        }
    }

    fn __enter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    #[pyo3(signature = (_exc_type=None, _exc_val=None, _exc_tb=None))]
    fn __exit__(
        &mut self,
        py: Python<'_>,
        _exc_type: Option<&Bound<'_, PyAny>>,
        _exc_val: Option<&Bound<'_, PyAny>>,
        _exc_tb: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<()> {
        self.destroy(py)
    }

    fn __repr__(&self, py: Python<'_>) -> String {
        match self.value(py) {
            Ok(v) => format!("Object({v})"),
            Err(_) => "Object(<destroyed>)".to_string(),
        }
    }
}

impl Object {
    fn require_handle(&self) -> PyResult<u64> {
        self.handle
            .ok_or_else(|| pyo3::exceptions::PyRuntimeError::new_err("Object already destroyed"))
    }

    fn call(&self, py: Python<'_>, f: BinaryFn, b: i32) -> PyResult<i32> {
        let h = self.require_handle()?;
        let (status, out) = py.detach(|| {
            let mut out: i32 = 0;
            let s = f(h, b, &mut out);
            (s, out)
        });
        check_status(status)?;
        Ok(out)
    }
}

impl Drop for Object {
    fn drop(&mut self) {
        // objshim_destroy never re-enters Python, so no GIL handling here.
        if let Some(h) = self.handle.take() {
            objshim_destroy(h);
        }
    }
}

/// Number of native objects currently alive across all `Object` instances.
#[pyfunction]
pub(crate) fn live_count(py: Python<'_>) -> u64 {
    py.detach(|| objshim_live_count())
}
