//! Python bindings for the objshim test object.
//!
//! This crate wraps the checked C surface of `objshim-ffi` with PyO3. The
//! native extension is named `_objshim`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use pyo3::prelude::*;

mod error;
mod logging;
mod object;

/// The native `_objshim` extension module.
#[pymodule]
fn _objshim(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<object::Object>()?;
    m.add_function(wrap_pyfunction!(logging::init_logging, m)?)?;
    m.add_function(wrap_pyfunction!(object::live_count, m)?)?;
    Ok(())
}
