//! `init_logging()`: route the native lifecycle trace to stderr.

use pyo3::prelude::*;

use objshim_ffi::{objshim_log_init, ObjshimLogFormat, ShimStatus};

use crate::error::check_status;

/// Install the native log subscriber.
///
/// Args:
///     format: One of "pretty", "compact" or "json".
///
/// The filter is read from the `OBJSHIM_LOG` environment variable
/// (default "info"). May be called at most once per process.
#[pyfunction]
#[pyo3(signature = (format="pretty"))]
pub(crate) fn init_logging(py: Python<'_>, format: &str) -> PyResult<()> {
    let tag = match format {
        "pretty" => ObjshimLogFormat::Pretty as i32,
        "compact" => ObjshimLogFormat::Compact as i32,
        "json" => ObjshimLogFormat::Json as i32,
        _ => return check_status(ShimStatus::InvalidArgument as i32),
    };
    let status = py.detach(|| objshim_log_init(tag));
    check_status(status)
}
