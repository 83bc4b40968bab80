//! Logging setup for hosts that want to see the lifecycle trace.
//!
//! The library only emits `tracing` events. Nothing is printed until a
//! subscriber is installed, either by the host's own Rust code or through
//! [`objshim_log_init`] / [`init`] from a foreign caller.

use tracing_subscriber::EnvFilter;

use crate::status::ShimStatus;
use crate::types::ObjshimLogFormat;

/// Environment variable holding `EnvFilter` directives, e.g.
/// `objshim_core=info,objshim_ffi=debug`.
pub const LOG_ENV: &str = "OBJSHIM_LOG";

/// Filter used when [`LOG_ENV`] is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber in the given format.
///
/// Fails with [`ShimStatus::LoggingAlreadyInitialized`] if any global
/// subscriber is already set.
pub fn init(format: ObjshimLogFormat) -> Result<(), ShimStatus> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr);
    let installed = match format {
        ObjshimLogFormat::Pretty => builder.pretty().try_init(),
        ObjshimLogFormat::Compact => builder.compact().try_init(),
        ObjshimLogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|_| ShimStatus::LoggingAlreadyInitialized)
}

/// Install the global stderr subscriber. `format` is an
/// [`ObjshimLogFormat`] tag.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn objshim_log_init(format: i32) -> i32 {
    ffi_guard!({
        let Some(format) = ObjshimLogFormat::from_raw(format) else {
            return ShimStatus::InvalidArgument as i32;
        };
        match init(format) {
            Ok(()) => ShimStatus::Ok as i32,
            Err(status) => status as i32,
        }
    })
}
