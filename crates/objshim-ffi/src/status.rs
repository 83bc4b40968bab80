//! C-compatible status codes for the checked surface.

use std::fmt;

/// Status code returned by every `objshim_*` function.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShimStatus {
    /// Success.
    Ok = 0,
    /// Handle is stale, was already destroyed, or was never issued.
    InvalidHandle = -1,
    /// A pointer argument is null or an enum argument is out of range.
    InvalidArgument = -2,
    /// The object table lock is poisoned after a prior panic.
    InternalError = -3,
    /// A global logging subscriber is already installed.
    LoggingAlreadyInitialized = -4,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl ShimStatus {
    /// Map a raw code back to a status, `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            -1 => Some(Self::InvalidHandle),
            -2 => Some(Self::InvalidArgument),
            -3 => Some(Self::InternalError),
            -4 => Some(Self::LoggingAlreadyInitialized),
            -128 => Some(Self::Panicked),
            _ => None,
        }
    }
}

impl fmt::Display for ShimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Ok => "ok",
            Self::InvalidHandle => "invalid handle (already destroyed?)",
            Self::InvalidArgument => "invalid argument",
            Self::InternalError => "internal error (poisoned object table)",
            Self::LoggingAlreadyInitialized => "logging already initialized",
            Self::Panicked => "panic caught at FFI boundary",
        };
        f.write_str(msg)
    }
}
