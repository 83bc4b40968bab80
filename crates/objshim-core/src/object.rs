//! The native [`Object`]: one `i32` fixed at construction, two pure methods.
//!
//! Arithmetic uses two's-complement wraparound so every `(value, b)` pair
//! has a defined result. A foreign caller working in 32-bit C integers sees
//! the same bits it would compute itself.

use tracing::info;

/// A native object handed across the FFI boundary.
///
/// Construction and destruction each emit an `info` event carrying the
/// stored value. The type is deliberately not `Clone`: every live `Object`
/// corresponds to exactly one construction trace and one destruction trace.
#[derive(Debug, PartialEq, Eq)]
pub struct Object {
    value: i32,
}

impl Object {
    /// Create an object holding `value`.
    pub fn new(value: i32) -> Self {
        info!(value, "object constructed");
        Self { value }
    }

    /// The value set at construction.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// `value * b`, wrapping on overflow.
    pub fn multiply(&self, b: i32) -> i32 {
        self.value.wrapping_mul(b)
    }

    /// `value - b`, wrapping on overflow.
    pub fn subtract(&self, b: i32) -> i32 {
        self.value.wrapping_sub(b)
    }
}

impl Drop for Object {
    fn drop(&mut self) {
        info!(value = self.value, "object destroyed");
    }
}
