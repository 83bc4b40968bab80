//! Benchmark fixtures for the objshim FFI surfaces.
//!
//! - [`RawFixture`]: one object on the unchecked pointer surface
//! - [`CheckedFixture`]: one object on the generation-checked surface
//!
//! Both destroy their object on drop so benchmark loops never leak.

#![deny(rustdoc::broken_intra_doc_links)]

use std::ffi::c_void;

use objshim_ffi::{construct, destruct, objshim_create, objshim_destroy, ShimStatus};

/// Owns a raw `construct` handle for the duration of a benchmark.
pub struct RawFixture {
    handle: *mut c_void,
}

impl RawFixture {
    /// Construct an object holding `value` on the raw surface.
    pub fn new(value: i32) -> Self {
        Self {
            handle: construct(value),
        }
    }

    /// The live raw handle. Valid until `self` is dropped.
    pub fn handle(&self) -> *mut c_void {
        self.handle
    }
}

impl Drop for RawFixture {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: handle came from `construct` and is released only here.
        unsafe { destruct(self.handle) };
    }
}

/// Owns a checked handle for the duration of a benchmark.
pub struct CheckedFixture {
    handle: u64,
}

impl CheckedFixture {
    /// Returns `None` if the checked surface refuses to create the object.
    pub fn new(value: i32) -> Option<Self> {
        let mut handle = 0u64;
        (objshim_create(value, &mut handle) == ShimStatus::Ok as i32).then(|| Self { handle })
    }

    /// The live checked handle. Valid until `self` is dropped.
    pub fn handle(&self) -> u64 {
        self.handle
    }
}

impl Drop for CheckedFixture {
    fn drop(&mut self) {
        objshim_destroy(self.handle);
    }
}
