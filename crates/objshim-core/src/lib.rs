//! Core object type for the objshim FFI fixture.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! native [`Object`] that the `objshim-ffi` crate hands across the C
//! boundary, and nothing else: no handles, no pointers, no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod object;

pub use object::Object;
