//! Non-owning primitives over terminated byte buffers.
//!
//! A *terminated buffer* is a heap or stack byte sequence whose logical end is marked by a single
//! `NUL` byte rather than by a tracked length. These functions never take ownership: the caller
//! supplies every input and must release whatever [`duplicate`], [`merge`] and [`reverse`] hand
//! back (allocations sized content + 1, compatible with
//! [`Text::claim`](crate::text::Text::claim)).
//!
//! The functions here rescan for the terminator on every call. The [`fast`] submodule has the same
//! contracts but trusts a caller-declared length instead - a documented precondition in exchange
//! for skipping the scan.

mod raw;
mod tests;

pub mod fast;

pub use raw::*;
