//! This crate is my attempt at writing a string type (and its supporting cast) from scratch.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience, with no expectation
//! for it to be used in production. Writing a growable, heap-owned text type by hand - terminator,
//! allocator calls and all - helps me to understand what `String` and `CStr` actually do for me, as
//! well as scratching my "I could write that" itch.
//!
//! # Method
//! Everything here is written based on my existing understanding and problem solving. I'm not
//! copying the standard library, but neither am I restricting myself from looking things up or
//! referring to existing crates, especially their APIs. [`Text`](text::Text) deliberately stores
//! its content the old-fashioned way: a single heap allocation holding the content bytes plus a
//! trailing `NUL`, with a cached length for `O(1)` queries. The [`text::raw`] module underneath it
//! is the classic family of terminated-buffer primitives, and [`text::numeric`] does textual
//! number conversions by hand.
//!
//! Growth is exact-fit on purpose: every append reallocates to precisely the combined length plus
//! the terminator. Amortized doubling would be faster, but exact-fit keeps the allocation exactly
//! as honest as the cached length, which has been handy while debugging.
//!
//! # Error Handling
//! "No result" is always an [`Option`], returned straight to the caller - a parse failure or a
//! missed search is absence, not an error. Contract violations are either checked methods returning a
//! strongly typed error ([`Result`] with small structs implementing
//! [`Error`](std::error::Error)), a documented panic (slice indexing), or an `unsafe fn` with its
//! precondition spelled out. Allocation failure is the only terminal condition and goes through
//! [`handle_alloc_error`](std::alloc::handle_alloc_error).
//!
//! # Dependencies
//! This crate uses `std` for allocator access and formatting, but not [`String`] or [`Vec`] - the
//! whole point is to manage the buffer myself. The [`os`] module relies on `libc` for its thin
//! wrappers around process and environment queries, and derive macros handle some very repetitive
//! error boilerplate.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "os")]
pub mod os;
#[cfg(feature = "text")]
pub mod text;

pub(crate) mod util;
