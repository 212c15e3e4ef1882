#![cfg(unix)]

//! Thin wrappers around process and environment queries, with [`Text`](crate::text::Text) as the
//! input/output currency.

mod os;

pub use os::*;
