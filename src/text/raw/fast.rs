//! Faster variants of the scanning primitives in [`raw`](super).
//!
//! Each function here trades a stronger precondition for skipping the terminator scan: the caller
//! declares the content length, and that declaration being exact is part of the contract. A length
//! longer than the actual content walks off the buffer; these functions never verify it.

use std::ptr::{self, NonNull};

use crate::util::alloc;

/// Allocates and returns a terminated copy of the `len` bytes at `data`. The caller owns the
/// result.
///
/// # Safety
/// `data` must be valid for reads of exactly `len` bytes.
pub unsafe fn duplicate(data: *const u8, len: usize) -> NonNull<u8> {
    let dup = alloc::alloc_terminated(len);
    // SAFETY: The new allocation holds len + 1 bytes, the caller guarantees data is readable for
    // len bytes, and a fresh allocation can't overlap the source.
    unsafe {
        ptr::copy_nonoverlapping(data, dup.as_ptr(), len);
        dup.as_ptr().add(len).write(0);
    }
    dup
}

/// Returns the offset of the first occurrence of `needle` within `haystack`, or [`None`] if it
/// never occurs. An empty needle matches at offset 0.
///
/// # Safety
/// `haystack` and `needle` must be valid for reads of `haystack_len` and `needle_len` bytes
/// respectively, and both declared lengths must be exact.
pub unsafe fn section(
    haystack: *const u8,
    haystack_len: usize,
    needle: *const u8,
    needle_len: usize,
) -> Option<usize> {
    if needle_len > haystack_len {
        return None;
    }

    'windows: for start in 0..=(haystack_len - needle_len) {
        for at in 0..needle_len {
            // SAFETY: start + at < haystack_len and at < needle_len, both within the declared
            // (caller-guaranteed) bounds.
            if unsafe { haystack.add(start + at).read() != needle.add(at).read() } {
                continue 'windows;
            }
        }
        return Some(start);
    }
    None
}

/// Allocates and returns a terminated, byte-order-reversed copy of the `len` bytes at `data`. The
/// caller owns the result.
///
/// # Safety
/// `data` must be valid for reads of exactly `len` bytes.
pub unsafe fn reverse(data: *const u8, len: usize) -> NonNull<u8> {
    let rev = alloc::alloc_terminated(len);
    for at in 0..len {
        // SAFETY: Both offsets are below len, within the source (caller-guaranteed) and the new
        // allocation.
        unsafe {
            rev.as_ptr().add(at).write(data.add(len - 1 - at).read());
        }
    }
    // SAFETY: The allocation holds len + 1 bytes.
    unsafe { rev.as_ptr().add(len).write(0) };
    rev
}
