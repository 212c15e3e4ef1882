//! Allocation helpers for terminated byte buffers. Every owned buffer in this crate is sized
//! `len + 1`: `len` content bytes followed by a single `NUL`.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// A helper function to create a [`Layout`] for a terminated buffer holding `len` content bytes.
///
/// # Panics
/// Panics if `len + 1` overflows or the layout size exceeds [`isize::MAX`].
pub(crate) fn terminated_layout(len: usize) -> Layout {
    Layout::array::<u8>(len.checked_add(1).expect("Capacity overflow!"))
        .expect("Capacity overflow!")
}

/// Allocates an uninitialized terminated buffer for `len` content bytes. The layout size is always
/// at least one byte, so no dangling-pointer special case is needed here.
///
/// # Errors
/// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
/// recommended, to avoid new allocations rather than panicking.
pub(crate) fn alloc_terminated(len: usize) -> NonNull<u8> {
    let layout = terminated_layout(len);

    NonNull::new(
        // SAFETY: layout.size() >= 1, so zero-sized layouts can't occur.
        unsafe { alloc::alloc(layout) }
    ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
}

/// Releases a terminated buffer previously created for `len` content bytes.
///
/// # Safety
/// `ptr` must have been allocated in the global allocator with [`terminated_layout`]`(len)` (via
/// [`alloc_terminated`] or [`realloc_terminated`]) and must not be used afterwards.
pub(crate) unsafe fn dealloc_terminated(ptr: NonNull<u8>, len: usize) {
    // SAFETY: The caller guarantees that ptr was allocated with this exact layout.
    unsafe { alloc::dealloc(ptr.as_ptr(), terminated_layout(len)) }
}

/// Resizes a terminated buffer from `old_len` to `new_len` content bytes, moving the allocation if
/// required. Content bytes up to `min(old_len, new_len)` are preserved; the terminator is NOT
/// rewritten and remains the caller's responsibility.
///
/// # Safety
/// `ptr` must be a live global-allocator allocation made with [`terminated_layout`]`(old_len)`.
/// The returned pointer replaces `ptr`, which must not be used afterwards.
pub(crate) unsafe fn realloc_terminated(
    ptr: NonNull<u8>,
    old_len: usize,
    new_len: usize,
) -> NonNull<u8> {
    let old_layout = terminated_layout(old_len);
    // Computed before the realloc call so that an overflowing new_len panics cleanly.
    let new_layout = terminated_layout(new_len);

    NonNull::new(
        // SAFETY: The caller guarantees ptr was allocated with old_layout, and new_layout.size()
        // is nonzero and has been checked against isize::MAX.
        unsafe { alloc::realloc(ptr.as_ptr(), old_layout, new_layout.size()) }
    ).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
}
