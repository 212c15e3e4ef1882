#![cfg(test)]

use std::ptr::NonNull;

use super::*;
use crate::util::alloc::dealloc_terminated;

/// Allocates a terminated buffer holding `content`, standing in for an externally owned input.
fn owned(content: &[u8]) -> NonNull<u8> {
    // SAFETY: The slice pointer is readable for its whole length.
    unsafe { fast::duplicate(content.as_ptr(), content.len()) }
}

/// Borrows a terminated buffer's content back as a comparable slice.
unsafe fn content_of<'a>(buf: NonNull<u8>) -> &'a [u8] {
    // SAFETY: The caller passes terminated buffers only.
    let len = unsafe { length(buf.as_ptr()) };
    // SAFETY: len content bytes precede the terminator, and the buffer outlives each assertion.
    unsafe { std::slice::from_raw_parts(buf.as_ptr(), len) }
}

unsafe fn release(buf: NonNull<u8>, len: usize) {
    // SAFETY: Every buffer in these tests comes from the allocating primitives with this length.
    unsafe { dealloc_terminated(buf, len) }
}

#[test]
fn test_length() {
    let buf = owned(b"hello");
    unsafe {
        assert_eq!(length(buf.as_ptr()), 5, "Content bytes before the terminator.");
        release(buf, 5);
    }

    let buf = owned(b"");
    unsafe {
        assert_eq!(length(buf.as_ptr()), 0, "An empty buffer is just a terminator.");
        release(buf, 0);
    }
}

#[test]
fn test_duplicate() {
    let buf = owned(b"duplicate me");
    unsafe {
        let dup = duplicate(buf.as_ptr());
        assert_ne!(dup, buf, "Duplication must allocate fresh storage.");
        assert_eq!(content_of(dup), b"duplicate me");
        release(dup, 12);

        let cut = duplicate_limit(buf.as_ptr(), 9);
        assert_eq!(content_of(cut), b"duplicate", "Limit truncates the copy.");
        release(cut, 9);

        let long = duplicate_limit(buf.as_ptr(), 100);
        assert_eq!(
            content_of(long),
            b"duplicate me",
            "A limit past the content length copies everything."
        );
        release(long, 12);

        release(buf, 12);
    }
}

#[test]
fn test_copy() {
    let from = owned(b"payload");
    let mut storage = [0xAA_u8; 16];
    unsafe {
        let into = copy(from.as_ptr(), storage.as_mut_ptr());
        assert_eq!(into, storage.as_mut_ptr(), "Copy returns the destination.");
        assert_eq!(length(storage.as_ptr()), 7);
        assert_eq!(&storage[..8], b"payload\0", "Terminator travels with the content.");

        let mut short = [0xAA_u8; 16];
        copy_limit(from.as_ptr(), short.as_mut_ptr(), 3);
        assert_eq!(&short[..4], b"pay\0", "Limited copy writes its own terminator.");

        release(from, 7);
    }
}

#[test]
fn test_merge_and_concat() {
    let left = owned(b"fore");
    let right = owned(b"castle");
    unsafe {
        let merged = merge(left.as_ptr(), right.as_ptr());
        assert_eq!(content_of(merged), b"forecastle");
        release(merged, 10);

        // concat appends in place; the destination already holds "fore" with spare capacity.
        let mut storage = [0_u8; 16];
        copy(left.as_ptr(), storage.as_mut_ptr());
        concat(right.as_ptr(), storage.as_mut_ptr());
        assert_eq!(&storage[..11], b"forecastle\0");

        let mut storage = [0_u8; 16];
        copy(left.as_ptr(), storage.as_mut_ptr());
        concat_limit(right.as_ptr(), storage.as_mut_ptr(), 4);
        assert_eq!(&storage[..9], b"forecast\0", "Limited concat truncates the suffix.");

        release(left, 4);
        release(right, 6);
    }
}

#[test]
fn test_compare() {
    let abc = owned(b"abc");
    let abd = owned(b"abd");
    let ab = owned(b"ab");
    unsafe {
        assert_eq!(compare(abc.as_ptr(), abc.as_ptr()), 0, "Equal content compares to zero.");
        assert!(compare(abc.as_ptr(), abd.as_ptr()) < 0);
        assert!(compare(abd.as_ptr(), abc.as_ptr()) > 0);
        assert!(
            compare(ab.as_ptr(), abc.as_ptr()) < 0,
            "A strict prefix sorts before its extension."
        );

        assert_eq!(
            compare_limit(abc.as_ptr(), abd.as_ptr(), 2),
            0,
            "Differences past the limit are invisible."
        );
        assert!(compare_limit(abc.as_ptr(), abd.as_ptr(), 3) < 0);

        release(abc, 3);
        release(abd, 3);
        release(ab, 2);
    }
}

#[test]
fn test_section() {
    let haystack = owned(b"finding a needle in a haystack");
    let needle = owned(b"needle");
    let missing = owned(b"pitchfork");
    let empty = owned(b"");
    unsafe {
        assert_eq!(section(haystack.as_ptr(), needle.as_ptr()), Some(10));
        assert_eq!(section(haystack.as_ptr(), missing.as_ptr()), None);
        assert_eq!(
            section(haystack.as_ptr(), empty.as_ptr()),
            Some(0),
            "An empty needle matches at the start by convention."
        );
        assert_eq!(
            section(needle.as_ptr(), haystack.as_ptr()),
            None,
            "A needle longer than the haystack never matches."
        );

        release(haystack, 30);
        release(needle, 6);
        release(missing, 9);
        release(empty, 0);
    }
}

#[test]
fn test_reverse() {
    let buf = owned(b"stressed");
    unsafe {
        let rev = reverse(buf.as_ptr());
        assert_eq!(content_of(rev), b"desserts");

        let back = reverse(rev.as_ptr());
        assert_eq!(content_of(back), b"stressed", "Reversal is an involution.");

        release(back, 8);
        release(rev, 8);
        release(buf, 8);
    }
}

#[test]
fn test_fast_variants() {
    let data = b"explicit length";
    unsafe {
        let dup = fast::duplicate(data.as_ptr(), 8);
        assert_eq!(content_of(dup), b"explicit", "Fast duplicate trusts the declared length.");
        release(dup, 8);

        assert_eq!(
            fast::section(data.as_ptr(), data.len(), b"length".as_ptr(), 6),
            Some(9)
        );
        assert_eq!(fast::section(data.as_ptr(), data.len(), b"width".as_ptr(), 5), None);
        assert_eq!(
            fast::section(data.as_ptr(), 0, b"".as_ptr(), 0),
            Some(0),
            "Empty-in-empty matches without any reads."
        );

        let rev = fast::reverse(data.as_ptr(), 8);
        assert_eq!(content_of(rev), b"ticilpxe");
        release(rev, 8);
    }
}
