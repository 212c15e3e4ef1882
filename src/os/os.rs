use std::ptr;

use libc::c_int;

use crate::text::{Text, raw};

/// How many bytes [`exec`] reads from the pipe per call.
const CHUNK_SIZE: usize = 64;

/// Returns the number of processors currently online, falling back to 1 if the system won't say.
pub fn core_count() -> usize {
    // SAFETY: sysconf performs no memory access through its argument.
    match unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) } {
        count if count < 1 => 1,
        count => count as usize,
    }
}

/// Returns the total physical memory in bytes, or 0 if the system won't say.
pub fn total_ram() -> u64 {
    // SAFETY: sysconf performs no memory access through its argument.
    let (pages, page_size) = unsafe {
        (
            libc::sysconf(libc::_SC_PHYS_PAGES),
            libc::sysconf(libc::_SC_PAGE_SIZE),
        )
    };

    if pages < 0 || page_size < 0 {
        0
    } else {
        pages as u64 * page_size as u64
    }
}

/// Returns true if a command processor is available to [`exec`] and [`command_exists`].
pub fn has_shell() -> bool {
    // SAFETY: A null command makes system report shell availability without running anything.
    unsafe { libc::system(ptr::null()) != 0 }
}

/// Returns true if `name` resolves to a runnable command, by asking `which` and discarding its
/// output.
pub fn command_exists(name: &Text) -> bool {
    let Ok(probe) =
        Text::from("which {0} > /dev/null 2>&1").format_positional(&[name.clone()])
    else {
        return false;
    };

    // SAFETY: probe's pointer is terminated per Text's invariant.
    unsafe { libc::system(probe.as_ptr().cast()) == 0 }
}

/// Runs `command` through the shell and returns its captured standard output, or [`None`] when
/// the pipe can't be opened. Blocks until the command finishes.
pub fn exec(command: &Text) -> Option<Text> {
    // SAFETY: Both pointers are terminated - command per Text's invariant, the mode literally.
    let pipe = unsafe { libc::popen(command.as_ptr().cast(), c"r".as_ptr()) };
    if pipe.is_null() {
        return None;
    }

    let mut captured = Text::new();
    let mut chunk = [0_u8; CHUNK_SIZE];
    // SAFETY: fgets writes at most CHUNK_SIZE bytes into chunk, terminator included.
    while !unsafe { libc::fgets(chunk.as_mut_ptr().cast(), CHUNK_SIZE as c_int, pipe) }.is_null() {
        // SAFETY: fgets terminated the chunk it just filled.
        let read = unsafe { raw::length(chunk.as_ptr()) };
        captured.append(&chunk[..read]);
    }

    // SAFETY: pipe came from popen above and hasn't been closed.
    unsafe { libc::pclose(pipe) };
    Some(captured)
}

/// Returns the current working directory, or [`None`] when it can't be read.
pub fn current_dir() -> Option<Text> {
    let mut path = [0_u8; 1024];
    // SAFETY: path is writable for its whole declared size.
    if unsafe { libc::getcwd(path.as_mut_ptr().cast(), path.len()) }.is_null() {
        None
    } else {
        // getcwd terminated the buffer; Text::from stops at that terminator.
        Some(Text::from(path.as_slice()))
    }
}
