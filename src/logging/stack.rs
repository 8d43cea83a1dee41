//! Stack dumps for `warn_with_stack`
//!
//! The standard library can only walk the current thread's stack, so the dump
//! covers the calling thread.

use std::backtrace::Backtrace;
use std::thread;

/// Capture the calling thread's stack as human-readable, newline-terminated text
pub fn capture() -> String {
    let current = thread::current();
    let name = current.name().unwrap_or("<unnamed>");
    let backtrace = Backtrace::force_capture();

    let mut dump = format!("thread '{}' [running]:\n{}", name, backtrace);
    if !dump.ends_with('\n') {
        dump.push('\n');
    }
    dump
}
