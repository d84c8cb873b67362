//! Helpers that live in a different source file from the tests using them.

use callsite::{SourceLocation, traced};

/// Runs `f` with this file's call site recorded as the outermost frame.
#[allow(dead_code)]
pub fn from_other_file<R>(f: impl FnOnce() -> R) -> R {
    traced!(f())
}

/// Resolves a call site from inside this file.
#[allow(dead_code)]
pub fn resolve_here(skip: usize) -> SourceLocation {
    callsite::resolve_call_site(skip)
}
