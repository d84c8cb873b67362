//! Thread-local record of the call sites that led to the current frame.
//!
//! Frame 0 is always the immediate caller, captured through
//! `#[track_caller]`. Outer frames are the call sites pushed by
//! [`FrameGuard::enter`] (usually via [`traced!`](crate::traced) or
//! [`frame!`](crate::frame)), innermost last.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::panic::Location;

use crate::SourceLocation;

thread_local! {
    static FRAMES: RefCell<Vec<SourceLocation>> = const { RefCell::new(Vec::new()) };
}

/// RAII guard that keeps a call site on the frame stack while it is alive.
///
/// Dropping the guard truncates the stack back to the depth it had when the
/// guard was created, so a guard leaked or dropped out of order cannot leave
/// stale frames behind for the frames recorded before it.
#[must_use = "dropping the guard immediately removes the recorded frame"]
#[derive(Debug)]
pub struct FrameGuard {
    depth: usize,
    // Frames are thread-local; the guard must be dropped on the thread that created it.
    _not_send: PhantomData<*const ()>,
}

impl FrameGuard {
    /// Pushes `location` onto the current thread's frame stack.
    pub fn enter(location: SourceLocation) -> Self {
        let depth = FRAMES.with(|frames| {
            let mut frames = frames.borrow_mut();
            let depth = frames.len();
            frames.push(location);
            depth
        });

        Self {
            depth,
            _not_send: PhantomData,
        }
    }

    /// Pushes the caller's location onto the frame stack.
    #[track_caller]
    pub fn here() -> Self {
        Self::enter(SourceLocation::caller())
    }

    /// Returns the number of frames that were recorded before this guard.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        // The thread-local may already be gone during thread teardown.
        let _ = FRAMES.try_with(|frames| frames.borrow_mut().truncate(self.depth));
    }
}

/// Returns the location that owns a message, skipping `skip_frames` frames.
///
/// With `skip_frames == 0` this is the caller. Each additional frame walks one
/// recorded call site outward. Requests that would walk past the outermost
/// frame clamp to it.
///
/// # Examples
///
/// ```
/// use callsite::{resolve_call_site, traced};
///
/// #[track_caller]
/// fn owner(skip: usize) -> callsite::SourceLocation {
///     resolve_call_site(skip)
/// }
///
/// let direct = owner(0);
/// let (outer, clamped) = traced!((owner(1), owner(100)));
///
/// assert!(direct.path().ends_with(".rs"));
/// assert_eq!(outer, clamped);
/// ```
#[track_caller]
#[must_use]
pub fn resolve_call_site(skip_frames: usize) -> SourceLocation {
    let caller = Location::caller();
    if skip_frames == 0 {
        return SourceLocation::from(caller);
    }

    FRAMES.with(|frames| {
        let frames = frames.borrow();
        if frames.is_empty() {
            SourceLocation::from(caller)
        } else {
            frames[frames.len().saturating_sub(skip_frames)].clone()
        }
    })
}

/// Counts the consecutive frames, starting at the caller, recorded in the
/// caller's source file.
///
/// Helper functions use the count to work out how many frames to skip so a
/// message is attributed to the first frame outside their file. Returns 0
/// when fewer than two frames are available.
#[track_caller]
#[must_use]
pub fn count_frames_in_current_unit() -> usize {
    let caller = SourceLocation::caller();

    FRAMES.with(|frames| {
        let frames = frames.borrow();
        if frames.is_empty() {
            return 0;
        }

        1 + frames
            .iter()
            .rev()
            .take_while(|frame| frame.same_unit(&caller))
            .count()
    })
}

/// Returns the number of recorded frames on the current thread.
#[must_use]
pub fn depth() -> usize {
    FRAMES.with(|frames| frames.borrow().len())
}

/// Returns a snapshot of the recorded frames, innermost first.
#[must_use]
pub fn frames() -> Vec<SourceLocation> {
    FRAMES.with(|frames| frames.borrow().iter().rev().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_pushes_and_pops() {
        let before = depth();
        {
            let guard = FrameGuard::enter(SourceLocation::new("src/outer.rs", 1));
            assert_eq!(guard.depth(), before);
            assert_eq!(depth(), before + 1);
        }
        assert_eq!(depth(), before);
    }

    #[test]
    fn dropping_outer_guard_truncates_inner_frames() {
        let outer = FrameGuard::enter(SourceLocation::new("src/outer.rs", 1));
        let inner = FrameGuard::enter(SourceLocation::new("src/inner.rs", 2));
        drop(outer);
        assert_eq!(depth(), 0);
        drop(inner);
        assert_eq!(depth(), 0);
    }

    #[test]
    fn zero_skip_resolves_to_caller() {
        let _guard = FrameGuard::enter(SourceLocation::new("src/outer.rs", 10));
        let expected_line = line!() + 1;
        let location = resolve_call_site(0);
        assert!(location.path().ends_with("src/stack.rs"));
        assert_eq!(location.line(), expected_line);
    }

    #[test]
    fn skip_walks_outward() {
        let _outer = FrameGuard::enter(SourceLocation::new("src/outer.rs", 10));
        let _inner = FrameGuard::enter(SourceLocation::new("src/inner.rs", 20));

        assert_eq!(resolve_call_site(1), SourceLocation::new("src/inner.rs", 20));
        assert_eq!(resolve_call_site(2), SourceLocation::new("src/outer.rs", 10));
    }

    #[test]
    fn skip_past_outermost_clamps() {
        let _outer = FrameGuard::enter(SourceLocation::new("src/outer.rs", 10));
        let _inner = FrameGuard::enter(SourceLocation::new("src/inner.rs", 20));

        assert_eq!(resolve_call_site(3), SourceLocation::new("src/outer.rs", 10));
        assert_eq!(resolve_call_site(usize::MAX), SourceLocation::new("src/outer.rs", 10));
    }

    #[test]
    fn skip_without_recorded_frames_returns_caller() {
        let location = resolve_call_site(5);
        assert!(location.path().ends_with("src/stack.rs"));
    }

    #[test]
    fn count_is_zero_without_recorded_frames() {
        assert_eq!(count_frames_in_current_unit(), 0);
    }

    #[test]
    fn count_stops_at_foreign_unit() {
        let _other = FrameGuard::enter(SourceLocation::new("src/elsewhere.rs", 1));
        let _same = FrameGuard::here();
        assert_eq!(count_frames_in_current_unit(), 2);
    }

    #[test]
    fn frames_snapshot_is_innermost_first() {
        let _outer = FrameGuard::enter(SourceLocation::new("src/outer.rs", 1));
        let _inner = FrameGuard::enter(SourceLocation::new("src/inner.rs", 2));

        let snapshot = frames();
        assert_eq!(snapshot[0].path(), "src/inner.rs");
        assert_eq!(snapshot[1].path(), "src/outer.rs");
    }
}
