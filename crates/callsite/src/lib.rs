#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `callsite` decides which source location owns a diagnostic. Messages are
//! attributed to the code that asked for them rather than to the logging
//! helpers they pass through.
//!
//! # Design
//!
//! The immediate caller is captured at compile time through
//! `#[track_caller]` and [`std::panic::Location`]. Wrappers marked
//! `#[track_caller]` forward their own caller, so they need no frame
//! arithmetic. Outer frames are the call sites recorded on a thread-local
//! stack by [`FrameGuard`] (via [`traced!`] or [`frame!`]); a caller that
//! wants a message attributed further out passes the number of frames to
//! skip to [`resolve_call_site`].
//!
//! # Invariants
//!
//! - [`resolve_call_site`] never fails: skip counts beyond the recorded depth
//!   clamp to the outermost frame.
//! - Dropping a [`FrameGuard`] restores the depth the stack had when the guard
//!   was created.
//! - Paths are normalised before they are stored, so the same file always
//!   compares as the same unit.
//!
//! # Examples
//!
//! ```
//! use callsite::{count_frames_in_current_unit, resolve_call_site, traced};
//!
//! fn helper() -> (usize, callsite::SourceLocation) {
//!     let same_file = count_frames_in_current_unit();
//!     (same_file, resolve_call_site(same_file))
//! }
//!
//! let (count, owner) = traced!(helper());
//! assert_eq!(count, 2);
//! assert!(owner.path().ends_with(".rs"));
//! ```

mod location;
mod macros;
mod stack;

pub use location::SourceLocation;
pub use stack::{
    FrameGuard, count_frames_in_current_unit, depth, frames, resolve_call_site,
};
