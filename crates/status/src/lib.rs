#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `status` accumulates the outcome of an operation as a value instead of an
//! early return: info, warnings and errors are recorded as they happen, each
//! stamped with the source location that recorded it, next to an optional
//! payload and caller-chosen extra fields. Independent subsystems report into
//! their own [`Status`] and the results are folded together with
//! [`Status::merge`].
//!
//! # Design
//!
//! Entries are [`StampedEntry`] values rendered as `file:line: message`,
//! where the location comes from [`callsite::resolve_call_site`]. Recording
//! methods are `#[track_caller]`, and the `*_skipping` variants attribute an
//! entry to an outer frame recorded with [`callsite::traced!`].
//!
//! # Invariants
//!
//! - A status is ok exactly when it records no errors.
//! - [`Status::payload`] fails with [`StatusError::ErrorsUnresolved`] while
//!   errors are recorded.
//! - The last error is empty exactly when no errors are recorded.
//! - Merging copies entries; the statuses stay independent afterwards.
//!
//! # Examples
//!
//! ```
//! use status::Status;
//!
//! let mut scan = Status::new();
//! scan.add_info("threshold not met").add_info("threshold not met");
//!
//! let mut total = Status::new();
//! total.merge(&scan).dedup_info();
//!
//! assert!(total.is_ok());
//! assert!(total.info_msg().ends_with("threshold not met (x2)"));
//! ```

mod dedup;
mod entry;
mod error;
mod severity;
mod status;

pub use dedup::deduplicate;
pub use entry::StampedEntry;
pub use error::StatusError;
pub use severity::Severity;
pub use status::Status;
