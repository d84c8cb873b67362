#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the line-oriented diagnostic logger shared across the
//! statuslog workspace. Every emitted line names the component that produced
//! it, its level and the source location of the call:
//!
//! ```text
//! sync: WARNING: planner.rs:88: 3 entries skipped
//! ```
//!
//! # Design
//!
//! [`Logger`] owns a boxed [`Sink`] that receives one formatted line per call.
//! [`WriterSink`] streams lines into any [`io::Write`](std::io::Write)
//! implementor and honours a [`LineMode`]; [`CaptureSink`] collects lines in
//! memory for tests and for [`Logger::capture`]. Message text is built from
//! [`Parts`], whose values are rendered with [`stringify`]: strings appear
//! verbatim and structured values render compactly with underscore-prefixed
//! fields hidden.
//!
//! Output can be gated in two ways:
//!
//! - verbosity levels ([`Logger::v1`], [`Logger::if_verbose`]), which fail with
//!   [`LogError::VerbosityNotConfigured`] until a level is set;
//! - debug tags ([`Logger::if_debug`]), enabled individually or all at once
//!   through the [`WILDCARD`] tag.
//!
//! [`Logger::set_from_args`] configures both from parsed command-line
//! arguments supplied through any [`ArgSource`].
//!
//! # Invariants
//!
//! - Logging methods are `#[track_caller]`: the reported location is the code
//!   that called the logger, or the outer frame selected by
//!   [`LogOptions::skip_frames`].
//! - A debug tag is announced once, the first time it becomes enabled.
//! - Replacing a sink hands the previous one back to the caller.
//!
//! # Errors
//!
//! Misconfiguration and sink failures surface as [`LogError`] at the call
//! that triggered them.
//!
//! # Examples
//!
//! ```
//! use logging::{CaptureSink, Logger, parts};
//!
//! let capture = CaptureSink::new();
//! let mut logger = Logger::with_sink("sync", capture.clone());
//! logger.set_verbose(1);
//!
//! logger.v1(parts!["copied", 3, "files"])?;
//! logger.v2("not shown")?;
//!
//! let lines = capture.lines();
//! assert_eq!(lines.len(), 1);
//! assert!(lines[0].starts_with("sync: INFO: "));
//! assert!(lines[0].ends_with(": copied 3 files"));
//! # Ok::<(), logging::LogError>(())
//! ```
//!
//! # See also
//!
//! - [`callsite`] for the frame stack consulted by skip-frame resolution.

mod args;
mod debug;
mod error;
mod gating;
mod level;
mod line_mode;
mod logger;
mod options;
mod parts;
mod sink;
mod stringify;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use args::{ArgFn, ArgSource, arg_fn};
pub use debug::{DebugSetting, WILDCARD};
pub use error::LogError;
pub use level::{Level, ParseLevelError};
pub use line_mode::LineMode;
pub use logger::Logger;
pub use options::LogOptions;
pub use parts::Parts;
#[doc(hidden)]
pub use parts::to_part as __to_part;
pub use sink::{CaptureSink, Sink, WriterSink, stderr};
pub use stringify::{PRIVATE_PREFIX, UNDEFINED, stringify, stringify_all, stringify_optional};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    TARGET, TracingSink, init_tracing, init_tracing_with_filter, tracing_level,
};
