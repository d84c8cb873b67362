use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::panic::{self, AssertUnwindSafe};

use callsite::resolve_call_site;

use crate::sink::{self, CaptureSink, Sink};
use crate::{Level, LogError, LogOptions, Parts};

/// Logger that stamps each line with a component label, level and call site.
///
/// Lines read `component: LEVEL: file:line: message`. The call site is the
/// code that called the logger; logging methods are `#[track_caller]`, so
/// wrappers that are `#[track_caller]` themselves forward their caller, and
/// [`LogOptions::skip_frames`] walks further out through recorded frames.
///
/// # Examples
///
/// ```
/// use logging::{CaptureSink, Logger};
///
/// let capture = CaptureSink::new();
/// let mut logger = Logger::with_sink("sync", capture.clone());
///
/// logger.warning("disk nearly full")?;
///
/// let lines = capture.lines();
/// assert!(lines[0].starts_with("sync: WARNING: "));
/// assert!(lines[0].ends_with(": disk nearly full"));
/// # Ok::<(), logging::LogError>(())
/// ```
pub struct Logger {
    component: String,
    pub(crate) verbosity: Option<u8>,
    pub(crate) debug_tags: BTreeSet<String>,
    sink: Box<dyn Sink>,
}

impl Logger {
    /// Creates a logger writing to standard error.
    ///
    /// Verbosity starts unconfigured; verbosity-gated calls fail until
    /// [`set_verbose`](Self::set_verbose) or
    /// [`set_from_args`](Self::set_from_args) runs.
    #[must_use]
    pub fn new(component: impl Into<String>) -> Self {
        Self::with_sink(component, sink::stderr())
    }

    /// Creates a logger writing to `sink`.
    #[must_use]
    pub fn with_sink(component: impl Into<String>, sink: impl Sink + 'static) -> Self {
        Self {
            component: component.into(),
            verbosity: None,
            debug_tags: BTreeSet::new(),
            sink: Box::new(sink),
        }
    }

    /// Sets the verbosity level while building the logger.
    #[must_use]
    pub fn with_verbose(mut self, level: u8) -> Self {
        self.verbosity = Some(level);
        self
    }

    /// Returns the component label.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Replaces the component label.
    pub fn set_component(&mut self, component: impl Into<String>) {
        self.component = component.into();
    }

    /// Installs `sink`, returning the sink it replaces.
    ///
    /// Pass the returned sink to [`replace_sink`](Self::replace_sink) to
    /// restore it.
    #[must_use = "the previous sink is dropped unless it is restored"]
    pub fn set_sink(&mut self, sink: impl Sink + 'static) -> Box<dyn Sink> {
        self.replace_sink(Box::new(sink))
    }

    /// Installs an already boxed sink, returning the sink it replaces.
    #[must_use = "the previous sink is dropped unless it is restored"]
    pub fn replace_sink(&mut self, sink: Box<dyn Sink>) -> Box<dyn Sink> {
        std::mem::replace(&mut self.sink, sink)
    }

    /// Mutably borrows the current sink.
    pub fn sink_mut(&mut self) -> &mut dyn Sink {
        self.sink.as_mut()
    }

    /// Runs `f` with output captured, then restores the previous sink.
    ///
    /// The previous sink is restored before a panic in `f` resumes unwinding.
    ///
    /// Returns the closure's result together with the captured lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Logger;
    ///
    /// let mut logger = Logger::new("demo");
    /// let (result, lines) = logger.capture(|logger| logger.info("quiet"));
    ///
    /// assert!(result.is_ok());
    /// assert_eq!(lines.len(), 1);
    /// assert!(lines[0].ends_with(": quiet"));
    /// ```
    pub fn capture<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> (R, Vec<String>) {
        let capture = CaptureSink::new();
        let previous = self.set_sink(capture.clone());
        let result = panic::catch_unwind(AssertUnwindSafe(|| f(&mut *self)));
        let _ = self.replace_sink(previous);
        match result {
            Ok(result) => (result, capture.take()),
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    /// Flushes and finishes the current sink.
    pub fn end(&mut self) -> io::Result<()> {
        self.sink.end()
    }

    /// Formats a line without writing it.
    #[track_caller]
    #[must_use]
    pub fn format_line(
        &self,
        level: Level,
        parts: impl Into<Parts>,
        options: &LogOptions,
    ) -> String {
        let location = resolve_call_site(options.skip_frames);
        format!(
            "{}: {}: {}: {}",
            self.component,
            level.label(),
            location,
            parts.into().render()
        )
    }

    /// Emits a line at `level` according to `options`.
    ///
    /// Returns the line when [`LogOptions::into_string`] is set and writes it
    /// to the sink otherwise.
    #[track_caller]
    pub fn log_with(
        &mut self,
        level: Level,
        parts: impl Into<Parts>,
        options: &LogOptions,
    ) -> Result<Option<String>, LogError> {
        let line = self.format_line(level, parts, options);
        if options.into_string {
            return Ok(Some(line));
        }

        self.sink.write_at(level, &line)?;
        Ok(None)
    }

    /// Emits an error line.
    #[track_caller]
    pub fn error(&mut self, parts: impl Into<Parts>) -> Result<(), LogError> {
        self.log_with(Level::Error, parts, &LogOptions::new()).map(drop)
    }

    /// Emits a warning line.
    #[track_caller]
    pub fn warning(&mut self, parts: impl Into<Parts>) -> Result<(), LogError> {
        self.log_with(Level::Warning, parts, &LogOptions::new()).map(drop)
    }

    /// Emits an informational line.
    #[track_caller]
    pub fn info(&mut self, parts: impl Into<Parts>) -> Result<(), LogError> {
        self.log_with(Level::Info, parts, &LogOptions::new()).map(drop)
    }

    /// Emits a debug line regardless of enabled tags.
    ///
    /// Use [`if_debug`](Self::if_debug) for tag-gated output.
    #[track_caller]
    pub fn debug(&mut self, parts: impl Into<Parts>) -> Result<(), LogError> {
        self.log_with(Level::Debug, parts, &LogOptions::new()).map(drop)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("component", &self.component)
            .field("verbosity", &self.verbosity)
            .field("debug_tags", &self.debug_tags)
            .finish_non_exhaustive()
    }
}
