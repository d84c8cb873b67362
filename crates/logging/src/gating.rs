//! crates/logging/src/gating.rs
//! Verbosity and debug-tag gated output.
//!
//! Verbosity must be configured before any verbosity-gated call; a logger that
//! was never told its level fails loudly instead of silently dropping output.
//! Debug tags start empty, so debug-gated calls are silent until a tag (or the
//! [`WILDCARD`]) is enabled.

use crate::debug::validate_tag;
use crate::{DebugSetting, Level, LogError, LogOptions, Logger, Parts, WILDCARD};

/// Level a verbosity-gated call requires when none is given.
const DEFAULT_VERBOSE_LEVEL: u8 = 1;

impl Logger {
    /// Sets the verbosity level.
    pub fn set_verbose(&mut self, level: u8) -> &mut Self {
        self.verbosity = Some(level);
        self
    }

    /// Returns the configured verbosity level, if any.
    #[must_use]
    pub const fn verbose(&self) -> Option<u8> {
        self.verbosity
    }

    /// Reports whether output gated at `level` would be emitted.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::VerbosityNotConfigured`] before a verbosity level
    /// has been set.
    pub fn is_verbose(&self, level: u8) -> Result<bool, LogError> {
        match self.verbosity {
            Some(configured) => Ok(configured >= level),
            None => Err(LogError::VerbosityNotConfigured {
                component: self.component().to_owned(),
            }),
        }
    }

    /// Emits an informational line when verbosity is at least `level`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{CaptureSink, Logger};
    ///
    /// let capture = CaptureSink::new();
    /// let mut logger = Logger::with_sink("sync", capture.clone()).with_verbose(1);
    ///
    /// logger.if_verbose("shown", 1)?;
    /// logger.if_verbose("hidden", 2)?;
    ///
    /// assert_eq!(capture.lines().len(), 1);
    /// # Ok::<(), logging::LogError>(())
    /// ```
    #[track_caller]
    pub fn if_verbose(&mut self, parts: impl Into<Parts>, level: u8) -> Result<(), LogError> {
        self.if_verbose_with(parts, &LogOptions::new().with_level(level)).map(drop)
    }

    /// Emits at verbosity 1.
    #[track_caller]
    pub fn v1(&mut self, parts: impl Into<Parts>) -> Result<(), LogError> {
        self.if_verbose(parts, 1)
    }

    /// Emits at verbosity 2.
    #[track_caller]
    pub fn v2(&mut self, parts: impl Into<Parts>) -> Result<(), LogError> {
        self.if_verbose(parts, 2)
    }

    /// Emits at verbosity 3.
    #[track_caller]
    pub fn v3(&mut self, parts: impl Into<Parts>) -> Result<(), LogError> {
        self.if_verbose(parts, 3)
    }

    /// Verbosity-gated emission honouring every field of `options`.
    ///
    /// The required level is [`LogOptions::level`], or 1 when unset. Returns
    /// the formatted line when the call passed the gate and
    /// [`LogOptions::into_string`] was requested.
    #[track_caller]
    pub fn if_verbose_with(
        &mut self,
        parts: impl Into<Parts>,
        options: &LogOptions,
    ) -> Result<Option<String>, LogError> {
        let level = options.level.unwrap_or(DEFAULT_VERBOSE_LEVEL);
        if !self.is_verbose(level)? {
            return Ok(None);
        }

        self.log_with(Level::Info, parts, options)
    }

    /// Enables debug output for `tag`.
    ///
    /// Enabling a tag that was not already enabled announces it with an
    /// informational line: `"{tag} debugging enabled"`, or
    /// `"all debugging enabled"` for the wildcard.
    #[track_caller]
    pub fn enable_debug(&mut self, tag: &str) -> Result<&mut Self, LogError> {
        validate_tag(tag)?;
        if self.debug_tags.insert(tag.to_owned()) {
            self.announce_debug(tag)?;
        }
        Ok(self)
    }

    /// Disables debug output for `tag`, returning whether it was enabled.
    ///
    /// Disabling a named tag does not override the wildcard.
    pub fn disable_debug(&mut self, tag: &str) -> bool {
        self.debug_tags.remove(tag)
    }

    /// Replaces the enabled tag set.
    ///
    /// Only tags that were not enabled before are announced.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{CaptureSink, DebugSetting, Logger};
    ///
    /// let capture = CaptureSink::new();
    /// let mut logger = Logger::with_sink("sync", capture.clone());
    ///
    /// logger.set_debug(DebugSetting::parse("net,disk")?)?;
    /// logger.set_debug(DebugSetting::parse("net")?)?;
    ///
    /// assert_eq!(capture.lines().len(), 2);
    /// assert!(logger.is_debug("net"));
    /// assert!(!logger.is_debug("disk"));
    /// # Ok::<(), logging::LogError>(())
    /// ```
    #[track_caller]
    pub fn set_debug(&mut self, setting: impl Into<DebugSetting>) -> Result<&mut Self, LogError> {
        let tags = setting.into().tags();
        for tag in &tags {
            validate_tag(tag)?;
        }

        let previous = std::mem::take(&mut self.debug_tags);
        self.debug_tags.extend(tags.iter().cloned());

        for tag in tags.iter().filter(|tag| !previous.contains(*tag)) {
            self.announce_debug(tag)?;
        }
        Ok(self)
    }

    /// Returns the enabled tags in sorted order.
    pub fn debug_tags(&self) -> impl Iterator<Item = &str> {
        self.debug_tags.iter().map(String::as_str)
    }

    /// Reports whether output tagged `tag` would be emitted.
    ///
    /// True when the wildcard is enabled or `tag` itself is; neither means
    /// false.
    #[must_use]
    pub fn is_debug(&self, tag: &str) -> bool {
        self.debug_tags.contains(WILDCARD) || self.debug_tags.contains(tag)
    }

    /// Emits a debug line when `tag` is enabled.
    #[track_caller]
    pub fn if_debug(&mut self, parts: impl Into<Parts>, tag: &str) -> Result<(), LogError> {
        self.if_debug_with(parts, &LogOptions::new().with_tag(tag)).map(drop)
    }

    /// Debug-gated emission honouring every field of `options`.
    ///
    /// The tag is [`LogOptions::tag`], or the wildcard when unset, which only
    /// passes when every tag is enabled.
    #[track_caller]
    pub fn if_debug_with(
        &mut self,
        parts: impl Into<Parts>,
        options: &LogOptions,
    ) -> Result<Option<String>, LogError> {
        let tag = options.tag.as_deref().unwrap_or(WILDCARD);
        if !self.is_debug(tag) {
            return Ok(None);
        }

        self.log_with(Level::Debug, parts, options)
    }

    #[track_caller]
    fn announce_debug(&mut self, tag: &str) -> Result<(), LogError> {
        if tag == WILDCARD {
            self.info("all debugging enabled")
        } else {
            self.info(format!("{tag} debugging enabled"))
        }
    }
}
