/// Per-call options for logger operations.
///
/// # Examples
///
/// ```
/// use logging::LogOptions;
///
/// let options = LogOptions::new().with_skip_frames(1).returning_string();
/// assert_eq!(options.skip_frames, 1);
/// assert!(options.into_string);
/// assert_eq!(options.tag, None);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// Recorded frames to skip when attributing the line, for wrapper helpers.
    pub skip_frames: usize,
    /// Return the formatted line instead of writing it to the sink.
    pub into_string: bool,
    /// Debug tag consulted by debug-gated calls; the wildcard when unset.
    pub tag: Option<String>,
    /// Verbosity level required by verbosity-gated calls; 1 when unset.
    pub level: Option<u8>,
}

impl LogOptions {
    /// Creates options with every field at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            skip_frames: 0,
            into_string: false,
            tag: None,
            level: None,
        }
    }

    /// Sets the number of recorded frames to skip.
    #[must_use]
    pub const fn with_skip_frames(mut self, skip_frames: usize) -> Self {
        self.skip_frames = skip_frames;
        self
    }

    /// Requests the formatted line be returned rather than written.
    #[must_use]
    pub const fn returning_string(mut self) -> Self {
        self.into_string = true;
        self
    }

    /// Sets the debug tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the verbosity level.
    #[must_use]
    pub const fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }
}
