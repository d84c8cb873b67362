use std::fmt;

use logging::Level;

/// Tier an entry is recorded under.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Severity {
    /// Informational entry.
    Info,
    /// Warning entry.
    Warning,
    /// Error entry.
    Error,
}

impl Severity {
    /// Tiers in the order they are rendered and logged.
    pub const RENDER_ORDER: [Self; 3] = [Self::Error, Self::Warning, Self::Info];

    /// Returns the lowercase label of the severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use status::Severity;
    ///
    /// assert_eq!(Severity::Info.as_str(), "info");
    /// assert_eq!(Severity::Error.as_str(), "error");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Returns the heading used for the tier when a status is rendered.
    ///
    /// # Examples
    ///
    /// ```
    /// use status::Severity;
    ///
    /// assert_eq!(Severity::Error.section(), "errors");
    /// assert_eq!(Severity::Warning.section(), "warnings");
    /// assert_eq!(Severity::Info.section(), "info");
    /// ```
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warnings",
            Self::Error => "errors",
        }
    }

    /// Returns the logger level entries of this tier are emitted at.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Info => Level::Info,
            Self::Warning => Level::Warning,
            Self::Error => Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
