use std::fmt;
use std::str::FromStr;

/// Level of an emitted log line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Error message.
    Error,
    /// Warning message.
    Warning,
    /// Informational message, including verbosity-gated output.
    Info,
    /// Debug-tag gated message.
    Debug,
}

impl Level {
    /// Returns the lowercase name of the level.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Info.as_str(), "info");
    /// assert_eq!(Level::Warning.as_str(), "warning");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns the uppercase label rendered between the component and location.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::Error.label(), "ERROR");
    /// assert_eq!(Level::Debug.label(), "DEBUG");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLevelError {
    _private: (),
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log level")
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ParseLevelError { _private: () }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_uppercase_label() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
    }

    #[test]
    fn parses_either_case() {
        assert_eq!("INFO".parse::<Level>(), Ok(Level::Info));
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn errors_sort_before_debug() {
        assert!(Level::Error < Level::Debug);
    }
}
