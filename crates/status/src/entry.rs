use std::fmt;

use callsite::SourceLocation;

/// Message stamped with the location that recorded it.
///
/// Entries are immutable once created.
///
/// # Examples
///
/// ```
/// use callsite::SourceLocation;
/// use status::StampedEntry;
///
/// let entry = StampedEntry::new(&SourceLocation::new("src/plan.rs", 12), "no targets");
/// assert_eq!(entry.rendered(), "plan.rs:12: no targets");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StampedEntry {
    location: String,
    message: String,
}

impl StampedEntry {
    /// Stamps `message` with `location`.
    #[must_use]
    pub fn new(location: &SourceLocation, message: impl Into<String>) -> Self {
        Self::from_parts(location.to_string(), message)
    }

    /// Builds an entry from an already rendered location.
    #[must_use]
    pub fn from_parts(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Returns the rendered location, `file:line`.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `location: message`.
    #[must_use]
    pub fn rendered(&self) -> String {
        format!("{}: {}", self.location, self.message)
    }

    /// Returns a copy with ` (xN)` appended to the message.
    #[must_use]
    pub(crate) fn with_repeat_count(&self, count: usize) -> Self {
        Self {
            location: self.location.clone(),
            message: format!("{} (x{count})", self.message),
        }
    }
}

impl fmt::Display for StampedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}
