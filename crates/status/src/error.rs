//! Error types for status access and merging.

use serde_json::Value;

use logging::stringify;

/// Failure raised by a [`Status`](crate::Status) operation.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// The payload was requested while errors were still recorded.
    #[error("payload unavailable: {count} unresolved error(s), first: {first}")]
    ErrorsUnresolved {
        /// Number of recorded errors.
        count: usize,
        /// The first recorded error, rendered.
        first: String,
    },

    /// A value that does not describe a status was merged.
    #[error("cannot merge a non-status value: {rendered}")]
    NotAStatus {
        /// The rejected value, stringified.
        rendered: String,
    },
}

impl StatusError {
    pub(crate) fn not_a_status(value: &Value) -> Self {
        Self::NotAStatus {
            rendered: stringify(value),
        }
    }
}
