//! crates/logging/src/error.rs
//! Error types for logger configuration and emission.

use std::io;

use serde_json::Value;

use crate::stringify::stringify;

/// Failure raised by a logging call.
///
/// Configuration and usage mistakes surface immediately at the offending
/// call; nothing is muted or deferred.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// A verbosity-gated call ran before any verbosity was configured.
    #[error("{component}: verbosity not configured; call set_verbose before verbosity-gated logging")]
    VerbosityNotConfigured {
        /// Component label of the logger that was called.
        component: String,
    },

    /// A debug tag was empty or contained separators.
    #[error("invalid debug tag: {rendered}")]
    InvalidTag {
        /// The rejected tag, stringified.
        rendered: String,
    },

    /// A debug setting could not be interpreted.
    #[error("invalid debug setting: {rendered}")]
    InvalidDebugSetting {
        /// The rejected setting, stringified.
        rendered: String,
    },

    /// A verbosity value could not be coerced to a level.
    #[error("invalid verbosity: {rendered}")]
    InvalidVerbosity {
        /// The rejected value, stringified.
        rendered: String,
    },

    /// The sink refused the formatted line.
    #[error("failed to write log line: {0}")]
    Io(#[from] io::Error),
}

impl LogError {
    pub(crate) fn invalid_tag(tag: &str) -> Self {
        Self::InvalidTag {
            rendered: stringify(&Value::String(tag.to_owned())),
        }
    }

    pub(crate) fn invalid_debug_setting(value: &Value) -> Self {
        Self::InvalidDebugSetting {
            rendered: stringify(value),
        }
    }

    pub(crate) fn invalid_verbosity(value: &Value) -> Self {
        Self::InvalidVerbosity {
            rendered: stringify(value),
        }
    }
}
