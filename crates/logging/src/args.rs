//! crates/logging/src/args.rs
//! Configuring a logger from parsed command-line arguments.

use std::collections::HashMap;
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::{DebugSetting, LogError, Logger};

const VERBOSE_KEYS: [&str; 2] = ["verbose", "--verbose"];
const DEBUG_KEYS: [&str; 2] = ["debug", "--debug"];

/// Source of named argument values.
///
/// Implemented for JSON maps and objects, for `HashMap`s of values, and for
/// getter closures wrapped with [`arg_fn`].
pub trait ArgSource {
    /// Returns the value stored under `name`, if present.
    fn arg(&self, name: &str) -> Option<Value>;
}

impl ArgSource for Map<String, Value> {
    fn arg(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl ArgSource for Value {
    fn arg(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|object| object.arg(name))
    }
}

impl<S: BuildHasher> ArgSource for HashMap<String, Value, S> {
    fn arg(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<T: ArgSource + ?Sized> ArgSource for &T {
    fn arg(&self, name: &str) -> Option<Value> {
        (**self).arg(name)
    }
}

/// Argument source backed by a getter closure.
#[derive(Clone, Copy, Debug)]
pub struct ArgFn<F>(F);

/// Wraps a getter closure as an [`ArgSource`].
///
/// # Examples
///
/// ```
/// use logging::{CaptureSink, Logger, arg_fn};
/// use serde_json::{Value, json};
///
/// let mut logger = Logger::with_sink("cli", CaptureSink::new());
/// logger.set_from_args(&arg_fn(|name: &str| match name {
///     "verbose" => Some(json!(2)),
///     _ => None::<Value>,
/// }))?;
///
/// assert_eq!(logger.verbose(), Some(2));
/// # Ok::<(), logging::LogError>(())
/// ```
pub const fn arg_fn<F>(getter: F) -> ArgFn<F>
where
    F: Fn(&str) -> Option<Value>,
{
    ArgFn(getter)
}

impl<F> ArgSource for ArgFn<F>
where
    F: Fn(&str) -> Option<Value>,
{
    fn arg(&self, name: &str) -> Option<Value> {
        (self.0)(name)
    }
}

impl Logger {
    /// Configures verbosity and debug tags from parsed arguments.
    ///
    /// Reads `verbose` (or `--verbose`) and `debug` (or `--debug`). A missing
    /// verbosity configures level 0, so verbosity-gated calls become silent
    /// instead of failing. Verbosity accepts integers, booleans, numeric
    /// strings and lists, which count as their length (repeated `-v` flags).
    /// Debug accepts everything [`DebugSetting::from_value`] does; a missing
    /// value turns debugging off.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{CaptureSink, Logger};
    /// use serde_json::json;
    ///
    /// let mut logger = Logger::with_sink("cli", CaptureSink::new());
    /// logger.set_from_args(&json!({"--verbose": [true, true], "debug": "net"}))?;
    ///
    /// assert_eq!(logger.verbose(), Some(2));
    /// assert!(logger.is_debug("net"));
    /// # Ok::<(), logging::LogError>(())
    /// ```
    #[track_caller]
    pub fn set_from_args(&mut self, args: &impl ArgSource) -> Result<&mut Self, LogError> {
        let verbose = first_present(args, VERBOSE_KEYS);
        let level = verbose.as_ref().map_or(Ok(0), verbosity_level)?;

        let debug = match first_present(args, DEBUG_KEYS) {
            Some(value) => DebugSetting::from_value(&value)?,
            None => DebugSetting::Off,
        };

        self.set_verbose(level);
        self.set_debug(debug)
    }
}

fn first_present(args: &impl ArgSource, keys: [&str; 2]) -> Option<Value> {
    keys.iter()
        .find_map(|key| args.arg(key))
        .filter(|value| !value.is_null())
}

fn verbosity_level(value: &Value) -> Result<u8, LogError> {
    let level = match value {
        Value::Bool(enabled) => Some(u8::from(*enabled)),
        Value::Number(number) => number.as_u64().and_then(|n| u8::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u8>().ok(),
        Value::Array(items) => u8::try_from(items.len()).ok(),
        Value::Null | Value::Object(_) => None,
    };

    level.ok_or_else(|| LogError::invalid_verbosity(value))
}
