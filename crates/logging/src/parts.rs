use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::stringify::stringify_all;

/// Ordered message parts joined with spaces when a line is rendered.
///
/// Plain strings convert directly; heterogeneous parts are easiest to build
/// with the [`parts!`](crate::parts!) macro.
///
/// # Examples
///
/// ```
/// use logging::{Parts, parts};
///
/// let plain = Parts::from("ready");
/// assert_eq!(plain.render(), "ready");
///
/// let mixed = parts!["copied", 3, "files", serde_json::json!({"dry_run": false})];
/// assert_eq!(mixed.render(), "copied 3 files {dry_run:false}");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parts(Vec<Value>);

impl Parts {
    /// Creates an empty set of parts.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a part.
    pub fn push(&mut self, part: impl Into<Value>) {
        self.0.push(part.into());
    }

    /// Appends any serializable value as a part.
    ///
    /// Values serde cannot represent (maps with non-string keys) become `null`.
    #[must_use]
    pub fn with<T: Serialize + ?Sized>(mut self, part: &T) -> Self {
        self.0.push(to_part(part));
        self
    }

    /// Returns the parts in order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Reports whether there are no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the parts as they appear in a log line.
    #[must_use]
    pub fn render(&self) -> String {
        stringify_all(&self.0)
    }
}

impl fmt::Display for Parts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Parts {
    fn from(text: &str) -> Self {
        Self(vec![Value::String(text.to_owned())])
    }
}

impl From<String> for Parts {
    fn from(text: String) -> Self {
        Self(vec![Value::String(text)])
    }
}

impl From<&String> for Parts {
    fn from(text: &String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<fmt::Arguments<'_>> for Parts {
    fn from(arguments: fmt::Arguments<'_>) -> Self {
        Self::from(arguments.to_string())
    }
}

impl From<Value> for Parts {
    fn from(value: Value) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<Value>> for Parts {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Parts {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[doc(hidden)]
pub fn to_part<T: Serialize + ?Sized>(part: &T) -> Value {
    serde_json::to_value(part).unwrap_or(Value::Null)
}

/// Builds [`Parts`] from a list of serializable expressions.
#[macro_export]
macro_rules! parts {
    () => {
        $crate::Parts::new()
    };
    ($($part:expr),+ $(,)?) => {
        $crate::Parts::from(vec![$($crate::__to_part(&$part)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_text_is_a_single_part() {
        let parts = Parts::from("hello world");
        assert_eq!(parts.values(), &[json!("hello world")]);
    }

    #[test]
    fn macro_mixes_types() {
        let count = 2_u32;
        let name = String::from("alpha");
        let parts = parts!["items", count, name, [1, 2]];
        assert_eq!(parts.render(), "items 2 alpha [1,2]");
    }

    #[test]
    fn macro_without_arguments_is_empty() {
        assert!(parts![].is_empty());
    }

    #[test]
    fn with_accepts_serializable_values() {
        #[derive(Serialize)]
        struct Job {
            id: u8,
            _handle: u8,
        }

        let parts = Parts::new().with("job").with(&Job { id: 4, _handle: 1 });
        assert_eq!(parts.render(), "job {id:4}");
    }

    #[test]
    fn format_arguments_render_once() {
        let parts = Parts::from(format_args!("{}-{}", 1, 2));
        assert_eq!(parts.render(), "1-2");
    }
}
