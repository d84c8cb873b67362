//! crates/logging/src/debug.rs
//! Debug-tag settings and validation.

use serde_json::Value;

use crate::LogError;

/// Tag that enables every debug-gated call.
pub const WILDCARD: &str = "*";

/// Requested set of enabled debug tags.
///
/// # Examples
///
/// ```
/// use logging::DebugSetting;
/// use serde_json::json;
///
/// assert_eq!(DebugSetting::from_value(&json!(true))?, DebugSetting::All);
/// assert_eq!(
///     DebugSetting::from_value(&json!("net,disk"))?,
///     DebugSetting::Tags(vec!["net".into(), "disk".into()]),
/// );
/// assert!(DebugSetting::from_value(&json!({"net": true})).is_err());
/// # Ok::<(), logging::LogError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugSetting {
    /// No debug output.
    #[default]
    Off,
    /// Every tag enabled through the wildcard.
    All,
    /// The listed tags.
    Tags(Vec<String>),
}

impl DebugSetting {
    /// Parses a comma-separated tag list; an empty list means [`DebugSetting::Off`].
    pub fn parse(list: &str) -> Result<Self, LogError> {
        let mut tags = Vec::new();
        push_split(&mut tags, list)?;
        Ok(Self::from_tags(tags))
    }

    /// Interprets a configuration value.
    ///
    /// Booleans switch everything on or off, non-negative integers enable
    /// everything when non-zero, strings are comma-split, and arrays of
    /// strings are comma-split element by element. `null` is
    /// [`DebugSetting::Off`]. Anything else is rejected.
    pub fn from_value(value: &Value) -> Result<Self, LogError> {
        match value {
            Value::Null | Value::Bool(false) => Ok(Self::Off),
            Value::Bool(true) => Ok(Self::All),
            Value::Number(number) => match number.as_u64() {
                Some(0) => Ok(Self::Off),
                Some(_) => Ok(Self::All),
                None => Err(LogError::invalid_debug_setting(value)),
            },
            Value::String(list) => Self::parse(list),
            Value::Array(items) => {
                let mut tags = Vec::new();
                for item in items {
                    let Value::String(list) = item else {
                        return Err(LogError::invalid_debug_setting(value));
                    };
                    push_split(&mut tags, list)?;
                }
                Ok(Self::from_tags(tags))
            }
            Value::Object(_) => Err(LogError::invalid_debug_setting(value)),
        }
    }

    /// Returns the tags the setting enables, with [`WILDCARD`] for everything.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        match self {
            Self::Off => Vec::new(),
            Self::All => vec![WILDCARD.to_owned()],
            Self::Tags(tags) => tags.clone(),
        }
    }

    fn from_tags(tags: Vec<String>) -> Self {
        if tags.is_empty() {
            Self::Off
        } else if tags.iter().any(|tag| tag == WILDCARD) {
            Self::All
        } else {
            Self::Tags(tags)
        }
    }
}

impl From<bool> for DebugSetting {
    fn from(enabled: bool) -> Self {
        if enabled { Self::All } else { Self::Off }
    }
}

impl From<Vec<String>> for DebugSetting {
    fn from(tags: Vec<String>) -> Self {
        Self::from_tags(tags)
    }
}

impl From<&[&str]> for DebugSetting {
    fn from(tags: &[&str]) -> Self {
        Self::from_tags(tags.iter().map(|tag| (*tag).to_owned()).collect())
    }
}

/// Rejects tags that are empty or contain commas or whitespace.
pub(crate) fn validate_tag(tag: &str) -> Result<(), LogError> {
    if tag.is_empty() || tag.chars().any(|c| c == ',' || c.is_whitespace()) {
        Err(LogError::invalid_tag(tag))
    } else {
        Ok(())
    }
}

fn push_split(tags: &mut Vec<String>, list: &str) -> Result<(), LogError> {
    for piece in list.split(',').map(str::trim).filter(|piece| !piece.is_empty()) {
        validate_tag(piece)?;
        if !tags.iter().any(|existing| existing == piece) {
            tags.push(piece.to_owned());
        }
    }
    Ok(())
}
