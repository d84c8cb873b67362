use std::borrow::Cow;
use std::ffi::OsString;
use std::fmt;
use std::panic::Location;
use std::path::{Component, Path};

/// File names that say nothing about which part of a crate produced a message.
const ENTRY_MODULES: [&str; 3] = ["mod.rs", "lib.rs", "main.rs"];

/// Source location attributed to a diagnostic.
///
/// The stored path is normalised so that the same file reached through
/// different spellings (`src/./a.rs`, `src/b/../a.rs`, `src\a.rs`) compares
/// equal. The path doubles as the identity of the source unit when counting
/// frames that belong to the same file.
///
/// # Examples
///
/// ```
/// use callsite::SourceLocation;
///
/// let location = SourceLocation::new("crates/status/src/status.rs", 120);
///
/// assert_eq!(location.line(), 120);
/// assert_eq!(location.label(), "status.rs");
/// assert_eq!(location.to_string(), "status.rs:120");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    path: Cow<'static, str>,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from a file path and line number.
    #[must_use]
    pub fn new(file: &str, line: u32) -> Self {
        Self {
            path: Cow::Owned(normalize_path(Path::new(file))),
            line,
        }
    }

    /// Captures the location of the caller.
    ///
    /// Functions marked `#[track_caller]` forward their own caller's location,
    /// so wrappers that call this helper attribute the message to whoever
    /// invoked the wrapper.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Returns the normalised path of the source file.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the line number recorded for the message.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Reports whether `other` was recorded in the same source file.
    #[must_use]
    pub fn same_unit(&self, other: &Self) -> bool {
        self.path == other.path
    }

    /// Returns the short name rendered in diagnostics.
    ///
    /// Usually the file name. Entry modules (`mod.rs`, `lib.rs`, `main.rs`)
    /// are replaced by the name of the directory that owns them, skipping a
    /// `src` directory, so `crates/status/src/lib.rs` reads as `status` and
    /// `src/sink/mod.rs` reads as `sink`.
    #[must_use]
    pub fn label(&self) -> &str {
        let mut segments = self.path.rsplit('/');
        let Some(file_name) = segments.next() else {
            return &self.path;
        };

        if !ENTRY_MODULES.contains(&file_name) {
            return file_name;
        }

        segments
            .find(|segment| !segment.is_empty() && *segment != "src" && *segment != ".")
            .unwrap_or(file_name)
    }
}

impl From<&Location<'_>> for SourceLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label(), self.line)
    }
}

fn normalize_path(path: &Path) -> String {
    let mut prefix: Option<OsString> = None;
    let is_absolute = path.is_absolute() || path.has_root();
    let mut segments: Vec<OsString> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(value) => {
                prefix = Some(value.as_os_str().to_os_string());
            }
            // Re-added below from `is_absolute` so the separator stays `/`.
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if segments.last().is_some_and(|last| last != "..") {
                    segments.pop();
                    continue;
                }

                if !is_absolute {
                    segments.push(OsString::from(".."));
                }
            }
            Component::Normal(value) => segments.push(value.to_os_string()),
        }
    }

    let mut normalized = String::new();

    if let Some(prefix) = prefix {
        normalized.push_str(&prefix.to_string_lossy().replace('\\', "/"));
    }

    if is_absolute && !normalized.ends_with('/') {
        normalized.push('/');
    }

    for segment in &segments {
        if !(normalized.is_empty() || normalized.ends_with('/')) {
            normalized.push('/');
        }

        normalized.push_str(&segment.to_string_lossy().replace('\\', "/"));
    }

    if normalized.is_empty() {
        String::from(".")
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_records_this_file() {
        let location = SourceLocation::caller();
        assert!(location.path().ends_with("src/location.rs"));
        assert!(location.line() > 0);
    }

    #[test]
    fn display_uses_label_and_line() {
        let location = SourceLocation::new("crates/logging/src/logger.rs", 42);
        assert_eq!(location.to_string(), "logger.rs:42");
    }

    #[test]
    fn entry_modules_are_labelled_by_directory() {
        assert_eq!(SourceLocation::new("src/sink/mod.rs", 1).label(), "sink");
        assert_eq!(SourceLocation::new("crates/status/src/lib.rs", 1).label(), "status");
        assert_eq!(SourceLocation::new("tools/demo/main.rs", 1).label(), "demo");
    }

    #[test]
    fn bare_entry_module_keeps_its_name() {
        assert_eq!(SourceLocation::new("lib.rs", 3).label(), "lib.rs");
        assert_eq!(SourceLocation::new("src/main.rs", 3).label(), "main.rs");
    }

    #[test]
    fn ordinary_files_keep_their_name() {
        assert_eq!(SourceLocation::new("src/module.rs", 9).label(), "module.rs");
    }

    #[test]
    fn same_unit_compares_normalized_paths() {
        let a = SourceLocation::new("src/./stack.rs", 1);
        let b = SourceLocation::new("src/inner/../stack.rs", 99);
        let c = SourceLocation::new("src/location.rs", 1);

        assert!(a.same_unit(&b));
        assert!(!a.same_unit(&c));
    }

    #[test]
    fn normalizes_redundant_segments() {
        let normalized = normalize_path(Path::new("src/../src/./location.rs"));
        assert_eq!(normalized, "src/location.rs");
    }

    #[test]
    fn normalize_preserves_relative_parent_segments() {
        let normalized = normalize_path(Path::new("../shared/src/lib.rs"));
        assert_eq!(normalized, "../shared/src/lib.rs");
    }

    #[test]
    fn normalize_keeps_absolute_root() {
        let normalized = normalize_path(Path::new("/tmp/outside.rs"));
        assert_eq!(normalized, "/tmp/outside.rs");
    }

    #[test]
    fn normalize_empty_path_defaults_to_current_dir() {
        let normalized = normalize_path(Path::new(""));
        assert_eq!(normalized, ".");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_path_and_line() {
        let location = SourceLocation::new("src/a.rs", 7);
        let value = serde_json::to_value(&location).expect("serialize");
        assert_eq!(value, serde_json::json!({"path": "src/a.rs", "line": 7}));
    }
}
