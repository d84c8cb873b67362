use callsite::resolve_call_site;
use logging::Parts;
use serde_json::{Map, Value};

use crate::{Severity, StampedEntry, StatusError, deduplicate};

mod payload;
mod render;

/// Accumulated outcome of an operation.
///
/// A status collects info, warning and error entries in insertion order, each
/// stamped with the location that recorded it, together with an optional
/// payload and caller-chosen extra fields. The payload is withheld while
/// errors are recorded, so callers resolve or clear errors before trusting it.
///
/// # Examples
///
/// ```
/// use status::Status;
///
/// let mut status = Status::new();
/// status.add_warning("cache cold").set_payload(42);
/// assert!(status.is_ok());
/// assert_eq!(status.payload()?, Some(&serde_json::json!(42)));
///
/// status.add_error("lookup failed");
/// assert!(!status.is_ok());
/// assert!(status.payload().is_err());
/// # Ok::<(), status::StatusError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Status {
    info: Vec<StampedEntry>,
    warnings: Vec<StampedEntry>,
    errors: Vec<StampedEntry>,
    last_error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    extra: Map<String, Value>,
}

impl Status {
    /// Creates an empty status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a status holding a single error recorded at the caller.
    #[track_caller]
    #[must_use]
    pub fn with_error(message: impl Into<Parts>) -> Self {
        let mut status = Self::new();
        status.add_error(message);
        status
    }

    /// Records an informational entry at the caller's location.
    #[track_caller]
    pub fn add_info(&mut self, message: impl Into<Parts>) -> &mut Self {
        self.add_info_skipping(message, 0)
    }

    /// Records a warning at the caller's location.
    #[track_caller]
    pub fn add_warning(&mut self, message: impl Into<Parts>) -> &mut Self {
        self.add_warning_skipping(message, 0)
    }

    /// Records an error at the caller's location and makes it the last error.
    #[track_caller]
    pub fn add_error(&mut self, message: impl Into<Parts>) -> &mut Self {
        self.add_error_skipping(message, 0)
    }

    /// Records an informational entry attributed `skip_frames` recorded frames out.
    #[track_caller]
    pub fn add_info_skipping(
        &mut self,
        message: impl Into<Parts>,
        skip_frames: usize,
    ) -> &mut Self {
        self.record(Severity::Info, message.into(), skip_frames)
    }

    /// Records a warning attributed `skip_frames` recorded frames out.
    #[track_caller]
    pub fn add_warning_skipping(
        &mut self,
        message: impl Into<Parts>,
        skip_frames: usize,
    ) -> &mut Self {
        self.record(Severity::Warning, message.into(), skip_frames)
    }

    /// Records an error attributed `skip_frames` recorded frames out.
    #[track_caller]
    pub fn add_error_skipping(
        &mut self,
        message: impl Into<Parts>,
        skip_frames: usize,
    ) -> &mut Self {
        self.record(Severity::Error, message.into(), skip_frames)
    }

    #[track_caller]
    fn record(&mut self, severity: Severity, message: Parts, skip_frames: usize) -> &mut Self {
        let entry = StampedEntry::new(&resolve_call_site(skip_frames), message.render());
        if severity == Severity::Error {
            self.last_error = entry.rendered();
        }
        self.entries_mut(severity).push(entry);
        self
    }

    /// Folds `other` into this status.
    ///
    /// Entries are appended after this status's own, tier by tier. The last
    /// error and the payload are taken from `other` when it has them, and
    /// `other`'s extra fields overwrite fields of the same name.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        self.info.extend_from_slice(&other.info);
        self.warnings.extend_from_slice(&other.warnings);
        self.errors.extend_from_slice(&other.errors);

        if !other.last_error.is_empty() {
            self.last_error.clone_from(&other.last_error);
        }
        if other.payload.is_some() {
            self.payload.clone_from(&other.payload);
        }
        for (name, value) in &other.extra {
            self.extra.insert(name.clone(), value.clone());
        }
        self
    }

    /// Alias of [`merge`](Self::merge).
    pub fn add_status(&mut self, other: &Self) -> &mut Self {
        self.merge(other)
    }

    /// Folds in a status that was serialized to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::NotAStatus`] when `value` does not describe a
    /// status, including values whose errors and last error disagree about
    /// whether any error was recorded; this status is left unchanged.
    pub fn merge_value(&mut self, value: &Value) -> Result<&mut Self, StatusError> {
        let other = <Self as serde::Deserialize>::deserialize(value)
            .map_err(|_| StatusError::not_a_status(value))?;
        if other.errors.is_empty() != other.last_error.is_empty() {
            return Err(StatusError::not_a_status(value));
        }
        Ok(self.merge(&other))
    }

    /// Reports whether no errors are recorded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Reports whether nothing at all is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
            && self.warnings.is_empty()
            && self.errors.is_empty()
            && self.payload.is_none()
            && self.extra.is_empty()
    }

    /// Reports whether errors are recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Reports whether warnings are recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Reports whether informational entries are recorded.
    #[must_use]
    pub fn has_info(&self) -> bool {
        !self.info.is_empty()
    }

    /// Removes every error, including the last error.
    pub fn clear_errors(&mut self) -> &mut Self {
        self.errors.clear();
        self.last_error.clear();
        self
    }

    /// Removes every warning.
    pub fn clear_warnings(&mut self) -> &mut Self {
        self.warnings.clear();
        self
    }

    /// Removes every informational entry.
    pub fn clear_info(&mut self) -> &mut Self {
        self.info.clear();
        self
    }

    /// Returns the entries recorded under `severity`.
    #[must_use]
    pub fn entries(&self, severity: Severity) -> &[StampedEntry] {
        match severity {
            Severity::Info => &self.info,
            Severity::Warning => &self.warnings,
            Severity::Error => &self.errors,
        }
    }

    fn entries_mut(&mut self, severity: Severity) -> &mut Vec<StampedEntry> {
        match severity {
            Severity::Info => &mut self.info,
            Severity::Warning => &mut self.warnings,
            Severity::Error => &mut self.errors,
        }
    }

    /// Collapses repeated informational entries, see [`deduplicate`].
    pub fn dedup_info(&mut self) -> &mut Self {
        self.dedup(Severity::Info)
    }

    /// Collapses repeated warnings, see [`deduplicate`].
    pub fn dedup_warnings(&mut self) -> &mut Self {
        self.dedup(Severity::Warning)
    }

    /// Collapses repeated errors, see [`deduplicate`].
    ///
    /// The last error is left as recorded.
    pub fn dedup_errors(&mut self) -> &mut Self {
        self.dedup(Severity::Error)
    }

    fn dedup(&mut self, severity: Severity) -> &mut Self {
        let entries = self.entries_mut(severity);
        *entries = deduplicate(entries);
        self
    }

    /// Returns the most recently recorded error, rendered, or `""` when none.
    #[must_use]
    pub fn last_error(&self) -> &str {
        &self.last_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entries_are_stamped_with_caller() {
        let mut status = Status::new();
        let line = line!() + 1;
        status.add_info("noted");

        assert_eq!(
            status.info_messages(),
            vec![format!("status:{line}: noted")]
        );
    }

    #[test]
    fn add_error_tracks_last_error() {
        let mut status = Status::new();
        status.add_error("first").add_error("second");

        assert!(status.last_error().ends_with(": second"));
        assert_eq!(status.entries(Severity::Error).len(), 2);
    }

    #[test]
    fn clear_errors_resets_last_error() {
        let mut status = Status::with_error("broken");
        status.clear_errors();

        assert!(status.is_ok());
        assert_eq!(status.last_error(), "");
    }

    #[test]
    fn merge_keeps_own_last_error_when_other_is_clean() {
        let mut a = Status::with_error("mine");
        let mut b = Status::new();
        b.add_warning("theirs");

        a.merge(&b);

        assert!(a.last_error().ends_with(": mine"));
        assert_eq!(a.entries(Severity::Warning).len(), 1);
    }

    #[test]
    fn merged_statuses_are_independent() {
        let mut a = Status::new();
        let mut b = Status::new();
        b.add_info("shared");

        a.merge(&b);
        b.clear_info();

        assert!(a.has_info());
        assert!(!b.has_info());
    }

    #[test]
    fn merge_value_rejects_non_status() {
        let mut status = Status::new();
        let error = status.merge_value(&json!("nope")).unwrap_err();

        assert!(matches!(error, StatusError::NotAStatus { .. }));
        assert!(status.merge_value(&json!({"unknown": 1})).is_err());
        assert!(status.is_empty());
    }

    #[test]
    fn merge_value_accepts_serialized_status() {
        let mut source = Status::with_error("remote failure");
        source.set_field("host", "alpha");
        let value = serde_json::to_value(&source).expect("serialize");

        let mut status = Status::new();
        status.merge_value(&value).expect("valid status");

        assert_eq!(status, source);
    }

    #[test]
    fn skipping_attributes_to_recorded_frame() {
        let mut status = Status::new();
        let outer = line!() + 1;
        callsite::traced!(status.add_warning_skipping("outer", 1));

        assert_eq!(
            status.warning_messages(),
            vec![format!("status:{outer}: outer")]
        );
    }
}
