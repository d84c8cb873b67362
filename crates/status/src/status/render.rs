use std::fmt;

use logging::{LogError, LogOptions, Logger, stringify};

use super::Status;
use crate::{Severity, StampedEntry};

const SEPARATOR: &str = "; ";

impl Status {
    /// Returns the rendered informational entries.
    #[must_use]
    pub fn info_messages(&self) -> Vec<String> {
        rendered(self.entries(Severity::Info))
    }

    /// Returns the rendered warnings.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        rendered(self.entries(Severity::Warning))
    }

    /// Returns the rendered errors.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        rendered(self.entries(Severity::Error))
    }

    /// Returns the informational entries joined with `"; "`.
    #[must_use]
    pub fn info_msg(&self) -> String {
        self.joined(Severity::Info)
    }

    /// Returns the warnings joined with `"; "`.
    #[must_use]
    pub fn warning_msg(&self) -> String {
        self.joined(Severity::Warning)
    }

    /// Returns the errors joined with `"; "`.
    #[must_use]
    pub fn error_msg(&self) -> String {
        self.joined(Severity::Error)
    }

    fn joined(&self, severity: Severity) -> String {
        rendered(self.entries(severity)).join(SEPARATOR)
    }

    /// Renders the status on one line.
    ///
    /// Non-empty tiers appear as `errors: ..`, `warnings: ..` and `info: ..`
    /// in that order, or `ok` when none has entries. Extra fields follow as
    /// ` extra attributes: name=value, ..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use status::Status;
    ///
    /// let mut status = Status::new();
    /// assert_eq!(status.render(), "ok");
    ///
    /// status.set_field("retries", 2);
    /// assert_eq!(status.render(), "ok extra attributes: retries=2");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let sections: Vec<String> = Severity::RENDER_ORDER
            .into_iter()
            .filter(|severity| !self.entries(*severity).is_empty())
            .map(|severity| format!("{}: {}", severity.section(), self.joined(severity)))
            .collect();

        let mut rendered = if sections.is_empty() {
            String::from("ok")
        } else {
            sections.join(SEPARATOR)
        };

        if !self.extra.is_empty() {
            let attributes: Vec<String> = self
                .extra
                .iter()
                .map(|(name, value)| format!("{name}={}", stringify(value)))
                .collect();
            rendered.push_str(" extra attributes: ");
            rendered.push_str(&attributes.join(", "));
        }

        rendered
    }

    /// Emits one logger line per non-empty tier at the matching level.
    ///
    /// Each line carries the tier's joined entries, prefixed with
    /// `"{prefix}: "` when a prefix is given, and is attributed to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{CaptureSink, Logger};
    /// use status::Status;
    ///
    /// let capture = CaptureSink::new();
    /// let mut logger = Logger::with_sink("plan", capture.clone());
    ///
    /// let mut status = Status::new();
    /// status.add_warning("slow disk").add_info("3 files");
    /// status.log_to(&mut logger, Some("scan"))?;
    ///
    /// let lines = capture.lines();
    /// assert_eq!(lines.len(), 2);
    /// assert!(lines[0].starts_with("plan: WARNING: "));
    /// assert!(lines[0].contains(": scan: "));
    /// # Ok::<(), logging::LogError>(())
    /// ```
    #[track_caller]
    pub fn log_to(&self, logger: &mut Logger, prefix: Option<&str>) -> Result<(), LogError> {
        for severity in Severity::RENDER_ORDER {
            if self.entries(severity).is_empty() {
                continue;
            }

            let text = match prefix {
                Some(prefix) => format!("{prefix}: {}", self.joined(severity)),
                None => self.joined(severity),
            };
            logger.log_with(severity.level(), text, &LogOptions::new())?;
        }
        Ok(())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn rendered(entries: &[StampedEntry]) -> Vec<String> {
    entries.iter().map(StampedEntry::rendered).collect()
}

#[cfg(test)]
mod tests {
    use logging::CaptureSink;
    use serde_json::json;

    use super::*;

    fn status_from(errors: &[&str], warnings: &[&str], info: &[&str]) -> Status {
        let stamp = |message: &&str| StampedEntry::from_parts("x.rs:1", *message);
        let mut status = Status::new();
        status.errors = errors.iter().map(stamp).collect();
        status.warnings = warnings.iter().map(stamp).collect();
        status.info = info.iter().map(stamp).collect();
        status
    }

    #[test]
    fn empty_status_renders_ok() {
        assert_eq!(Status::new().to_string(), "ok");
    }

    #[test]
    fn tiers_render_in_severity_order() {
        let status = status_from(&["e1", "e2"], &["w"], &["i"]);
        assert_eq!(
            status.render(),
            "errors: x.rs:1: e1; x.rs:1: e2; warnings: x.rs:1: w; info: x.rs:1: i"
        );
    }

    #[test]
    fn extra_attributes_are_stringified() {
        let mut status = status_from(&[], &["w"], &[]);
        status.set_field("paths", json!(["a", "b"]));
        status.set_field("note", "plain");

        let rendered = status.render();
        assert!(rendered.ends_with(" extra attributes: note=plain, paths=[a,b]"));
    }

    #[test]
    fn joined_messages_use_semicolons() {
        let status = status_from(&[], &[], &["one", "two"]);
        assert_eq!(status.info_messages().len(), 2);
        assert_eq!(status.info_msg().matches("; ").count(), 1);
        assert_eq!(status.warning_msg(), "");
    }

    #[test]
    fn log_to_emits_one_line_per_tier() {
        let capture = CaptureSink::new();
        let mut logger = Logger::with_sink("job", capture.clone());
        let status = status_from(&["bad"], &[], &["a", "b"]);

        let line = line!() + 1;
        status.log_to(&mut logger, None).unwrap();

        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("job: ERROR: render.rs:{line}: x.rs:1: bad"));
        assert_eq!(lines[1], format!("job: INFO: render.rs:{line}: x.rs:1: a; x.rs:1: b"));
    }

    #[test]
    fn log_to_skips_clean_status() {
        let capture = CaptureSink::new();
        let mut logger = Logger::with_sink("job", capture.clone());

        Status::new().log_to(&mut logger, Some("noop")).unwrap();

        assert!(capture.is_empty());
    }
}
