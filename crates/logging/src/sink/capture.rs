use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use super::Sink;

/// Sink that keeps lines in memory.
///
/// Clones share the same buffer, so a caller can hand one clone to a logger
/// and read the lines back through another.
///
/// # Examples
///
/// ```
/// use logging::{CaptureSink, Sink};
///
/// let capture = CaptureSink::new();
/// let mut writer = capture.clone();
/// writer.write("kept")?;
///
/// assert_eq!(capture.lines(), vec!["kept".to_owned()]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CaptureSink {
    /// Creates an empty capture buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Removes and returns the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    /// Reports whether nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Sink for CaptureSink {
    fn write(&mut self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_lines() {
        let capture = CaptureSink::new();
        let mut other = capture.clone();
        other.write("a").expect("write succeeds");
        other.write("b").expect("write succeeds");

        assert_eq!(capture.lines(), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn take_drains_buffer() {
        let mut capture = CaptureSink::new();
        capture.write("only").expect("write succeeds");

        assert_eq!(capture.take(), vec!["only".to_owned()]);
        assert!(capture.is_empty());
    }
}
