//! crates/logging/src/sink/mod.rs
//! Destinations for formatted log lines.

use std::io;

use crate::Level;

mod capture;
mod writer;

pub use capture::CaptureSink;
pub use writer::WriterSink;

/// Destination that accepts formatted log lines.
///
/// Implementors receive one complete line per call, without a trailing
/// newline; they decide how lines are terminated.
pub trait Sink {
    /// Writes one formatted line.
    fn write(&mut self, line: &str) -> io::Result<()>;

    /// Writes one formatted line emitted at `level`.
    ///
    /// The default ignores the level and forwards to [`write`](Self::write).
    fn write_at(&mut self, level: Level, line: &str) -> io::Result<()> {
        let _ = level;
        self.write(line)
    }

    /// Flushes and finishes the destination.
    fn end(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, line: &str) -> io::Result<()> {
        (**self).write(line)
    }

    fn write_at(&mut self, level: Level, line: &str) -> io::Result<()> {
        (**self).write_at(level, line)
    }

    fn end(&mut self) -> io::Result<()> {
        (**self).end()
    }
}

/// Returns a newline-terminated sink over standard error.
#[must_use]
pub fn stderr() -> WriterSink<io::Stderr> {
    WriterSink::new(io::stderr())
}
