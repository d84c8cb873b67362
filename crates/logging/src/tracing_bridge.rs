//! crates/logging/src/tracing_bridge.rs
//! Bridge between emitted log lines and the tracing ecosystem.
//!
//! [`TracingSink`] turns every line a [`Logger`](crate::Logger) writes into a
//! `tracing` event under the [`TARGET`] target, at the level the line was
//! emitted with. The init helpers install a `tracing-subscriber` fmt
//! subscriber on standard error filtered through `RUST_LOG`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Logger, TracingSink, init_tracing};
//!
//! init_tracing();
//!
//! let mut logger = Logger::with_sink("sync", TracingSink::new());
//! logger.info("copying file")?;
//! ```

use std::io;

use tracing_subscriber::EnvFilter;

use crate::{Level, Sink};

/// Target every forwarded event is recorded under.
pub const TARGET: &str = "statuslog";

/// Sink that forwards lines to the current tracing subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink {
    _private: (),
}

impl TracingSink {
    /// Creates a sink forwarding to tracing.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl Sink for TracingSink {
    fn write(&mut self, line: &str) -> io::Result<()> {
        self.write_at(Level::Info, line)
    }

    fn write_at(&mut self, level: Level, line: &str) -> io::Result<()> {
        match level {
            Level::Error => tracing::error!(target: TARGET, "{line}"),
            Level::Warning => tracing::warn!(target: TARGET, "{line}"),
            Level::Info => tracing::info!(target: TARGET, "{line}"),
            Level::Debug => tracing::debug!(target: TARGET, "{line}"),
        }
        Ok(())
    }
}

/// Maps a logger level to the tracing level it is forwarded at.
#[must_use]
pub const fn tracing_level(level: Level) -> tracing::Level {
    match level {
        Level::Error => tracing::Level::ERROR,
        Level::Warning => tracing::Level::WARN,
        Level::Info => tracing::Level::INFO,
        Level::Debug => tracing::Level::DEBUG,
    }
}

/// Installs a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    init_tracing_with_filter(filter)
}

/// Installs a fmt subscriber with an explicit filter.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
