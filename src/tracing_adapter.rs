//! `tracing` ecosystem adapter.

use std::fmt::Write;

use crate::logger::KeyValues;
use crate::{Level, LogError, Logger};

/// A logger that forwards messages to the `tracing` crate.
///
/// Bridges the [`Logger`] trait to whatever `tracing` subscriber the host
/// process installed. Key-value pairs are appended to the message text;
/// combined level masks map to the most severe named level they contain.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logtree::{Level, Logger, TracingLogger};
///
/// // Assumes a tracing subscriber is already installed.
/// let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
/// logger.log(Level::INFO, "using the tracing backend", &[]).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Creates a new tracing adapter.
    pub fn new() -> TracingLogger {
        TracingLogger
    }
}

impl Logger for TracingLogger {
    fn log(
        &self,
        level: Level,
        message: &str,
        key_values: KeyValues<'_>,
    ) -> Result<(), LogError> {
        let mut line = String::from(message);
        for (key, value) in key_values {
            write!(line, " {}={}", key, value)?;
        }

        if level.contains(Level::FATAL) || level.contains(Level::ERROR) {
            tracing::error!("{}", line);
        } else if level.contains(Level::WARN) {
            tracing::warn!("{}", line);
        } else if level.contains(Level::INFO) {
            tracing::info!("{}", line);
        } else if level.contains(Level::DEBUG) {
            tracing::debug!("{}", line);
        } else {
            tracing::trace!("{}", line);
        }
        Ok(())
    }
}
