//! Plain-text line logger.

use std::io;
use std::sync::Mutex;

use crate::logger::KeyValues;
use crate::{Level, LogError, Logger};

/// Formats one message as a text line, without the trailing newline.
///
/// The format is `LEVEL MESSAGE KEY1=VALUE1 KEY2=VALUE2 ...`.
pub(crate) fn render_line(
    level: Level,
    message: &str,
    key_values: KeyValues<'_>,
) -> Result<String, std::fmt::Error> {
    use std::fmt::Write;

    let mut line = String::new();
    write!(line, "{} {}", level, message)?;
    for (key, value) in key_values {
        write!(line, " {}={}", key, value)?;
    }
    Ok(line)
}

/// A logger that writes `LEVEL MESSAGE KEY=VALUE ...` lines to a sink.
///
/// The sink is any `io::Write`; it sits behind a mutex so concurrent log
/// calls never interleave within a line.
///
/// # Example
///
/// ```
/// use logtree::{Level, Logger, TextLogger};
///
/// let logger = TextLogger::stderr();
/// logger.log(Level::INFO, "service started", &[("port", &8080)]).unwrap();
/// // Writes: INFO service started port=8080
/// ```
pub struct TextLogger {
    sink: Mutex<Box<dyn io::Write + Send>>,
}

impl TextLogger {
    /// Creates a logger writing to the given sink.
    pub fn new(sink: impl io::Write + Send + 'static) -> TextLogger {
        TextLogger {
            sink: Mutex::new(Box::new(sink)),
        }
    }

    /// Creates a logger writing to standard error.
    pub fn stderr() -> TextLogger {
        TextLogger::new(io::stderr())
    }
}

impl Logger for TextLogger {
    fn log(
        &self,
        level: Level,
        message: &str,
        key_values: KeyValues<'_>,
    ) -> Result<(), LogError> {
        let mut line = render_line(level, message, key_values)?;
        line.push('\n');

        let mut sink = self.sink.lock().unwrap_or_else(|p| p.into_inner());
        sink.write_all(line.as_bytes())?;
        Ok(())
    }
}
