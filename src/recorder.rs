//! Recording logger for tests.

use std::fmt;
use std::sync::Mutex;

use crate::logger::KeyValues;
use crate::text::render_line;
use crate::{Level, LogError, Logger};

/// One message captured by a [`LogRecorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMessage {
    /// The level the message was logged at.
    pub level: Level,
    /// The message text.
    pub message: String,
    /// Key-value pairs, rendered to strings at capture time.
    pub key_values: Vec<(String, String)>,
}

/// A logger that records messages so tests can assert on them.
///
/// Messages are captured in order behind a mutex, so a shared recorder is
/// safe to log to from several threads. [`lines`](LogRecorder::lines)
/// renders the captured messages in the same format
/// [`TextLogger`](crate::TextLogger) writes.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logtree::{Level, LogRecorder, Logger};
///
/// let recorder = Arc::new(LogRecorder::new());
/// recorder.log(Level::INFO, "captured", &[("k", &"v")]).unwrap();
///
/// assert_eq!(recorder.lines(), vec!["INFO captured k=v".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct LogRecorder {
    messages: Mutex<Vec<RecordedMessage>>,
}

impl LogRecorder {
    /// Creates an empty recorder.
    pub fn new() -> LogRecorder {
        LogRecorder::default()
    }

    /// Returns a copy of the recorded messages, in logging order.
    pub fn messages(&self) -> Vec<RecordedMessage> {
        self.messages
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .len()
    }

    /// `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards all recorded messages.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clear();
    }

    /// Renders each recorded message as a text line, in the
    /// [`TextLogger`](crate::TextLogger) format.
    pub fn lines(&self) -> Vec<String> {
        self.messages()
            .iter()
            .map(|msg| {
                let pairs: Vec<(&str, &dyn fmt::Display)> = msg
                    .key_values
                    .iter()
                    .map(|(k, v)| (k.as_str(), v as &dyn fmt::Display))
                    .collect();
                // Rendering to a String cannot fail for these value types.
                render_line(msg.level, &msg.message, &pairs).unwrap_or_default()
            })
            .collect()
    }
}

impl Logger for LogRecorder {
    fn log(
        &self,
        level: Level,
        message: &str,
        key_values: KeyValues<'_>,
    ) -> Result<(), LogError> {
        let recorded = RecordedMessage {
            level,
            message: message.to_string(),
            key_values: key_values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        self.messages
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(recorded);
        Ok(())
    }
}

impl fmt::Display for LogRecorder {
    /// The whole captured log, one formatted line per message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
