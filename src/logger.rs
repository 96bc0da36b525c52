//! The logger capability.
//!
//! [`Logger`] is the contract every logging backend implements. The registry
//! ([`LogManager`](crate::LogManager)) stores loggers as `Arc<dyn Logger>`
//! and never inspects their behavior; the concrete variants in this crate
//! ([`NopLogger`](crate::NopLogger), [`TextLogger`](crate::TextLogger),
//! [`LevelFilter`](crate::LevelFilter), [`LogRecorder`](crate::LogRecorder),
//! [`TracingLogger`](crate::TracingLogger)) are independent implementations
//! of the same trait.

use std::fmt;

use crate::{Level, LogError};

/// Borrowed key-value pairs attached to a log message.
///
/// Keys pair with values by construction, so there is no "unpaired trailing
/// element" case to define away.
pub type KeyValues<'a> = &'a [(&'a str, &'a dyn fmt::Display)];

/// An owned log message, produced by the factory passed to
/// [`Logger::log_lazy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// The message text.
    pub message: String,
    /// Key-value pairs extending the message.
    pub key_values: Vec<(String, String)>,
}

impl Record {
    /// Creates a record with a message and no key-value pairs.
    pub fn message(message: impl Into<String>) -> Record {
        Record {
            message: message.into(),
            key_values: Vec::new(),
        }
    }
}

/// The logging action.
///
/// All methods must be safe for concurrent use; implementations are stored
/// and shared as `Arc<dyn Logger>`.
pub trait Logger: Send + Sync {
    /// Logs a message at the given level.
    ///
    /// Whether the message is actually processed depends on the
    /// implementation; a filtered or no-op logger may drop it and still
    /// return `Ok`. If producing the message is expensive, use
    /// [`log_lazy`](Logger::log_lazy) instead.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying sink fails, e.g. an I/O error
    /// while writing the formatted line.
    fn log(
        &self,
        level: Level,
        message: &str,
        key_values: KeyValues<'_>,
    ) -> Result<(), LogError>;

    /// Like [`log`](Logger::log), but builds the message with a factory.
    ///
    /// Implementations that drop the message (filters, no-op loggers) must
    /// not invoke the factory, so callers can defer expensive message
    /// construction. If the factory panics, the panic propagates.
    fn log_lazy(
        &self,
        level: Level,
        factory: &dyn Fn() -> Record,
    ) -> Result<(), LogError> {
        let record = factory();
        let pairs: Vec<(&str, &dyn fmt::Display)> = record
            .key_values
            .iter()
            .map(|(key, value)| (key.as_str(), value as &dyn fmt::Display))
            .collect();
        self.log(level, &record.message, &pairs)
    }
}
