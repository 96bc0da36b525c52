//! Per-level shortcuts over a logger.

use std::sync::Arc;

use crate::logger::KeyValues;
use crate::{Level, Logger, NopLogger};

/// Wraps a logger with fire-and-forget, per-level shortcut methods.
///
/// The shortcuts discard the logger's result; use [`Logger::log`] directly
/// when failures matter. An absent logger maps to [`NopLogger`], so a
/// `LoggerOp` is always safe to call.
///
/// Format-string variants exist as macros: [`debugf!`](crate::debugf),
/// [`infof!`](crate::infof), [`warnf!`](crate::warnf),
/// [`errorf!`](crate::errorf), [`fatalf!`](crate::fatalf).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logtree::{infof, LoggerOp, NopLogger};
///
/// let op = LoggerOp::new(Some(Arc::new(NopLogger)));
/// op.info("service started");
/// op.info_kv(&[("port", &8080)]);
/// infof!(op, "listening on port {}", 8080);
/// ```
pub struct LoggerOp {
    logger: Arc<dyn Logger>,
}

macro_rules! level_shortcuts {
    ($($(#[$doc:meta])* $name:ident, $kv_name:ident => $level:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self, message: &str) {
                let _ = self.logger.log($level, message, &[]);
            }

            /// Key-value-only variant, with an empty message.
            pub fn $kv_name(&self, key_values: KeyValues<'_>) {
                let _ = self.logger.log($level, "", key_values);
            }
        )*
    };
}

impl LoggerOp {
    /// Wraps the given logger; `None` falls back to [`NopLogger`].
    pub fn new(logger: Option<Arc<dyn Logger>>) -> LoggerOp {
        LoggerOp {
            logger: logger.unwrap_or_else(|| Arc::new(NopLogger)),
        }
    }

    /// The wrapped logger.
    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    level_shortcuts! {
        /// Logs a debug message, discarding any sink error.
        debug, debug_kv => Level::DEBUG;
        /// Logs an info message, discarding any sink error.
        info, info_kv => Level::INFO;
        /// Logs a warn message, discarding any sink error.
        warn, warn_kv => Level::WARN;
        /// Logs an error message, discarding any sink error.
        error, error_kv => Level::ERROR;
        /// Logs a fatal message, discarding any sink error.
        fatal, fatal_kv => Level::FATAL;
    }
}

/// Logs a formatted debug message through a [`LoggerOp`].
#[macro_export]
macro_rules! debugf {
    ($op:expr, $($arg:tt)*) => {
        $op.debug(&format!($($arg)*))
    };
}

/// Logs a formatted info message through a [`LoggerOp`].
#[macro_export]
macro_rules! infof {
    ($op:expr, $($arg:tt)*) => {
        $op.info(&format!($($arg)*))
    };
}

/// Logs a formatted warn message through a [`LoggerOp`].
#[macro_export]
macro_rules! warnf {
    ($op:expr, $($arg:tt)*) => {
        $op.warn(&format!($($arg)*))
    };
}

/// Logs a formatted error message through a [`LoggerOp`].
#[macro_export]
macro_rules! errorf {
    ($op:expr, $($arg:tt)*) => {
        $op.error(&format!($($arg)*))
    };
}

/// Logs a formatted fatal message through a [`LoggerOp`].
#[macro_export]
macro_rules! fatalf {
    ($op:expr, $($arg:tt)*) => {
        $op.fatal(&format!($($arg)*))
    };
}
