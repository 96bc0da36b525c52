//! No-operation logger.

use crate::logger::{KeyValues, Record};
use crate::{Level, LogError, Logger};

/// A logger that discards all messages and never fails.
///
/// Useful as the fallback when a lookup returns no logger, and in tests
/// where log output would be noise.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logtree::{Level, Logger, NopLogger};
///
/// let logger: Arc<dyn Logger> = Arc::new(NopLogger);
/// logger.log(Level::INFO, "this message is discarded", &[]).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn log(
        &self,
        _level: Level,
        _message: &str,
        _key_values: KeyValues<'_>,
    ) -> Result<(), LogError> {
        Ok(())
    }

    fn log_lazy(
        &self,
        _level: Level,
        _factory: &dyn Fn() -> Record,
    ) -> Result<(), LogError> {
        // The message is dropped anyway; never pay for building it.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nop_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NopLogger>();
    }

    #[test]
    fn test_nop_discards_everything() {
        let logger = NopLogger;
        logger.log(Level::FATAL, "ignored", &[]).unwrap();
        logger
            .log(Level::INFO, "ignored", &[("key", &"value")])
            .unwrap();
    }

    #[test]
    fn test_nop_never_invokes_lazy_factory() {
        let logger = NopLogger;
        logger
            .log_lazy(Level::DEBUG, &|| {
                panic!("factory must not run for a no-op logger")
            })
            .unwrap();
    }
}
