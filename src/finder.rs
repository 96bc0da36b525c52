//! Finding named loggers.

use std::sync::Arc;

use crate::{LogManager, Logger};

/// Looks up loggers by name.
///
/// All implementations must be safe for concurrent use. The main
/// implementation is [`LogManager`]; [`SingleLoggerFinder`] covers the
/// degenerate case where every name maps to the same logger.
pub trait LogFinder: Send + Sync {
    /// Returns the logger for `name`, or `None` if no logger applies.
    fn find(&self, name: &str) -> Option<Arc<dyn Logger>>;
}

impl LogFinder for LogManager {
    fn find(&self, name: &str) -> Option<Arc<dyn Logger>> {
        LogManager::find(self, name)
    }
}

/// A [`LogFinder`] whose `find` always returns the same logger.
///
/// Useful when there is only one logger in play but a function expects a
/// [`LogFinder`]. The logger may be absent, in which case every lookup
/// returns `None`.
pub struct SingleLoggerFinder {
    logger: Option<Arc<dyn Logger>>,
}

impl SingleLoggerFinder {
    /// Creates a finder that resolves every name to `logger`.
    pub fn new(logger: Option<Arc<dyn Logger>>) -> SingleLoggerFinder {
        SingleLoggerFinder { logger }
    }
}

impl LogFinder for SingleLoggerFinder {
    fn find(&self, _name: &str) -> Option<Arc<dyn Logger>> {
        self.logger.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NopLogger;

    #[test]
    fn test_single_logger_finder_returns_same_logger() {
        let logger: Arc<dyn Logger> = Arc::new(NopLogger);
        let finder = SingleLoggerFinder::new(Some(Arc::clone(&logger)));

        for name in ["", "a", "a.b.c", "anything.at.all"] {
            let found = finder.find(name).unwrap();
            assert!(Arc::ptr_eq(&found, &logger));
        }
    }

    #[test]
    fn test_single_logger_finder_absent() {
        let finder = SingleLoggerFinder::new(None);
        assert!(finder.find("a").is_none());
        assert!(finder.find("").is_none());
    }

    #[test]
    fn test_manager_as_log_finder() {
        let manager = LogManager::new();
        manager.set("a", Arc::new(NopLogger));

        let finder: &dyn LogFinder = &manager;
        assert!(finder.find("a.b").is_some());
        assert!(finder.find("x").is_none());
    }
}
