//! Level-based filtering decorator.

use std::sync::Arc;

use crate::logger::{KeyValues, Record};
use crate::{Level, LogError, Logger};

/// Wraps a logger and drops messages whose level is not in the mask.
///
/// If the level of a message is included in the mask it is forwarded,
/// otherwise it is silently dropped. Dropped lazy messages never invoke
/// their factory.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logtree::{Level, LevelFilter, Logger, NopLogger};
///
/// // Only messages at WARN or above pass through.
/// let inner: Arc<dyn Logger> = Arc::new(NopLogger);
/// let filtered = LevelFilter::new(inner, Level::BEYOND_WARN);
/// filtered.log(Level::DEBUG, "dropped", &[]).unwrap();
/// filtered.log(Level::ERROR, "forwarded", &[]).unwrap();
/// ```
pub struct LevelFilter {
    inner: Arc<dyn Logger>,
    mask: Level,
}

impl LevelFilter {
    /// Creates a filter forwarding only levels contained in `mask`.
    pub fn new(inner: Arc<dyn Logger>, mask: Level) -> LevelFilter {
        LevelFilter { inner, mask }
    }
}

impl Logger for LevelFilter {
    fn log(
        &self,
        level: Level,
        message: &str,
        key_values: KeyValues<'_>,
    ) -> Result<(), LogError> {
        if !self.mask.contains(level) {
            return Ok(());
        }
        self.inner.log(level, message, key_values)
    }

    fn log_lazy(
        &self,
        level: Level,
        factory: &dyn Fn() -> Record,
    ) -> Result<(), LogError> {
        if !self.mask.contains(level) {
            return Ok(());
        }
        self.inner.log_lazy(level, factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogRecorder;

    #[test]
    fn test_filter_forwards_levels_in_mask() {
        let recorder = Arc::new(LogRecorder::new());
        let filtered = LevelFilter::new(recorder.clone(), Level::BEYOND_WARN);

        filtered.log(Level::WARN, "kept", &[]).unwrap();
        filtered.log(Level::FATAL, "kept too", &[]).unwrap();

        assert_eq!(recorder.len(), 2);
    }

    #[test]
    fn test_filter_drops_levels_outside_mask() {
        let recorder = Arc::new(LogRecorder::new());
        let filtered = LevelFilter::new(recorder.clone(), Level::BEYOND_WARN);

        filtered.log(Level::DEBUG, "dropped", &[]).unwrap();
        filtered.log(Level::INFO, "dropped", &[]).unwrap();

        assert!(recorder.is_empty());
    }

    #[test]
    fn test_filter_skips_lazy_factory_when_dropped() {
        let recorder = Arc::new(LogRecorder::new());
        let filtered = LevelFilter::new(recorder.clone(), Level::ERROR);

        filtered
            .log_lazy(Level::DEBUG, &|| {
                panic!("factory must not run for a filtered level")
            })
            .unwrap();

        assert!(recorder.is_empty());
    }

    #[test]
    fn test_filter_runs_lazy_factory_when_kept() {
        let recorder = Arc::new(LogRecorder::new());
        let filtered = LevelFilter::new(recorder.clone(), Level::ERROR);

        filtered
            .log_lazy(Level::ERROR, &|| Record::message("built"))
            .unwrap();

        assert_eq!(recorder.len(), 1);
        assert_eq!(recorder.messages()[0].message, "built");
    }
}
