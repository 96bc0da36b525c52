use thiserror::Error;

/// Errors returned by [`Logger`](crate::Logger) implementations.
///
/// The registry itself never fails; only loggers that perform I/O or talk to
/// an external sink can report errors.
#[derive(Debug, Error)]
pub enum LogError {
    /// Writing the formatted message to the output sink failed.
    #[error("failed to write log output")]
    Write(#[from] std::io::Error),

    /// Formatting the message or one of its values failed.
    #[error("failed to format log message")]
    Format(#[from] std::fmt::Error),

    /// A custom logger implementation failed for its own reason.
    #[error("log sink failed: {0}")]
    Sink(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_display() {
        let err = LogError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(err.to_string(), "failed to write log output");
    }

    #[test]
    fn test_sink_display() {
        let err = LogError::Sink("socket closed".to_string());
        assert_eq!(err.to_string(), "log sink failed: socket closed");
    }

    #[test]
    fn test_error_trait() {
        let err: &dyn std::error::Error = &LogError::Sink("x".to_string());
        assert!(err.to_string().contains("log sink failed"));
    }
}
