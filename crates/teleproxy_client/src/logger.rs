//! Logging capability injected into the client.

/// A diagnostic logging sink.
///
/// The client logs routing decisions at debug level and proxying
/// failures at error level. Logging is best-effort; implementations
/// must not fail.
pub trait Logger: Send + Sync {
    /// Logs a debug-level message.
    fn debug(&self, message: &str);

    /// Logs an error-level message.
    fn error(&self, message: &str);
}

/// A logger that discards everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// A logger that forwards to the `tracing` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// A logger that captures messages for assertions.
    #[derive(Default)]
    pub struct CapturingLogger {
        pub lines: Mutex<Vec<(String, String)>>,
    }

    impl Logger for CapturingLogger {
        fn debug(&self, message: &str) {
            self.lines.lock().push(("debug".into(), message.into()));
        }

        fn error(&self, message: &str) {
            self.lines.lock().push(("error".into(), message.into()));
        }
    }

    #[test]
    fn noop_logger_accepts_everything() {
        let logger = NoopLogger;
        logger.debug("ignored");
        logger.error("also ignored");
    }

    #[test]
    fn capturing_logger_records_levels() {
        let logger = CapturingLogger::default();
        logger.debug("routing");
        logger.error("failed");

        let lines = logger.lines.lock();
        assert_eq!(lines[0], ("debug".into(), "routing".into()));
        assert_eq!(lines[1], ("error".into(), "failed".into()));
    }
}
