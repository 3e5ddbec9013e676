use std::sync::Arc;

use crate::{
    log::{log_level::LogLevel, logger::Logger},
    log_error::LogError,
};

/// Lightweight, cloneable handle to a shared [`Logger`].
///
/// The typical pattern is one long-lived logger per process or subsystem:
/// construct it at startup, wrap it in a handle, and clone the handle into
/// whatever needs to emit. This replaces the static logger globals of the
/// upstream demos with explicit shared ownership.
///
/// # Examples
/// ```no_run
/// use rustylog::log::{LogLevel, Logger, LoggerHandle};
///
/// let handle = Logger::new(LogLevel::Info, "app.log")?.into_handle();
/// let worker = handle.clone();
/// std::thread::spawn(move || {
///     let _ = worker.info("worker started");
/// });
/// handle.info("main started")?;
/// # Ok::<(), rustylog::log_error::LogError>(())
/// ```
#[derive(Clone)]
pub struct LoggerHandle {
    inner: Arc<Logger>,
}

impl Logger {
    /// Wraps this logger in a cloneable shared handle.
    #[must_use]
    pub fn into_handle(self) -> LoggerHandle {
        LoggerHandle {
            inner: Arc::new(self),
        }
    }
}

impl LoggerHandle {
    /// Emits `text` at `level`. See [`Logger::log`] for errors.
    pub fn log(&self, level: LogLevel, text: &str) -> Result<(), LogError> {
        self.inner.log(level, text)
    }

    /// Replaces the shared threshold, visible to every clone of the handle.
    pub fn set_level(&self, level: LogLevel) {
        self.inner.set_level(level);
    }

    /// Returns the current shared threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.inner.level()
    }

    /// Emits at [`LogLevel::Trace`].
    pub fn trace(&self, text: &str) -> Result<(), LogError> {
        self.inner.trace(text)
    }

    /// Emits at [`LogLevel::Debug`].
    pub fn debug(&self, text: &str) -> Result<(), LogError> {
        self.inner.debug(text)
    }

    /// Emits at [`LogLevel::Info`].
    pub fn info(&self, text: &str) -> Result<(), LogError> {
        self.inner.info(text)
    }

    /// Emits at [`LogLevel::Warn`].
    pub fn warn(&self, text: &str) -> Result<(), LogError> {
        self.inner.warn(text)
    }

    /// Emits at [`LogLevel::Error`].
    pub fn error(&self, text: &str) -> Result<(), LogError> {
        self.inner.error(text)
    }

    /// Emits at [`LogLevel::Critical`].
    pub fn critical(&self, text: &str) -> Result<(), LogError> {
        self.inner.critical(text)
    }

    /// Flushes the underlying sink.
    pub fn flush(&self) -> Result<(), LogError> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::{logger::LoggerConfig, noop_log_sink::NoopLogSink};

    #[test]
    fn clones_share_the_threshold() {
        let handle = Logger::with_sink(NoopLogSink, LoggerConfig::new(LogLevel::Info)).into_handle();
        let other = handle.clone();

        other.set_level(LogLevel::Critical);
        assert_eq!(handle.level(), LogLevel::Critical);
        assert_eq!(other.level(), LogLevel::Critical);
    }

    #[test]
    fn handle_forwards_emits() {
        let handle = Logger::with_sink(NoopLogSink, LoggerConfig::new(LogLevel::Trace)).into_handle();
        handle.trace("t").unwrap();
        handle.debug("d").unwrap();
        handle.info("i").unwrap();
        handle.warn("w").unwrap();
        handle.error("e").unwrap();
        handle.critical("c").unwrap();
        handle.log(LogLevel::Info, "funnel").unwrap();
        handle.flush().unwrap();
    }
}
