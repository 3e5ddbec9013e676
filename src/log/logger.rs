use std::{
    path::Path,
    sync::atomic::{AtomicU8, Ordering},
};

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::{
    log::{
        file_sink::FileSink,
        log_level::LogLevel,
        log_msg::{LinePrefix, LogMsg},
        log_sink::LogSink,
    },
    log_error::LogError,
};

/// Which wall clock timestamps are taken from.
///
/// The upstream behavior is local time with no zone suffix in the output;
/// `Utc` is offered for deployments that prefer unambiguous timestamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

impl Clock {
    fn now(self) -> DateTime<FixedOffset> {
        match self {
            Clock::Local => Local::now().fixed_offset(),
            Clock::Utc => Utc::now().fixed_offset(),
        }
    }
}

/// Construction-time options for a [`Logger`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Initial threshold; messages below it are suppressed.
    pub level: LogLevel,
    /// Metadata prefix carried by every rendered line.
    pub prefix: LinePrefix,
    /// Clock used for timestamps.
    pub clock: Clock,
}

impl LoggerConfig {
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }
}

/// Leveled logger writing one line per accepted message to its sink.
///
/// The threshold is a relaxed atomic so [`set_level`](Self::set_level) may
/// race with concurrent emits; the filter decision is eventually consistent,
/// which is the documented contract. Everything past the filter runs under
/// the sink's own mutual exclusion, so emitted lines never interleave.
pub struct Logger {
    threshold: AtomicU8,
    sink: Box<dyn LogSink>,
    prefix: LinePrefix,
    clock: Clock,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("prefix", &self.prefix)
            .field("clock", &self.clock)
            .field("sink", &"<dyn LogSink>")
            .finish()
    }
}

impl Logger {
    /// Opens `path` for append and builds a logger with the given threshold,
    /// a full metadata prefix, and local-time timestamps.
    ///
    /// # Errors
    /// Returns [`LogError::Open`] when the destination cannot be created or
    /// opened; a logger is never constructed around a dead sink.
    pub fn new<P: AsRef<Path>>(level: LogLevel, path: P) -> Result<Self, LogError> {
        Self::with_config(path, LoggerConfig::new(level))
    }

    /// Opens `path` for append with explicit prefix/clock options.
    ///
    /// # Errors
    /// Returns [`LogError::Open`] when the destination cannot be created or
    /// opened.
    pub fn with_config<P: AsRef<Path>>(path: P, config: LoggerConfig) -> Result<Self, LogError> {
        let sink = FileSink::open(path)?;
        Ok(Self::with_sink(sink, config))
    }

    /// Builds a logger around an arbitrary sink. Tests inject capture or
    /// no-op sinks through this.
    #[must_use]
    pub fn with_sink<S: LogSink + 'static>(sink: S, config: LoggerConfig) -> Self {
        Self {
            threshold: AtomicU8::new(config.level as u8),
            sink: Box::new(sink),
            prefix: config.prefix,
            clock: config.clock,
        }
    }

    /// Replaces the threshold. Effective for subsequent emit calls only.
    pub fn set_level(&self, level: LogLevel) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Returns the current threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Emits `text` at `level` if it passes the threshold filter.
    ///
    /// Below-threshold messages return without computing a timestamp or
    /// touching the sink. `LogLevel::Off` is not a message level and is
    /// always suppressed.
    ///
    /// # Errors
    /// Returns [`LogError::Write`] when the sink rejects the line. The error
    /// is propagated, never retried or swallowed.
    pub fn log(&self, level: LogLevel, text: &str) -> Result<(), LogError> {
        if level == LogLevel::Off || level < self.level() {
            return Ok(());
        }

        let msg = LogMsg::new(level, text, self.clock.now());
        let mut line = msg.format_line(self.prefix);
        line.push('\n');
        self.sink.append(&line).map_err(LogError::Write)
    }

    /// Emits at [`LogLevel::Trace`]. See [`log`](Self::log) for errors.
    pub fn trace(&self, text: &str) -> Result<(), LogError> {
        self.log(LogLevel::Trace, text)
    }

    /// Emits at [`LogLevel::Debug`]. See [`log`](Self::log) for errors.
    pub fn debug(&self, text: &str) -> Result<(), LogError> {
        self.log(LogLevel::Debug, text)
    }

    /// Emits at [`LogLevel::Info`]. See [`log`](Self::log) for errors.
    pub fn info(&self, text: &str) -> Result<(), LogError> {
        self.log(LogLevel::Info, text)
    }

    /// Emits at [`LogLevel::Warn`]. See [`log`](Self::log) for errors.
    pub fn warn(&self, text: &str) -> Result<(), LogError> {
        self.log(LogLevel::Warn, text)
    }

    /// Emits at [`LogLevel::Error`]. See [`log`](Self::log) for errors.
    pub fn error(&self, text: &str) -> Result<(), LogError> {
        self.log(LogLevel::Error, text)
    }

    /// Emits at [`LogLevel::Critical`]. See [`log`](Self::log) for errors.
    pub fn critical(&self, text: &str) -> Result<(), LogError> {
        self.log(LogLevel::Critical, text)
    }

    /// Flushes the sink. The file sink flushes on every append, so this only
    /// matters for custom sinks that buffer.
    ///
    /// # Errors
    /// Returns [`LogError::Write`] when the sink fails to flush.
    pub fn flush(&self) -> Result<(), LogError> {
        self.sink.flush().map_err(LogError::Write)
    }
}
