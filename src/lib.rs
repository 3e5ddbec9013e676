//! RustyLog is a minimal leveled logging facility backed by an append-mode file.
//!
//! A [`log::Logger`] filters messages against a runtime threshold, timestamps
//! the ones that pass, and appends them to its sink one complete line at a
//! time. Construction picks the destination file; emitting is synchronous and
//! safe from any number of threads.
//!
//! ```no_run
//! use rustylog::log::{LogLevel, Logger};
//!
//! let logger = Logger::new(LogLevel::Info, "app.log")?;
//! logger.info("application started")?;
//! rustylog::logger_info!(logger, "loaded {} entries", 42)?;
//! # Ok::<(), rustylog::log_error::LogError>(())
//! ```

/// Logging primitives: levels, sinks, line rendering, and the `Logger` itself.
pub mod log;
/// Error types surfaced by logger construction and sink writes.
pub mod log_error;
