//! Leveled logging macros for [`Logger`](crate::log::Logger) and
//! [`LoggerHandle`](crate::log::LoggerHandle).
//!
//! These provide the templated call shape: the format string is a literal, so
//! `format!` checks placeholder/argument arity at compile time. A mismatch is
//! a build error, never a mis-rendered line:
//!
//! ```compile_fail
//! use rustylog::log::{LogLevel, Logger, LoggerConfig, NoopLogSink};
//!
//! let logger = Logger::with_sink(NoopLogSink, LoggerConfig::new(LogLevel::Info));
//! let _ = rustylog::logger_info!(logger, "{} and {}", 1); // one argument missing
//! ```
//!
//! # Feature Flags
//! Specific log levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`, `log-critical`.
//!
//! If a feature is disabled, the corresponding macros expand to a no-op
//! `Ok(())`, removing all formatting and allocation overhead at compile time.
//! The runtime threshold still applies on top of whatever is compiled in.

// ============================================================================
// 1. GENERIC INTERNAL MACRO (The "Worker")
// ============================================================================
// Kept available so the enabled macros below can use it. Callers generally
// use the level-specific macros to get feature-gating.

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.log($lvl, &__msg)
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Trace, $($arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! logger_trace {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = &$logger;
        ::core::result::Result::<(), $crate::log_error::LogError>::Ok(())
    }};
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = &$logger;
        ::core::result::Result::<(), $crate::log_error::LogError>::Ok(())
    }};
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = &$logger;
        ::core::result::Result::<(), $crate::log_error::LogError>::Ok(())
    }};
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Warn, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = &$logger;
        ::core::result::Result::<(), $crate::log_error::LogError>::Ok(())
    }};
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = &$logger;
        ::core::result::Result::<(), $crate::log_error::LogError>::Ok(())
    }};
}

// ---------------------- CRITICAL ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-critical")]
#[macro_export]
macro_rules! logger_critical { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Critical, $($arg)*) } }

#[cfg(not(feature = "log-critical"))]
#[macro_export]
macro_rules! logger_critical {
    ($logger:expr, $($arg:tt)*) => {{
        let _ = &$logger;
        ::core::result::Result::<(), $crate::log_error::LogError>::Ok(())
    }};
}
