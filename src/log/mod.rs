pub mod file_sink;
pub mod log_level;
pub mod log_macros;
pub mod log_msg;
pub mod log_sink;
pub mod logger;
pub mod logger_handle;
pub mod noop_log_sink;

pub use file_sink::FileSink;
pub use log_level::{LogLevel, ParseLevelError};
pub use log_msg::{LinePrefix, LogMsg};
pub use log_sink::LogSink;
pub use logger::{Clock, Logger, LoggerConfig};
pub use logger_handle::LoggerHandle;
pub use noop_log_sink::NoopLogSink;
