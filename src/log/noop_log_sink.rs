use std::io;

use crate::log::log_sink::LogSink;

/// Sink that drops every line. Used by tests and to disable output entirely.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn append(&self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}
