use chrono::{DateTime, FixedOffset};

use crate::log::log_level::LogLevel;

/// Timestamp layout for rendered lines: `YYYY-MM-DD HH:MM:SS.mmm`.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Controls which metadata prefix a rendered line carries.
///
/// The upstream project grew three near-identical loggers that differed only
/// in this prefix; here it is a single construction-time option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinePrefix {
    /// `[timestamp] [LEVEL] message`
    #[default]
    Full,
    /// `[LEVEL] message`
    LevelOnly,
    /// `message` with no prefix at all.
    Bare,
}

/// A single log record that passed the threshold filter.
///
/// Carries the severity, the wall-clock timestamp captured at emit time, and
/// the fully-rendered message text.
#[derive(Debug, Clone)]
pub struct LogMsg {
    /// The severity level of the record.
    pub level: LogLevel,
    /// Wall-clock time captured after the record passed the filter.
    pub ts: DateTime<FixedOffset>,
    /// The rendered message payload.
    pub text: String,
}

impl LogMsg {
    pub fn new(level: LogLevel, text: impl Into<String>, ts: DateTime<FixedOffset>) -> Self {
        Self {
            level,
            ts,
            text: text.into(),
        }
    }

    /// Renders the record as one output line, without the trailing terminator.
    #[must_use]
    pub fn format_line(&self, prefix: LinePrefix) -> String {
        match prefix {
            LinePrefix::Full => format!(
                "[{}] [{}] {}",
                self.ts.format(TIMESTAMP_FORMAT),
                self.level.as_str(),
                self.text
            ),
            LinePrefix::LevelOnly => format!("[{}] {}", self.level.as_str(), self.text),
            LinePrefix::Bare => self.text.clone(),
        }
    }
}
