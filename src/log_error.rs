use std::{fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum LogError {
    /// The destination file could not be created or opened for append.
    Open { path: PathBuf, source: io::Error },
    /// The sink rejected a write after construction (disk full, handle gone).
    Write(io::Error),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LogError::*;
        match self {
            Open { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Write(source) => write!(f, "cannot write to log sink: {source}"),
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogError::Open { source, .. } | LogError::Write(source) => Some(source),
        }
    }
}

impl From<io::Error> for LogError {
    fn from(source: io::Error) -> Self {
        LogError::Write(source)
    }
}
