use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use crate::{log::log_sink::LogSink, log_error::LogError};

/// Append-mode file sink.
///
/// The file is opened once at construction (created if absent) and owned for
/// the sink's lifetime. A mutex serializes appends so each line reaches the
/// file as one uninterrupted write, and every append is flushed before the
/// call returns.
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileSink {
    /// Opens `path` for append, creating it if it does not exist.
    ///
    /// # Errors
    /// Returns [`LogError::Open`] when the file cannot be created or opened
    /// (permissions, missing parent directory, unusable path).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    /// Returns the path of the log file this sink appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn append(&self, line: &str) -> io::Result<()> {
        // A poisoned lock only means another appender panicked mid-write;
        // the file handle itself is still usable.
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(line.as_bytes())?;
        file.flush()
    }

    fn flush(&self) -> io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.flush()
    }
}
