use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::models::LogRecord;

/// Appends normalized records to a plain-text log, one line per record.
///
/// The file handle is acquired per call (open-for-append-or-create, write,
/// release); the single-writer property comes from the event pump, which is
/// the only caller while a session is tracking.
#[derive(Debug, Clone)]
pub struct LogAppender {
    path: PathBuf,
}

impl LogAppender {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open log file {}", self.path.display()))?;
        writeln!(file, "{}", record.to_line())
            .with_context(|| format!("failed to append to {}", self.path.display()))
    }

    /// Deletes the log file so the next session starts clean. A missing
    /// file is not an error.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err)
                .with_context(|| format!("failed to delete log file {}", self.path.display())),
        }
    }
}
