//! Append-only daily log

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::format::{header_line, record_line};
use super::storage::{FsLogStorage, LogStorage};
use crate::error::{Error, Result};
use crate::models::DayRecord;
use crate::questions::QUESTION_COUNT;

/// Where an existing log lives, ready to hand to a sharing facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLocation {
    path: PathBuf,
}

impl LogLocation {
    pub(crate) const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for LogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// What a successful append did to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppendOutcome {
    /// The log did not exist; header and row were written together
    Created,
    /// The row was appended to an existing log
    Appended,
}

/// The persistence core: one CSV file that only ever grows.
///
/// The header is written exactly once, when the file is created. Each
/// successful save adds exactly one row at the end and never touches earlier
/// bytes. Rows with the same date are kept side by side.
#[derive(Debug, Clone)]
pub struct DailyLog<S = FsLogStorage> {
    path: PathBuf,
    question_count: usize,
    storage: S,
}

impl DailyLog<FsLogStorage> {
    /// Open a filesystem-backed log for the built-in question set
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_storage(path, QUESTION_COUNT, FsLogStorage)
    }
}

impl<S: LogStorage> DailyLog<S> {
    pub fn with_storage(path: impl Into<PathBuf>, question_count: usize, storage: S) -> Self {
        Self {
            path: path.into(),
            question_count,
            storage,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn question_count(&self) -> usize {
        self.question_count
    }

    /// Persist one record as a new row, creating the log with its header first
    /// if needed.
    ///
    /// Records whose answer count differs from the configured question count
    /// are rejected before any I/O, so the column count stays consistent.
    pub fn append_record(&self, record: &DayRecord) -> Result<AppendOutcome> {
        if record.answers.len() != self.question_count {
            return Err(Error::InvalidRecord(format!(
                "expected {} answers, got {}",
                self.question_count,
                record.answers.len()
            )));
        }

        let row = record_line(record);
        let exists = self
            .storage
            .exists(&self.path)
            .map_err(|source| Error::persistence(&self.path, source))?;

        if exists {
            self.storage
                .append_to(&self.path, &row)
                .map_err(|source| Error::persistence(&self.path, source))?;
            tracing::debug!(path = %self.path.display(), date = %record.date, "Appended day record");
            Ok(AppendOutcome::Appended)
        } else {
            let mut content = header_line(self.question_count);
            content.push_str(&row);
            self.storage
                .write_new(&self.path, &content)
                .map_err(|source| Error::persistence(&self.path, source))?;
            tracing::info!(path = %self.path.display(), date = %record.date, "Created daily log");
            Ok(AppendOutcome::Created)
        }
    }

    /// Locate the log for export.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet. Content is never
    /// read or validated.
    pub fn export_log(&self) -> Result<Option<LogLocation>> {
        let exists = self.storage.exists(&self.path)?;
        if !exists {
            tracing::debug!(path = %self.path.display(), "Export requested before any save");
            return Ok(None);
        }

        let path = std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone());
        Ok(Some(LogLocation::new(path)))
    }
}
