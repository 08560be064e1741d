//! Async wrapper around the daily log used by interactive clients.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::export::ShareTarget;
use crate::log::{AppendOutcome, DailyLog, FsLogStorage, LogLocation, LogStorage};
use crate::models::DayRecord;

/// Runs each save or export as one unit of work off the async runtime.
///
/// Storage I/O happens on tokio's blocking pool. A blocking write cannot be
/// cancelled, so the write timeout only flags a slow save: once it elapses a
/// warning is logged and the caller keeps waiting for the real outcome.
pub struct LogService<S = FsLogStorage> {
    log: Arc<DailyLog<S>>,
    write_timeout: Option<Duration>,
}

impl<S> Clone for LogService<S> {
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
            write_timeout: self.write_timeout,
        }
    }
}

impl LogService<FsLogStorage> {
    /// Open a filesystem-backed service at the given log path.
    pub fn open_path(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(DailyLog::open(path))
    }
}

impl<S> LogService<S>
where
    S: LogStorage + Send + Sync + 'static,
{
    pub fn new(log: DailyLog<S>) -> Self {
        Self {
            log: Arc::new(log),
            write_timeout: None,
        }
    }

    #[must_use]
    pub fn with_write_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.write_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        self.log.path()
    }

    pub fn question_count(&self) -> usize {
        self.log.question_count()
    }

    /// Save one record. The record is moved in and dropped once written.
    pub async fn append_record(&self, record: DayRecord) -> Result<AppendOutcome> {
        let log = Arc::clone(&self.log);
        let handle = tokio::task::spawn_blocking(move || log.append_record(&record));
        self.await_write(handle).await
    }

    /// Locate the log for export; `None` when nothing was saved yet.
    pub async fn export_log(&self) -> Result<Option<LogLocation>> {
        let log = Arc::clone(&self.log);
        tokio::task::spawn_blocking(move || log.export_log())
            .await
            .map_err(|error| Error::Task(error.to_string()))?
    }

    /// Locate the log and hand it to `target`.
    ///
    /// Returns [`Error::LogNotFound`] when nothing was saved yet.
    pub async fn share_log<T>(&self, target: T) -> Result<LogLocation>
    where
        T: ShareTarget + Send + 'static,
    {
        let Some(location) = self.export_log().await? else {
            return Err(Error::LogNotFound(self.path().to_path_buf()));
        };

        let shared = location.clone();
        let handed_to = tokio::task::spawn_blocking(move || target.share(&shared))
            .await
            .map_err(|error| Error::Task(error.to_string()))??;

        tracing::info!(
            log = %location,
            destination = %handed_to.display(),
            "Shared daily log"
        );
        Ok(location)
    }

    async fn await_write(
        &self,
        mut handle: JoinHandle<Result<AppendOutcome>>,
    ) -> Result<AppendOutcome> {
        let joined = match self.write_timeout {
            Some(limit) => match tokio::time::timeout(limit, &mut handle).await {
                Ok(joined) => joined,
                Err(_) => {
                    tracing::warn!(
                        path = %self.path().display(),
                        ?limit,
                        "Log write is slower than the configured timeout, still waiting"
                    );
                    handle.await
                }
            },
            None => handle.await,
        };

        joined.map_err(|error| Error::Task(error.to_string()))?
    }
}
