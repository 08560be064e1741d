//! Hand the daily log to something outside the app.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::log::format::DATE_FORMAT;
use crate::log::LogLocation;
use crate::util::compact_text;

/// A platform sharing facility that accepts the log's location.
pub trait ShareTarget {
    /// Share the log, returning where it was handed off to.
    fn share(&self, location: &LogLocation) -> Result<PathBuf>;
}

/// Copies the log to a destination file or directory.
#[derive(Debug, Clone)]
pub struct CopyShare {
    destination: PathBuf,
    date: NaiveDate,
}

impl CopyShare {
    /// `date` names the copy when `destination` is an existing directory.
    pub fn new(destination: impl Into<PathBuf>, date: NaiveDate) -> Self {
        Self {
            destination: destination.into(),
            date,
        }
    }

    /// Final file path the log will be copied to.
    pub fn resolved_destination(&self) -> PathBuf {
        if self.destination.is_dir() {
            self.destination
                .join(suggested_export_file_name(self.date))
        } else {
            self.destination.clone()
        }
    }
}

impl ShareTarget for CopyShare {
    fn share(&self, location: &LogLocation) -> Result<PathBuf> {
        let destination = self.resolved_destination();
        if same_file(location.path(), &destination) {
            return Err(Error::Share(format!(
                "destination {} is the log itself",
                destination.display()
            )));
        }

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::copy(location.path(), &destination).map_err(|error| {
            Error::Share(format!(
                "failed to copy log to {}: {error}",
                destination.display()
            ))
        })?;
        Ok(destination)
    }
}

/// Opens the log with the desktop's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShare;

impl ShareTarget for SystemShare {
    fn share(&self, location: &LogLocation) -> Result<PathBuf> {
        open_with(system_opener(), location.path(), opener_reports_status())?;
        Ok(location.path().to_path_buf())
    }
}

/// Command used to open a file with its default application.
pub const fn system_opener() -> &'static str {
    if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

/// Whether the opener's exit status means anything.
///
/// `explorer` exits with 1 even after opening the file.
const fn opener_reports_status() -> bool {
    !cfg!(target_os = "windows")
}

fn open_with(opener: &str, path: &Path, check_status: bool) -> Result<()> {
    let mut command = Command::new(opener);
    command.arg(path).stdin(Stdio::null()).stdout(Stdio::null());

    if !check_status {
        command
            .stderr(Stdio::null())
            .spawn()
            .map_err(|error| Error::Share(format!("failed to launch {opener}: {error}")))?;
        return Ok(());
    }

    let output = command
        .stderr(Stdio::piped())
        .output()
        .map_err(|error| Error::Share(format!("failed to launch {opener}: {error}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Share(format!(
            "{opener} exited with {}: {}",
            output.status,
            compact_text(&stderr)
        )));
    }

    Ok(())
}

/// Build a deterministic default file name for export copies.
#[must_use]
pub fn suggested_export_file_name(date: NaiveDate) -> String {
    format!("wellness-export-{}.csv", date.format(DATE_FORMAT))
}

fn same_file(left: &Path, right: &Path) -> bool {
    match (left.canonicalize(), right.canonicalize()) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::DailyLog;
    use crate::models::DayRecord;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn saved_log(dir: &Path) -> LogLocation {
        let log = DailyLog::open(dir.join("wellness_data.csv"));
        log.append_record(&DayRecord::new(date(), log.question_count()))
            .unwrap();
        log.export_log().unwrap().unwrap()
    }

    #[test]
    fn suggested_export_file_name_uses_date() {
        assert_eq!(
            suggested_export_file_name(date()),
            "wellness-export-2024-03-15.csv"
        );
    }

    #[test]
    fn copy_share_into_directory_uses_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let location = saved_log(dir.path());

        let copied = CopyShare::new(out.path(), date()).share(&location).unwrap();

        assert_eq!(copied, out.path().join("wellness-export-2024-03-15.csv"));
        assert_eq!(
            std::fs::read(&copied).unwrap(),
            std::fs::read(location.path()).unwrap()
        );
    }

    #[test]
    fn copy_share_to_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let location = saved_log(dir.path());
        let target = dir.path().join("out").join("copy.csv");

        let copied = CopyShare::new(&target, date()).share(&location).unwrap();

        assert_eq!(copied, target);
        assert!(target.exists());
    }

    #[test]
    fn copy_share_refuses_to_overwrite_log() {
        let dir = tempfile::tempdir().unwrap();
        let location = saved_log(dir.path());

        let error = CopyShare::new(location.path(), date())
            .share(&location)
            .unwrap_err();

        assert!(matches!(error, Error::Share(_)));
    }

    #[test]
    fn system_opener_is_defined() {
        assert!(!system_opener().is_empty());
    }

    #[test]
    fn missing_opener_is_share_failure() {
        let error = open_with("wellness-no-such-opener", Path::new("log.csv"), true).unwrap_err();

        assert!(matches!(error, Error::Share(message) if message.contains("failed to launch")));
    }

    #[cfg(unix)]
    #[test]
    fn opener_exit_status_is_checked_only_when_meaningful() {
        let error = open_with("false", Path::new("log.csv"), true).unwrap_err();
        assert!(matches!(error, Error::Share(message) if message.contains("false exited with")));

        open_with("false", Path::new("log.csv"), false).unwrap();
        open_with("true", Path::new("log.csv"), true).unwrap();
    }
}
