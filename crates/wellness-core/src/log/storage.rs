//! Storage backend for the daily log

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Trait for the file operations the log needs.
///
/// Implementations must support appending without rewriting existing content.
pub trait LogStorage {
    /// Whether a log already exists at `path`
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Create `path` and write `content` in one go; fails if it already exists
    fn write_new(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Append `content` to an existing file at `path`
    fn append_to(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Local filesystem implementation of `LogStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLogStorage;

impl LogStorage for FsLogStorage {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn write_new(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().write(true).create_new(true).open(path)?;
        write_or_remove(path, file, content)
    }

    fn append_to(&self, path: &Path, content: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(path)?;
        let previous_len = file.metadata()?.len();
        append_or_truncate(path, &mut file, previous_len, content)
    }
}

/// An open log file that can be flushed to disk and cut back.
trait LogFile: Write {
    fn sync(&mut self) -> io::Result<()>;

    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl LogFile for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_data()
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

fn write_synced<F: LogFile>(file: &mut F, content: &str) -> io::Result<()> {
    file.write_all(content.as_bytes())?;
    file.sync()
}

/// Write a freshly created file, deleting it if the write fails.
fn write_or_remove<F: LogFile>(path: &Path, mut file: F, content: &str) -> io::Result<()> {
    let Err(error) = write_synced(&mut file, content) else {
        return Ok(());
    };

    // Windows refuses to remove a file that is still open.
    drop(file);
    if let Err(cleanup) = fs::remove_file(path) {
        tracing::warn!(
            path = %path.display(),
            error = %cleanup,
            "Failed to remove partially created log"
        );
    }
    Err(error)
}

/// Append to an existing file, cutting it back to `previous_len` on failure.
fn append_or_truncate<F: LogFile>(
    path: &Path,
    file: &mut F,
    previous_len: u64,
    content: &str,
) -> io::Result<()> {
    let Err(error) = write_synced(file, content) else {
        return Ok(());
    };

    // Drop any partial row so the file ends on a complete line again.
    if let Err(rollback) = file.truncate(previous_len) {
        tracing::warn!(
            path = %path.display(),
            error = %rollback,
            "Failed to roll back partial log append"
        );
    }
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Passes `budget` bytes through to the file, then fails like a full disk.
    struct ShortWrite {
        file: File,
        budget: usize,
    }

    impl Write for ShortWrite {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::other("disk full"));
            }
            let take = buf.len().min(self.budget);
            let written = self.file.write(&buf[..take])?;
            self.budget -= written;
            Ok(written)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.file.flush()
        }
    }

    impl LogFile for ShortWrite {
        fn sync(&mut self) -> io::Result<()> {
            self.file.sync()
        }

        fn truncate(&mut self, len: u64) -> io::Result<()> {
            self.file.truncate(len)
        }
    }

    #[test]
    fn write_new_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("log.csv");

        FsLogStorage.write_new(&path, "header\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "header\n");
    }

    #[test]
    fn write_new_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, "existing\n").unwrap();

        let error = FsLogStorage.write_new(&path, "header\n").unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\n");
    }

    #[test]
    fn append_to_keeps_existing_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, "a\n").unwrap();

        FsLogStorage.append_to(&path, "b\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
    }

    #[test]
    fn append_to_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let error = FsLogStorage.append_to(&path, "b\n").unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::NotFound);
        assert!(!path.exists());
    }

    #[test]
    fn exists_reports_presence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        assert!(!FsLogStorage.exists(&path).unwrap());
        fs::write(&path, "").unwrap();
        assert!(FsLogStorage.exists(&path).unwrap());
    }

    #[test]
    fn failed_append_truncates_partial_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        fs::write(&path, "header\nrow-1\n").unwrap();
        let file = OpenOptions::new().append(true).open(&path).unwrap();
        let previous_len = file.metadata().unwrap().len();
        let mut short = ShortWrite { file, budget: 3 };

        let error = append_or_truncate(&path, &mut short, previous_len, "row-2\n").unwrap_err();

        assert_eq!(error.to_string(), "disk full");
        assert_eq!(fs::metadata(&path).unwrap().len(), previous_len);
        assert_eq!(fs::read_to_string(&path).unwrap(), "header\nrow-1\n");
    }

    #[test]
    fn failed_create_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .unwrap();
        let short = ShortWrite { file, budget: 4 };

        let error = write_or_remove(&path, short, "header\nrow-1\n").unwrap_err();

        assert_eq!(error.to_string(), "disk full");
        assert!(!path.exists());
    }
}
