//! The append-only daily log: line format, storage backend and write policy.

mod daily_log;
pub mod format;
mod storage;

pub use daily_log::{AppendOutcome, DailyLog, LogLocation};
pub use storage::{FsLogStorage, LogStorage};
