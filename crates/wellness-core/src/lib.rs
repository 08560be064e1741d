//! wellness-core - Core library for the daily wellness tracker
//!
//! This crate owns the day record model, the fixed question set and the
//! append-only CSV log that every interface (CLI today) writes through.

pub mod config;
pub mod error;
pub mod export;
pub mod log;
pub mod models;
pub mod questions;
pub mod services;
pub mod util;

pub use error::{Error, Result};
pub use log::{AppendOutcome, DailyLog, FsLogStorage, LogLocation, LogStorage};
pub use models::{DayRecord, Mood};
pub use questions::{QuestionSet, QUESTION_COUNT, QUESTION_SET_VERSION};
pub use services::LogService;
