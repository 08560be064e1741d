//! Data models for the wellness tracker

mod day_record;
mod mood;

pub use day_record::DayRecord;
pub use mood::Mood;
