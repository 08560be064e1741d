//! CSV line format for the daily log.
//!
//! ```text
//! date,q1,q2,...,qN,mood,notes
//! 2024-03-15,1,0,...,0,4,"escaped notes"
//! ```
//!
//! Only the notes field is quoted. Every other field is produced from a date,
//! a boolean or a bounded integer and can never contain a delimiter.

use crate::models::DayRecord;
use crate::questions::QuestionSet;

pub const DELIMITER: char = ',';
pub const LINE_TERMINATOR: char = '\n';
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render the header line (`date,q1..qN,mood,notes\n`).
#[must_use]
pub fn header_line(question_count: usize) -> String {
    let mut line = String::from("date");
    for index in 0..question_count {
        line.push(DELIMITER);
        line.push_str(&QuestionSet::column_name(index));
    }
    line.push(DELIMITER);
    line.push_str("mood");
    line.push(DELIMITER);
    line.push_str("notes");
    line.push(LINE_TERMINATOR);
    line
}

/// Render one data row, newline included.
#[must_use]
pub fn record_line(record: &DayRecord) -> String {
    let mut line = record.date.format(DATE_FORMAT).to_string();
    for answer in &record.answers {
        line.push(DELIMITER);
        line.push(if *answer { '1' } else { '0' });
    }
    line.push(DELIMITER);
    line.push_str(&record.mood.to_string());
    line.push(DELIMITER);
    line.push_str(&quote_notes(&record.notes));
    line.push(LINE_TERMINATOR);
    line
}

/// Wrap notes in double quotes, doubling any embedded quote.
#[must_use]
pub fn quote_notes(notes: &str) -> String {
    format!("\"{}\"", notes.replace('"', "\"\""))
}
