//! Day record model

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Mood;
use crate::error::{Error, Result};

/// One day's questionnaire answers, mood and notes.
///
/// The record builder owns a single mutable value while the user answers and
/// hands it to the log by value on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar day the answers refer to
    pub date: NaiveDate,
    /// Yes/no answers, positionally aligned with the question set
    pub answers: Vec<bool>,
    /// Mood rating for the day
    pub mood: Mood,
    /// Free-form notes, stored verbatim
    pub notes: String,
}

impl DayRecord {
    /// Create a blank record: every answer "no", middle mood, empty notes
    #[must_use]
    pub fn new(date: NaiveDate, question_count: usize) -> Self {
        Self {
            date,
            answers: vec![false; question_count],
            mood: Mood::default(),
            notes: String::new(),
        }
    }

    /// Create a blank record dated today in local time
    #[must_use]
    pub fn for_today(question_count: usize) -> Self {
        Self::new(Local::now().date_naive(), question_count)
    }

    /// Flip the answer at `index`, returning the new value
    pub fn toggle_answer(&mut self, index: usize) -> Result<bool> {
        let answer = self.answer_mut(index)?;
        *answer = !*answer;
        Ok(*answer)
    }

    /// Set the answer at `index`
    pub fn set_answer(&mut self, index: usize, value: bool) -> Result<()> {
        *self.answer_mut(index)? = value;
        Ok(())
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Number of questions answered "yes"
    #[must_use]
    pub fn yes_count(&self) -> usize {
        self.answers.iter().filter(|answer| **answer).count()
    }

    fn answer_mut(&mut self, index: usize) -> Result<&mut bool> {
        let count = self.answers.len();
        self.answers.get_mut(index).ok_or_else(|| {
            Error::InvalidInput(format!(
                "question {} does not exist (record has {count} answers)",
                index + 1
            ))
        })
    }
}
