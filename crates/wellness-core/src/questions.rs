//! The fixed wellness question set.
//!
//! Question text is presentation only. The log stores answers positionally as
//! `q1..qN`, so the number of questions is part of the file format: changing
//! it makes new rows incompatible with rows already written. Bump
//! [`QUESTION_SET_VERSION`] whenever the count or order changes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Version of the built-in question list. Not written to the log.
pub const QUESTION_SET_VERSION: u32 = 1;

/// Built-in daily questions, in column order.
pub const DEFAULT_QUESTIONS: [&str; 20] = [
    "Did you meditate today?",
    "Did you eat a healthy breakfast?",
    "Did you eat 5 portions of vegetables/fruit?",
    "Did you avoid processed food?",
    "Did you drink enough water (>=2L)?",
    "Did you exercise for at least 30 minutes?",
    "Did you take a walk outdoors?",
    "Did you get enough sleep (>=7 hours)?",
    "Did you avoid screens before bed?",
    "Did you practice gratitude?",
    "Did you spend time with loved ones?",
    "Did you avoid stimulants (alcohol, nicotine)?",
    "Did you work productively?",
    "Did you learn something new?",
    "Did you make time for a hobby?",
    "Did you limit your time on social media?",
    "Did you do breathing exercises?",
    "Did you practice intermittent fasting?",
    "Did you take breaks from work?",
    "Did you keep a healthy work-life balance?",
];

/// Number of built-in questions (the `N` in `q1..qN`).
pub const QUESTION_COUNT: usize = DEFAULT_QUESTIONS.len();

/// An ordered, versioned list of yes/no questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    version: u32,
    questions: Vec<String>,
}

impl QuestionSet {
    /// Build a custom question set. At least one question is required.
    pub fn new<I, S>(version: u32, questions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions = questions.into_iter().map(Into::into).collect::<Vec<_>>();
        if questions.is_empty() {
            return Err(Error::InvalidInput(
                "question set must contain at least one question".to_string(),
            ));
        }
        Ok(Self { version, questions })
    }

    pub const fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question text by zero-based index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }

    /// Log column name for a zero-based question index (`q1` for index 0).
    pub fn column_name(index: usize) -> String {
        format!("q{}", index + 1)
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self {
            version: QUESTION_SET_VERSION,
            questions: DEFAULT_QUESTIONS.iter().map(|q| (*q).to_string()).collect(),
        }
    }
}
