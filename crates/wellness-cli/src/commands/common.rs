use std::io::{BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use wellness_core::config::WellnessConfig;
use wellness_core::log::format::DATE_FORMAT;
use wellness_core::{DayRecord, LogService, Mood, QuestionSet};

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct QuestionItem {
    pub column: String,
    pub text: String,
}

pub fn open_log_service(log_path: &Path, config: &WellnessConfig) -> LogService {
    LogService::open_path(log_path).with_write_timeout(config.write_timeout())
}

pub fn question_items(questions: &QuestionSet) -> Vec<QuestionItem> {
    questions
        .iter()
        .enumerate()
        .map(|(index, text)| QuestionItem {
            column: QuestionSet::column_name(index),
            text: text.to_string(),
        })
        .collect()
}

pub fn format_question_lines(questions: &QuestionSet) -> Vec<String> {
    question_items(questions)
        .into_iter()
        .map(|item| format!("{:>4}  {}", item.column, item.text))
        .collect()
}

pub fn parse_record_date(value: Option<&str>) -> Result<Option<NaiveDate>, CliError> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| CliError::InvalidDate(value.to_string()))
}

/// Parse 1-based question numbers into zero-based indexes.
pub fn parse_yes_list(values: &[String], question_count: usize) -> Result<Vec<usize>, CliError> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse::<usize>()
                .ok()
                .filter(|number| (1..=question_count).contains(number))
                .map(|number| number - 1)
                .ok_or_else(|| CliError::InvalidQuestion(value.to_string(), question_count))
        })
        .collect()
}

pub fn parse_answer(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Walk through every question, the mood and notes on a terminal.
///
/// An empty answer keeps the value already on the record.
pub fn prompt_record<R, W>(
    questions: &QuestionSet,
    mut record: DayRecord,
    input: &mut R,
    output: &mut W,
) -> Result<DayRecord, CliError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Daily wellness check for {}", record.date.format("%A, %B %-d, %Y"))?;

    for (index, question) in questions.iter().enumerate() {
        loop {
            let current = if record.answers.get(index).copied().unwrap_or_default() {
                "Y/n"
            } else {
                "y/N"
            };
            write!(output, "{:>2}. {question} [{current}] ", index + 1)?;
            output.flush()?;

            let line = read_line(input)?;
            if line.trim().is_empty() {
                break;
            }
            if let Some(answer) = parse_answer(&line) {
                record.set_answer(index, answer)?;
                break;
            }
            writeln!(output, "Please answer y or n.")?;
        }
    }

    loop {
        write!(output, "How would you rate your mood today? (1-5) [{}] ", record.mood)?;
        output.flush()?;

        let line = read_line(input)?;
        if line.trim().is_empty() {
            break;
        }
        match line.parse::<Mood>() {
            Ok(mood) => {
                record.set_mood(mood);
                break;
            }
            Err(error) => writeln!(output, "{error}")?,
        }
    }

    write!(output, "Notes (optional): ")?;
    output.flush()?;
    let notes = read_line(input)?;
    if !notes.trim().is_empty() {
        record.set_notes(notes.trim_end_matches(['\r', '\n']));
    }

    Ok(record)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::InputClosed);
    }
    Ok(line)
}
