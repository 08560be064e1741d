use std::io;

use wellness_core::{AppendOutcome, DayRecord, LogService, Mood, QuestionSet};

use crate::commands::common::{parse_record_date, parse_yes_list, prompt_record};
use crate::error::CliError;

/// Answers gathered from command-line flags.
#[derive(Debug, Default)]
pub struct RecordInput {
    pub yes: Vec<String>,
    pub mood: Option<String>,
    pub notes: Option<String>,
    pub date: Option<String>,
    pub interactive: bool,
}

pub async fn run_record(input: RecordInput, service: &LogService) -> Result<(), CliError> {
    let questions = QuestionSet::default();
    let mut record = build_record(&questions, &input)?;

    if input.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        record = prompt_record(&questions, record, &mut stdin.lock(), &mut stdout)?;
    }

    let yes_count = record.yes_count();
    let mood = record.mood;
    let outcome = service.append_record(record).await?;

    match outcome {
        AppendOutcome::Created => println!("Created {}", service.path().display()),
        AppendOutcome::Appended => println!("Saved to {}", service.path().display()),
    }
    println!("{yes_count}/{} yes, mood {mood}", questions.len());
    Ok(())
}

/// Build the day's record from flags, starting from the blank defaults.
pub fn build_record(questions: &QuestionSet, input: &RecordInput) -> Result<DayRecord, CliError> {
    let mut record = match parse_record_date(input.date.as_deref())? {
        Some(date) => DayRecord::new(date, questions.len()),
        None => DayRecord::for_today(questions.len()),
    };

    for index in parse_yes_list(&input.yes, questions.len())? {
        record.set_answer(index, true)?;
    }
    if let Some(mood) = input.mood.as_deref() {
        record.set_mood(mood.parse::<Mood>()?);
    }
    if let Some(notes) = input.notes.as_deref() {
        record.set_notes(notes);
    }

    Ok(record)
}
