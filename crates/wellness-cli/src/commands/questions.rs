use wellness_core::QuestionSet;

use crate::commands::common::{format_question_lines, question_items, QuestionItem};
use crate::error::CliError;

pub fn run_questions(as_json: bool) -> Result<(), CliError> {
    let questions = QuestionSet::default();

    if as_json {
        let items = question_items(&questions);
        println!("{}", serde_json::to_string_pretty::<Vec<QuestionItem>>(&items)?);
    } else {
        for line in format_question_lines(&questions) {
            println!("{line}");
        }
    }

    Ok(())
}
