use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] wellness_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Nothing saved yet. Record a day first with `wellness record`.")]
    NothingSaved,
    #[error("Invalid question number '{0}'; expected 1-{1}")]
    InvalidQuestion(String, usize),
    #[error("Invalid date '{0}'; expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Input ended before the questionnaire was finished")]
    InputClosed,
}

impl CliError {
    /// Fold the core's export-before-save error into the friendly notice.
    pub fn from_share(error: wellness_core::Error) -> Self {
        match error {
            wellness_core::Error::LogNotFound(_) => Self::NothingSaved,
            other => Self::Core(other),
        }
    }
}
