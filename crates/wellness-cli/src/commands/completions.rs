use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Self::Bash,
            CompletionShell::Zsh => Self::Zsh,
            CompletionShell::Fish => Self::Fish,
            CompletionShell::PowerShell => Self::PowerShell,
        }
    }
}

impl CompletionShell {
    /// Conventional script file name when writing into a directory.
    pub const fn script_file_name(self) -> &'static str {
        match self {
            Self::Bash => "wellness.bash",
            Self::Zsh => "_wellness",
            Self::Fish => "wellness.fish",
            Self::PowerShell => "_wellness.ps1",
        }
    }
}

pub fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    let script = render_completions(shell);

    let Some(path) = output_path else {
        io::stdout().write_all(&script)?;
        return Ok(());
    };

    let target = if path.is_dir() {
        path.join(shell.script_file_name())
    } else {
        path.to_path_buf()
    };
    std::fs::write(&target, script)?;
    println!("{}", target.display());
    Ok(())
}

pub fn render_completions(shell: CompletionShell) -> Vec<u8> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    let mut buffer = Vec::new();
    generate(Shell::from(shell), &mut command, bin_name, &mut buffer);
    buffer
}
