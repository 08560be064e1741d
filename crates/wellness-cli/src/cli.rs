use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wellness")]
#[command(about = "Answer the daily wellness questions and keep them in a CSV log")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the CSV log file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save today's answers as a new row
    #[command(alias = "save")]
    Record {
        /// Question numbers answered "yes", e.g. 1,4,7
        #[arg(long, value_name = "LIST", value_delimiter = ',')]
        yes: Vec<String>,
        /// Mood from 1 (low) to 5 (great)
        #[arg(short, long, value_name = "1-5")]
        mood: Option<String>,
        /// Free-form notes for the day
        #[arg(short, long)]
        notes: Option<String>,
        /// Day the answers refer to (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
        /// Ask every question on the terminal
        #[arg(short, long)]
        interactive: bool,
    },
    /// List the daily questions
    Questions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the log
    Export {
        /// Copy the log to this file or directory
        #[arg(short, long, value_name = "PATH", conflicts_with = "open")]
        output: Option<PathBuf>,
        /// Open the log with the system's default application
        #[arg(long)]
        open: bool,
    },
    /// Print where the log is stored
    Path,
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Output file or directory (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update configuration values
    Set {
        /// Default log location (empty string clears it)
        #[arg(long, value_name = "PATH")]
        log_path: Option<String>,
        /// Give up waiting for a save after this many seconds (0 disables)
        #[arg(long, value_name = "SECS")]
        write_timeout: Option<u64>,
    },
}
