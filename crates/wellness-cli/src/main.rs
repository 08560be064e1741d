//! Wellness CLI - answer the daily questionnaire from the terminal
//!
//! Each run of `wellness record` appends one row to the CSV log.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use wellness_core::config::WellnessConfig;

use crate::cli::{Cli, Commands};
use crate::commands::common::open_log_service;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::export::run_export;
use crate::commands::path::run_path;
use crate::commands::questions::run_questions;
use crate::commands::record::{run_record, RecordInput};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wellness=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = WellnessConfig::load()?;
    let log_path = config.resolve_log_path(cli.log_path);

    match cli.command {
        Some(Commands::Record {
            yes,
            mood,
            notes,
            date,
            interactive,
        }) => {
            let service = open_log_service(&log_path, &config);
            let input = RecordInput {
                yes,
                mood,
                notes,
                date,
                interactive,
            };
            run_record(input, &service).await?;
        }
        Some(Commands::Questions { json }) => run_questions(json)?,
        Some(Commands::Export { output, open }) => {
            let service = open_log_service(&log_path, &config);
            run_export(output.as_deref(), open, &service).await?;
        }
        Some(Commands::Path) => run_path(&log_path),
        Some(Commands::Config { command }) => run_config(command, &log_path)?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    Ok(())
}
