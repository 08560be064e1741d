use std::path::{Path, PathBuf};

use wellness_core::config::{default_config_path, WellnessConfig};

use crate::cli::ConfigCommands;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, effective_log_path: &Path) -> Result<(), CliError> {
    let config_path = default_config_path();
    match command {
        ConfigCommands::Show { json } => {
            let config = WellnessConfig::load_from_path(&config_path)?;
            for line in format_config_lines(&config, &config_path, effective_log_path, json)? {
                println!("{line}");
            }
        }
        ConfigCommands::Set {
            log_path,
            write_timeout,
        } => {
            let config = update_config(&config_path, log_path, write_timeout)?;
            println!("Saved {}", config_path.display());
            if let Some(path) = &config.log_path {
                println!("log_path = {}", path.display());
            }
        }
    }
    Ok(())
}

/// Apply changes to the config file at `path` and save it.
pub fn update_config(
    path: &Path,
    log_path: Option<String>,
    write_timeout: Option<u64>,
) -> Result<WellnessConfig, CliError> {
    let mut config = WellnessConfig::load_from_path(path)?;
    if let Some(log_path) = log_path {
        config.log_path = Some(PathBuf::from(log_path));
    }
    if let Some(secs) = write_timeout {
        config.write_timeout_secs = Some(secs);
    }
    config.save_to_path(path)?;

    tracing::info!(path = %path.display(), "Updated configuration");
    Ok(WellnessConfig::load_from_path(path)?)
}

pub fn format_config_lines(
    config: &WellnessConfig,
    config_path: &Path,
    effective_log_path: &Path,
    as_json: bool,
) -> Result<Vec<String>, CliError> {
    if as_json {
        let value = serde_json::json!({
            "config_path": config_path,
            "log_path": effective_log_path,
            "write_timeout_secs": config.write_timeout_secs,
        });
        return Ok(vec![serde_json::to_string_pretty(&value)?]);
    }

    let timeout = config
        .write_timeout()
        .map_or_else(|| "none".to_string(), |limit| format!("{}s", limit.as_secs()));
    Ok(vec![
        format!("config:        {}", config_path.display()),
        format!("log:           {}", effective_log_path.display()),
        format!("write timeout: {timeout}"),
    ])
}
