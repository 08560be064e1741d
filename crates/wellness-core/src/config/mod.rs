//! Persistent tracker configuration.
//!
//! Stored as JSON in `<config_dir>/wellness/config.json`. A missing file means
//! defaults; blank values are normalized away on load and save.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::normalize_text_option;

const APP_DIR_NAME: &str = "wellness";
const CONFIG_FILE_NAME: &str = "config.json";
const LOG_FILE_NAME: &str = "wellness_data.csv";

/// Environment variable overriding the log location.
pub const LOG_PATH_ENV: &str = "WELLNESS_LOG_PATH";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WellnessConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    #[serde(default)]
    pub write_timeout_secs: Option<u64>,
}

const fn default_config_version() -> u32 {
    1
}

impl Default for WellnessConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            log_path: None,
            write_timeout_secs: None,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Canonical log location when nothing overrides it.
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(LOG_FILE_NAME)
}

impl WellnessConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_path(&default_config_path())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|error| {
            Error::Config(format!(
                "Failed to read config at {}: {error}",
                path.display()
            ))
        })?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to parse config at {}: {error}",
                path.display()
            ))
        })?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = default_config_path();
        self.save_to_path(&path)?;
        Ok(path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                Error::Config(format!(
                    "Failed to create config directory {}: {error}",
                    parent.display()
                ))
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized).map_err(|error| {
            Error::Config(format!(
                "Failed to write config at {}: {error}",
                path.display()
            ))
        })
    }

    /// Resolve the log path: explicit flag, then environment, then config,
    /// then the platform data directory. Blank values are skipped.
    pub fn resolve_log_path(&self, explicit: Option<PathBuf>) -> PathBuf {
        self.resolve_log_path_with(explicit, std::env::var_os(LOG_PATH_ENV).map(PathBuf::from))
    }

    fn resolve_log_path_with(&self, explicit: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
        non_blank_path(explicit)
            .or_else(|| non_blank_path(env))
            .or_else(|| self.log_path.clone())
            .unwrap_or_else(default_log_path)
    }

    pub fn write_timeout(&self) -> Option<Duration> {
        self.write_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    fn normalize(&mut self) {
        self.log_path = non_blank_path(self.log_path.take());
        self.write_timeout_secs = self.write_timeout_secs.filter(|secs| *secs > 0);
    }
}

fn non_blank_path(path: Option<PathBuf>) -> Option<PathBuf> {
    normalize_text_option(path.map(|path| path.to_string_lossy().into_owned())).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WellnessConfig::load_from_path(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, WellnessConfig::default());
    }

    #[test]
    fn save_and_load_round_trip_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = WellnessConfig {
            version: 1,
            log_path: Some(PathBuf::from("  ")),
            write_timeout_secs: Some(0),
        };

        config.save_to_path(&path).unwrap();
        let loaded = WellnessConfig::load_from_path(&path).unwrap();

        assert_eq!(loaded, WellnessConfig::default());
    }

    #[test]
    fn load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        let error = WellnessConfig::load_from_path(&path).unwrap_err();

        assert!(error.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn explicit_log_path_wins() {
        let config = WellnessConfig {
            log_path: Some(PathBuf::from("/from/config.csv")),
            ..WellnessConfig::default()
        };
        assert_eq!(
            config.resolve_log_path(Some(PathBuf::from("/explicit.csv"))),
            PathBuf::from("/explicit.csv")
        );
    }

    #[test]
    fn blank_environment_path_falls_through_to_config() {
        let config = WellnessConfig {
            log_path: Some(PathBuf::from("/from/config.csv")),
            ..WellnessConfig::default()
        };

        assert_eq!(
            config.resolve_log_path_with(None, Some(PathBuf::from(""))),
            PathBuf::from("/from/config.csv")
        );
        assert_eq!(
            config.resolve_log_path_with(Some(PathBuf::from("  ")), Some(PathBuf::from("/env.csv"))),
            PathBuf::from("/env.csv")
        );
        assert_eq!(
            WellnessConfig::default().resolve_log_path_with(None, Some(PathBuf::from(""))),
            default_log_path()
        );
    }

    #[test]
    fn default_log_path_uses_data_file_name() {
        assert!(default_log_path().ends_with("wellness/wellness_data.csv"));
    }

    #[test]
    fn write_timeout_converts_seconds() {
        let config = WellnessConfig {
            write_timeout_secs: Some(5),
            ..WellnessConfig::default()
        };
        assert_eq!(config.write_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(WellnessConfig::default().write_timeout(), None);
    }
}
