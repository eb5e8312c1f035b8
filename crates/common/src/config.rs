//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{StandingsError, StandingsResult};

/// Directory name used under the XDG config and data roots.
const APP_DIR: &str = "standings-overlay";

/// Global application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory backing durable key-value storage (`teams`, `tournamentInfo`).
    pub data_dir: PathBuf,

    /// Screenshot export settings.
    pub export: ExportSettings,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Where exported screenshots land.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory that receives the "downloaded" image.
    pub download_dir: PathBuf,

    /// File name of the exported image.
    pub file_name: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "standings_store=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            export: ExportSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("."),
            file_name: "tournament-screenshot.png".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl ExportSettings {
    /// Full path of the exported image.
    pub fn output_path(&self) -> PathBuf {
        self.download_dir.join(&self.file_name)
    }
}

impl AppConfig {
    /// Load config from the standard location.
    ///
    /// A broken file is an error rather than a silent fallback, so callers
    /// that install logging from the config can report it once a subscriber
    /// exists.
    pub fn try_load() -> StandingsResult<Self> {
        Self::try_load_from(&config_file_path())
    }

    /// Load config from an explicit path. A missing file yields the defaults.
    pub fn try_load_from(config_path: &Path) -> StandingsResult<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            StandingsError::config(format!("Failed to read config at {config_path:?}: {e}"))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            StandingsError::config(format!("Failed to parse config at {config_path:?}: {e}"))
        })
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join(APP_DIR).join("config.json")
}

/// Default storage directory.
fn default_data_dir() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join(APP_DIR).join("storage")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_defaults() {
        let export = ExportSettings::default();
        assert_eq!(export.file_name, "tournament-screenshot.png");
        assert_eq!(
            export.output_path(),
            PathBuf::from(".").join("tournament-screenshot.png")
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.data_dir = dir.path().join("storage");
        config.logging.level = "debug".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::try_load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_try_load_reports_corrupt_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::try_load_from(&path).unwrap_err();
        assert!(matches!(err, StandingsError::Config { .. }));
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_try_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::try_load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"logging": {"json": true}}"#).unwrap();

        let config = AppConfig::try_load_from(&path).unwrap();
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.export, ExportSettings::default());
    }
}
