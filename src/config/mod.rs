//! Configuration management for skillpath
//!
//! App-level preferences only. Learning progress is a per-session record and
//! is never written to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::progress::Track;
use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Home-screen animation enabled
    pub animation: bool,

    /// Track to preselect at onboarding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_track: Option<Track>,
}

impl Default for Config {
    fn default() -> Self {
        Self { theme: "tokyo-night".to_string(), animation: true, default_track: None }
    }
}

impl Config {
    /// Load configuration from disk, or fall back to defaults if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {path:?}"))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {parent:?}"))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "skillpath")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        Theme::by_name(&self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_tokyo_night() {
        let config = Config::default();
        assert_eq!(config.theme, "tokyo-night");
        assert!(config.animation);
        assert_eq!(config.default_track, None);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme":"paper"}"#).unwrap();
        assert_eq!(config.theme, "paper");
        assert!(config.animation);
    }

    #[test]
    fn track_round_trips_through_json() {
        let config = Config { default_track: Some(Track::Python), ..Default::default() };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("python"));
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.default_track, Some(Track::Python));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.theme, "tokyo-night");
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            theme: "paper".to_string(),
            animation: false,
            default_track: Some(Track::Java),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, "paper");
        assert!(!loaded.animation);
        assert_eq!(loaded.default_track, Some(Track::Java));
    }

    #[test]
    fn active_theme_resolves_config_name() {
        let config = Config { theme: "paper".to_string(), ..Default::default() };
        assert_eq!(config.active_theme().name, "Paper");
    }
}
