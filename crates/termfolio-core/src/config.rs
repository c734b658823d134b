//! Configuration management for termfolio.
//!
//! Loads configuration from ${TERMFOLIO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Returns the embedded default config template.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for termfolio configuration and log directories.
    //!
    //! TERMFOLIO_HOME resolution order:
    //! 1. TERMFOLIO_HOME environment variable (if set)
    //! 2. ~/.config/termfolio (default)
    //! 3. ./.termfolio when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the termfolio home directory.
    pub fn termfolio_home() -> PathBuf {
        if let Ok(home) = std::env::var("TERMFOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".termfolio"),
            |h| h.join(".config").join("termfolio"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        termfolio_home().join("config.toml")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        termfolio_home().join("logs")
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme at startup.
    pub theme: Theme,
    /// Prompt shown before each command.
    pub prompt: String,
    /// Directory with content overrides (projects/contact/profile JSON).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Log filter directive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            prompt: Self::DEFAULT_PROMPT.to_string(),
            data_dir: None,
            log_level: None,
        }
    }
}

impl Config {
    pub const DEFAULT_PROMPT: &str = "$localhost:3000\\portfolio>";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn generate() -> Result<String> {
        toml::to_string(&Config::default()).context("Failed to serialize default config to TOML")
    }

    /// Resolves the log filter: `TERMFOLIO_LOG`, then config, then `fallback`.
    pub fn effective_log_filter(&self, fallback: &str) -> String {
        std::env::var("TERMFOLIO_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.log_level.clone())
            .unwrap_or_else(|| fallback.to_string())
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.prompt, Config::DEFAULT_PROMPT);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "theme = \"light\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.prompt, Config::DEFAULT_PROMPT);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_load_invalid_theme_fails_with_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "theme = \"purple\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("theme = \"dark\""));
        assert!(contents.contains("# data_dir ="));

        // The template must round-trip to the Rust defaults.
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_parses_back_to_defaults() {
        let generated = Config::generate().unwrap();
        assert!(generated.contains("theme = \"dark\""));
        assert!(!generated.contains("data_dir"));
        let config: Config = toml::from_str(&generated).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_data_dir_loaded_from_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "data_dir = \"/srv/portfolio\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/portfolio")));
    }
}
