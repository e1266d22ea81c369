//! Configuration management for the Fitness Tracker
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FT__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the platform data directory
pub const APP_DIR_NAME: &str = "FitnessTracker";

/// Location of the shipped presets document relative to the app's base directory
pub const PRESETS_RELATIVE_PATH: &str = "resources/default_data.json";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
}

/// Where user data and presets live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding exercises.json, meals.json and profile.json
    pub data_dir: PathBuf,
    /// Read-only presets document
    pub presets_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            presets_file: default_presets_file(),
        }
    }
}

/// Shipped presets next to the executable, else the crate's own copy
pub fn default_presets_file() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(PRESETS_RELATIVE_PATH)))
        .filter(|path| path.is_file())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(PRESETS_RELATIVE_PATH))
}

/// Platform local data directory joined with the app name, or `./data`
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("data"))
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FT__ prefix)
            // e.g., FT__STORAGE__DATA_DIR=/tmp/ft sets storage.data_dir
            .add_source(config::Environment::with_prefix("FT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Replace the data directory, e.g. from a command line flag
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.storage.data_dir = data_dir.as_ref().to_path_buf();
        self
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.storage.data_dir.ends_with(APP_DIR_NAME) || config.storage.data_dir == Path::new("data"));
        assert!(config.storage.presets_file.ends_with(PRESETS_RELATIVE_PATH));
    }

    #[test]
    fn test_default_presets_file_does_not_depend_on_working_directory() {
        let presets_file = default_presets_file();
        assert!(presets_file.is_absolute());
        assert!(presets_file.is_file(), "{} should exist", presets_file.display());
    }

    #[test]
    fn test_with_data_dir_overrides_storage() {
        let config = AppConfig::default().with_data_dir("/tmp/tracker");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/tracker"));
    }

    #[test]
    fn test_defaults_survive_layering() {
        let layered: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(layered.storage.presets_file, AppConfig::default().storage.presets_file);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
