//! Configuration management for scripthub.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the user's config dir.
const APP_DIR_NAME: &str = "scripthub";

/// Default registry file name.
const SCRIPTS_FILE_NAME: &str = "scripts";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `SCRIPTHUB_`)
/// 2. TOML config file at `~/.config/scripthub/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry configuration.
    pub registry: RegistryConfig,
    /// Editor configuration.
    pub editor: EditorConfig,
}

/// Registry-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Path to the scripts file.
    /// Defaults to `~/.config/scripthub/scripts`.
    pub file_path: Option<PathBuf>,
}

/// Editor-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor program used when `$EDITOR` is unset or empty.
    pub fallback: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fallback: "vim".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("SCRIPTHUB_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        app_config_dir().join(CONFIG_FILE_NAME)
    }

    /// Get the registry file path, resolving the default if not set.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.registry
            .file_path
            .clone()
            .unwrap_or_else(|| app_config_dir().join(SCRIPTS_FILE_NAME))
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.editor.fallback.is_empty() {
            return Err(Error::ConfigValidation {
                message: "editor.fallback must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// The scripthub directory under the user's config dir.
fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.registry.file_path.is_none());
        assert_eq!(config.editor.fallback, "vim");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_editor_fallback() {
        let mut config = Config::default();
        config.editor.fallback = String::new();

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("editor.fallback"));
    }

    #[test]
    fn test_registry_path_default() {
        let config = Config::default();
        let path = config.registry_path();

        assert!(path.to_string_lossy().contains("scripthub"));
        assert!(path.ends_with("scripts"));
    }

    #[test]
    fn test_registry_path_custom() {
        let mut config = Config::default();
        config.registry.file_path = Some(PathBuf::from("/custom/place/scripts"));

        assert_eq!(
            config.registry_path(),
            PathBuf::from("/custom/place/scripts")
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("scripthub"));
        assert!(path.ends_with("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("file_path"));
        assert!(json.contains("fallback"));
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{"registry": {"file_path": "/tmp/scripts"}, "editor": {"fallback": "nano"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.registry.file_path, Some(PathBuf::from("/tmp/scripts")));
        assert_eq!(config.editor.fallback, "nano");
    }

    #[test]
    fn test_config_clone_eq() {
        let config = Config::default();
        assert_eq!(config, config.clone());
    }
}
