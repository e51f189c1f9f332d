//! Configuration management.

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration for neuros.
#[derive(Debug, Clone)]
pub struct NeuralConfig {
    /// Path to the data directory holding the three state records.
    pub data_dir: PathBuf,
    /// Generative engine configuration.
    pub engine: EngineConfig,
}

/// Generative engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// API key. Falls back to the `GEMINI_API_KEY` environment variable.
    pub api_key: Option<String>,
    /// Base URL override (for proxies and test servers).
    pub base_url: Option<String>,
    /// Classification model override.
    pub classify_model: Option<String>,
    /// Strategy model override.
    pub strategy_model: Option<String>,
    /// Image generation model override.
    pub image_model: Option<String>,
    /// Image refinement model override.
    pub edit_model: Option<String>,
    /// Video simulation model override.
    pub video_model: Option<String>,
    /// Request timeout override in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Connect timeout override in milliseconds.
    pub connect_timeout_ms: Option<u64>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Data directory.
    pub data_dir: Option<String>,
    /// Engine configuration.
    pub engine: Option<ConfigFileEngine>,
}

/// Engine section in the config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileEngine {
    /// API key.
    pub api_key: Option<String>,
    /// Base URL.
    pub base_url: Option<String>,
    /// Classification model.
    pub classify_model: Option<String>,
    /// Strategy model.
    pub strategy_model: Option<String>,
    /// Image model.
    pub image_model: Option<String>,
    /// Edit model.
    pub edit_model: Option<String>,
    /// Video model.
    pub video_model: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: Option<u64>,
}

impl Default for NeuralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            engine: EngineConfig::default(),
        }
    }
}

impl NeuralConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &std::path::Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: e.to_string(),
            })?;

        let file: ConfigFile =
            toml::from_str(&contents).map_err(|e| crate::Error::OperationFailed {
                operation: "parse_config_file".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/neuros/` on macOS)
    /// 2. XDG config dir (`~/.config/neuros/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let platform_config = base_dirs.config_dir().join("neuros").join("config.toml");
        if platform_config.exists() {
            if let Ok(config) = Self::load_from_file(&platform_config) {
                return config;
            }
        }

        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("neuros")
            .join("config.toml");
        if xdg_config.exists() {
            if let Ok(config) = Self::load_from_file(&xdg_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Builds a configuration from a parsed config file.
    #[must_use]
    pub fn from_config_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        let engine = file.engine.unwrap_or_default();

        Self {
            data_dir: file.data_dir.map_or(defaults.data_dir, PathBuf::from),
            engine: EngineConfig {
                api_key: engine.api_key,
                base_url: engine.base_url,
                classify_model: engine.classify_model,
                strategy_model: engine.strategy_model,
                image_model: engine.image_model,
                edit_model: engine.edit_model,
                video_model: engine.video_model,
                timeout_ms: engine.timeout_ms,
                connect_timeout_ms: engine.connect_timeout_ms,
            },
        }
    }
}

/// Resolves the platform data directory, falling back to a local dot-dir.
fn default_data_dir() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from(".neuros"),
        |dirs| dirs.data_local_dir().join("neuros"),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NeuralConfig::default();
        assert!(config.data_dir.ends_with("neuros") || config.data_dir.ends_with(".neuros"));
        assert!(config.engine.api_key.is_none());
    }

    #[test]
    fn test_from_config_file_overrides() {
        let file: ConfigFile = toml::from_str(
            r#"
            data_dir = "/tmp/neuros-test"

            [engine]
            api_key = "AIzaTestKey"
            classify_model = "gemini-custom"
            timeout_ms = 5000
            "#,
        )
        .unwrap();

        let config = NeuralConfig::from_config_file(file);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/neuros-test"));
        assert_eq!(config.engine.api_key.as_deref(), Some("AIzaTestKey"));
        assert_eq!(config.engine.classify_model.as_deref(), Some("gemini-custom"));
        assert_eq!(config.engine.timeout_ms, Some(5000));
        assert!(config.engine.video_model.is_none());
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let config = NeuralConfig::from_config_file(ConfigFile::default());
        assert_eq!(config.data_dir, NeuralConfig::default().data_dir);
    }
}
