use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/summadesk/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("summadesk").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], the file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL is an absolute http(s) URL
    /// - Generation bounds are non-zero and ordered
    /// - Initial generation values lie within their bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.server.base_url;
        let url = reqwest::Url::parse(base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid server base_url '{}': {}", base_url, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("Server base_url '{}' must use http or https", base_url),
            });
        }

        let generation = &self.generation;
        if generation.max_length_min == 0 || generation.max_length_step == 0 {
            return Err(ConfigError::ValidationError {
                message: "max_length_min and max_length_step must be greater than zero"
                    .to_string(),
            });
        }
        if generation.max_length_min > generation.max_length_max {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "max_length_min ({}) exceeds max_length_max ({})",
                    generation.max_length_min, generation.max_length_max
                ),
            });
        }
        if !(generation.max_length_min..=generation.max_length_max)
            .contains(&generation.max_length)
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "max_length {} is outside {}..={}",
                    generation.max_length, generation.max_length_min, generation.max_length_max
                ),
            });
        }
        if generation.num_beams == 0 || generation.num_beams > generation.num_beams_max {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "num_beams {} is outside 1..={}",
                    generation.num_beams, generation.num_beams_max
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
