
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Threshold used when the caller does not supply one
pub const DEFAULT_THRESHOLD: f32 = 0.43;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Path to the Q&A corpus CSV, absolute or relative to the working directory
    pub corpus_file: PathBuf,
    /// Minimum similarity for a query to count as on-topic
    pub default_threshold: f32,
    /// Message shown when no corpus question clears the threshold
    pub no_match_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_file: PathBuf::from("qna.csv"),
            default_threshold: DEFAULT_THRESHOLD,
            no_match_message: "No related content found for this question.".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found or could not be created")]
    DirectoryError,
    #[error("Invalid default threshold: {0} (must be between 0.0 and 1.0)")]
    InvalidThreshold(f32),
    #[error("Corpus file path cannot be empty")]
    EmptyCorpusPath,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Config {
    /// Load configuration from `config.toml` in the given directory, falling
    /// back to defaults when the file does not exist
    #[inline]
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join("config.toml");

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        config
            .validate()
            .with_context(|| "Configuration validation failed")?;

        Ok(config)
    }

    /// Write the configuration to `config.toml` in the given directory
    #[inline]
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        self.validate()
            .context("Configuration validation failed before saving")?;

        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)
            .with_context(|| format!("Failed to create config dir: {}", config_dir.display()))?;

        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self).map_err(ConfigError::TomlSerialize)?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    #[inline]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.default_threshold) {
            return Err(ConfigError::InvalidThreshold(self.default_threshold));
        }
        if self.corpus_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyCorpusPath);
        }
        Ok(())
    }

    /// Platform configuration directory for this tool
    #[inline]
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::DirectoryError)?;
        Ok(base.join("faq-match"))
    }
}

/// Get the configuration directory path
#[inline]
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    Config::config_dir()
}
