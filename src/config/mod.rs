//! CLI defaults for Uniception.
//!
//! This module provides the default cipher and prefix used by the command
//! line tool, stored in `~/.uniception/config.toml`. The codec itself takes
//! no configuration beyond the four built-in ciphers.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cipher;
use crate::text::parse_prefix;

/// Cipher used when neither the config file nor `--cipher` names one.
pub const DEFAULT_CIPHER: &str = "Hex Whisper";

/// Prefix used when neither the config file nor `--prefix` gives one (a heart).
pub const DEFAULT_PREFIX: &str = "U+2764";

/// Errors that can occur when loading or saving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("Invalid default cipher in config: {0}")]
    InvalidCipher(String),

    #[error("Invalid default prefix in config: {0}")]
    InvalidPrefix(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Defaults applied by the CLI when flags are omitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Cipher name, alias, tag or menu number (see [`cipher::lookup`]).
    pub cipher: String,

    /// Prefix text: `U+XXXX` or a literal character.
    pub prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cipher: DEFAULT_CIPHER.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Load the configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the configuration from an explicit path.
    ///
    /// Falls back to defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the configuration to an explicit path.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check that the cipher resolves and the prefix parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        cipher::lookup(&self.cipher).map_err(|e| ConfigError::InvalidCipher(e.to_string()))?;
        parse_prefix(&self.prefix).map_err(|e| ConfigError::InvalidPrefix(e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = get_config_dir()?;
        Ok(config_dir.join("config.toml"))
    }
}

/// Get the Uniception config directory (`~/.uniception`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".uniception"))
        .ok_or(ConfigError::NoConfigDir)
}
