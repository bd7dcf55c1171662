//! Configuration file loading and parsing
//!
//! Loads default render options from `~/.config/look-format/config.toml`:
//!
//! ```toml
//! [defaults]
//! fontFamily = "monospace"
//! marginBetweenStrings = "2px"
//! showLineNumbers = true
//! ```

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::RenderOptions;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Options applied when a render call leaves a field unset
    pub defaults: RenderOptions,
}

impl ConfigFile {
    /// Get the config directory path (~/.config/look-format)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("look-format"))
    }

    /// Get the config file path (~/.config/look-format/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// Returns default config if the file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.exists()) else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}
