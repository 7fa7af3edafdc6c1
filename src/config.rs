//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.transpose/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Global config directory name (under the user's home)
const GLOBAL_DIR: &str = ".transpose";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

/// Global transpose configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// File extensions recognized as text input (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Worker pool size override for directory mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            workers: None,
        }
    }
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(GLOBAL_CONFIG_FILE)
    }

    /// Load config from disk, or fall back to defaults if missing or invalid
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(Self::config_path(), content)?;
        Ok(())
    }

    /// Check whether a path carries a recognized text extension
    #[must_use]
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known == ext))
    }
}
