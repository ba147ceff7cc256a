use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::version::error::ConfigError;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub version_name: VersionNameConfig,
}

/// Defaults applied when rendering a version name
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VersionNameConfig {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Config {
    /// Load the config from `path`.
    ///
    /// A missing file yields the default config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Returns the path to the config directory for version-code.
/// Uses $XDG_CONFIG_HOME/version-code if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/version-code,
/// or ./version-code if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("version-code")
}
