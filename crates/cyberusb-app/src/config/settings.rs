//! Settings parser for `config.toml`

use std::path::{Path, PathBuf};

use cyberusb_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const APP_DIR: &str = "cyber-usb";

/// Directory holding `config.toml` and `preferences.toml`
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default location of `config.toml`
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILENAME)
}

/// Load settings from a file, falling back to defaults.
///
/// A missing file is normal; a malformed one is reported and ignored.
pub fn load_settings(path: &Path) -> Settings {
    match try_load_settings(path) {
        Ok(settings) => {
            debug!("Loaded settings from {}", path.display());
            settings
        }
        Err(Error::ConfigNotFound { .. }) => {
            debug!("No config at {}, using defaults", path.display());
            Settings::default()
        }
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            Settings::default()
        }
    }
}

/// Strict variant of [`load_settings`]
pub fn try_load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_invalid(e.to_string()))
}
