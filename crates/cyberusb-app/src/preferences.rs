//! Persisted UI preferences (`preferences.toml`)
//!
//! The only persisted value is the theme flag. It is stored as a string under
//! `dark_mode`; the literal `"false"` turns dark mode off and anything else,
//! including a missing key or file, leaves it on. The app reads this once at
//! startup and never writes it.

use std::path::{Path, PathBuf};

use cyberusb_core::prelude::*;

use crate::config::config_dir;

pub const PREFERENCES_FILENAME: &str = "preferences.toml";
pub const THEME_KEY: &str = "dark_mode";

/// Default location of `preferences.toml`
pub fn default_preferences_path() -> PathBuf {
    config_dir().join(PREFERENCES_FILENAME)
}

/// Theme flag as restored at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreference {
    pub dark_mode: bool,
    /// Raw stored value, if any
    pub stored: Option<String>,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self::from_stored(None)
    }
}

impl ThemePreference {
    /// Apply the restore rule to a raw stored value
    pub fn from_stored(stored: Option<String>) -> Self {
        let dark_mode = stored.as_deref() != Some("false");
        Self { dark_mode, stored }
    }
}

/// Read the theme preference. Unreadable or malformed files behave like an
/// absent value.
pub fn load_theme_preference(path: &Path) -> ThemePreference {
    match read_stored_value(path, THEME_KEY) {
        Ok(stored) => ThemePreference::from_stored(stored),
        Err(e) => {
            warn!("Ignoring preferences at {}: {}", path.display(), e);
            ThemePreference::default()
        }
    }
}

/// Look up one key as its string form. Non-string values are stringified the
/// way a key-value store would (`false` becomes `"false"`).
fn read_stored_value(path: &Path, key: &str) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| Error::config(e.to_string()))?;
    Ok(table.get(key).map(|value| match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }))
}
