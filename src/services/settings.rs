//! User settings, read from `<config dir>/scribe/settings.json`.
//!
//! Every field has a default, so a partial file is fine and a missing file
//! means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "scribe";
const SETTINGS_FILE: &str = "settings.json";
const LOG_DIR: &str = "logs";

pub const FONT_SIZE_MIN: u16 = 6;
pub const FONT_SIZE_MAX: u16 = 36;
pub const FONT_SIZE_STEP: u16 = 2;
pub const DEFAULT_FONT_SIZE: u16 = 18;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub font_size: u16,
    pub tab_size: u8,
    /// Rows scrolled per mouse wheel notch.
    pub scroll_lines: usize,
    pub keybindings: Vec<KeybindingRule>,
    pub theme: ThemeSettings,
}

/// Color overrides: `"#RRGGBB"` or a named ANSI color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub menu_bar_bg: Option<String>,
    pub menu_bar_fg: Option<String>,
    pub menu_selected_bg: Option<String>,
    pub menu_selected_fg: Option<String>,
    pub dialog_border: Option<String>,
    pub status_fg: Option<String>,
    pub saved_fg: Option<String>,
    pub selection_bg: Option<String>,
    pub error_fg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            tab_size: 4,
            scroll_lines: 3,
            keybindings: Vec::new(),
            theme: ThemeSettings::default(),
        }
    }
}

impl Settings {
    /// Clamp values a hand-edited file may have pushed out of range.
    pub fn sanitized(mut self) -> Self {
        self.font_size = self.font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        self.tab_size = self.tab_size.clamp(1, 16);
        self.scroll_lines = self.scroll_lines.max(1);
        self
    }
}

pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Read settings from `path`. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let settings: Settings = serde_json::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(settings.sanitized())
}

/// Load the user settings, falling back to defaults on any problem.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    match load_from(&path) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(error = %err, "using default settings");
            Settings::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
