//! Configuration file loading.
//!
//! Optional TOML at `~/.config/color-guess/config.toml` (or the platform
//! equivalent via `dirs::config_dir()`). Every key has a default, so a
//! missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tui::button::Size;
use crate::types::{DEFAULT_MAX_DRAW_ATTEMPTS, GameMode, OptionConfig};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameSettings,
    pub ui: UiSettings,
}

/// Round generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Consecutive duplicate draws tolerated before the deterministic fallback.
    pub max_draw_attempts: u32,
    /// Mode focused when the mode-select screen opens.
    pub default_mode: GameMode,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_draw_attempts: DEFAULT_MAX_DRAW_ATTEMPTS,
            default_mode: GameMode::Beginner,
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Size of the color option buttons.
    pub option_size: Size,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            option_size: Size::Small,
        }
    }
}

impl Config {
    /// Returns the path to the default configuration file.
    ///
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("color-guess").join("config.toml")
    }

    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// location is used and a missing file yields `Config::default()`.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_or_default(&Self::config_path()),
        }
    }

    /// Like [`Config::load_from`], but a missing file yields defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(path)
    }

    /// Read, parse and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks that `max_draw_attempts` is at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.max_draw_attempts == 0 {
            return Err(ConfigError::Validation {
                message: "game.max_draw_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Option building settings derived from this config.
    pub fn option_config(&self) -> OptionConfig {
        OptionConfig {
            max_draw_attempts: self.game.max_draw_attempts,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
