// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[player]` - Video player behavior (idle timeout, keyboard, volume, skin)
//! - `[toc]` - Scroll-spy table of contents
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.player.idle_timeout_ms = Some(5_000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::{ActivationOffset, IdleTimeout};
use crate::domain::video::{KeyboardSeekStep, Volume, VolumeStep};
use crate::error::{Error, Result};
use crate::toc::ScrollSpyOptions;
use crate::ui::skins::SkinKind;
use crate::video_player::{KeyboardScope, PlayerSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Folio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Video player settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Delay without activity before controls hide (milliseconds).
    #[serde(
        default = "default_idle_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub idle_timeout_ms: Option<u64>,

    /// Keep controls visible while paused.
    #[serde(
        default = "default_prevent_idle_when_paused",
        skip_serializing_if = "Option::is_none"
    )]
    pub prevent_idle_when_paused: Option<bool>,

    /// Where keyboard shortcuts listen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_scope: Option<KeyboardScope>,

    /// Keyboard seek step in seconds (arrow keys).
    #[serde(
        default = "default_keyboard_seek_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub keyboard_seek_step_secs: Option<f64>,

    /// Keyboard volume step (arrow keys).
    #[serde(
        default = "default_volume_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_step: Option<f64>,

    /// Initial playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,

    /// Visual skin used to render controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<SkinKind>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            idle_timeout_ms: default_idle_timeout_ms(),
            prevent_idle_when_paused: default_prevent_idle_when_paused(),
            keyboard_scope: Some(KeyboardScope::default()),
            keyboard_seek_step_secs: default_keyboard_seek_step_secs(),
            volume_step: default_volume_step(),
            volume: default_volume(),
            skin: Some(SkinKind::default()),
        }
    }
}

impl PlayerConfig {
    /// Resolves unset or out-of-range values into validated player settings.
    #[must_use]
    pub fn settings(&self) -> PlayerSettings {
        PlayerSettings {
            idle_timeout: IdleTimeout::from_millis(
                self.idle_timeout_ms.unwrap_or(DEFAULT_IDLE_TIMEOUT_MS),
            ),
            prevent_idle_when_paused: self
                .prevent_idle_when_paused
                .unwrap_or(DEFAULT_PREVENT_IDLE_WHEN_PAUSED),
            keyboard_scope: self.keyboard_scope.unwrap_or_default(),
            seek_step: KeyboardSeekStep::new(
                self.keyboard_seek_step_secs
                    .unwrap_or(DEFAULT_KEYBOARD_SEEK_STEP_SECS),
            ),
            volume_step: VolumeStep::new(self.volume_step.unwrap_or(DEFAULT_VOLUME_STEP)),
            initial_volume: Volume::new(self.volume.unwrap_or(DEFAULT_VOLUME)),
        }
    }
}

/// Table of contents settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TocConfig {
    /// Activation line distance below the viewport top (pixels).
    #[serde(
        default = "default_toc_top_offset_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub top_offset_px: Option<f64>,

    /// Report an "Introduction" entry above the first heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_intro: Option<bool>,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            top_offset_px: default_toc_top_offset_px(),
            show_intro: Some(DEFAULT_TOC_SHOW_INTRO),
        }
    }
}

impl TocConfig {
    /// Resolves unset or out-of-range values into scroll-spy options.
    #[must_use]
    pub fn options(&self) -> ScrollSpyOptions {
        ScrollSpyOptions {
            top_offset: ActivationOffset::new(
                self.top_offset_px.unwrap_or(DEFAULT_TOC_TOP_OFFSET_PX),
            ),
            show_intro: self.show_intro.unwrap_or(DEFAULT_TOC_SHOW_INTRO),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Video player settings.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Table of contents settings.
    #[serde(default)]
    pub toc: TocConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_idle_timeout_ms() -> Option<u64> {
    Some(DEFAULT_IDLE_TIMEOUT_MS)
}

fn default_prevent_idle_when_paused() -> Option<bool> {
    Some(DEFAULT_PREVENT_IDLE_WHEN_PAUSED)
}

fn default_keyboard_seek_step_secs() -> Option<f64> {
    Some(DEFAULT_KEYBOARD_SEEK_STEP_SECS)
}

fn default_volume_step() -> Option<f64> {
    Some(DEFAULT_VOLUME_STEP)
}

fn default_volume() -> Option<f64> {
    Some(DEFAULT_VOLUME)
}

fn default_toc_top_offset_px() -> Option<f64> {
    Some(DEFAULT_TOC_TOP_OFFSET_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, preferring an explicit override,
/// then `FOLIO_CONFIG_DIR`, then the platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.player.idle_timeout_ms = Some(4_500);
        config.player.keyboard_scope = Some(KeyboardScope::Global);
        config.player.skin = Some(SkinKind::Youtube);
        config.toc.show_intro = Some(true);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[player\nbroken")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config: Config = toml::from_str("[player]\nkeyboard_scope = \"none\"\n")
            .expect("partial config should parse");
        assert_eq!(config.player.keyboard_scope, Some(KeyboardScope::None));
        assert_eq!(config.player.idle_timeout_ms, Some(DEFAULT_IDLE_TIMEOUT_MS));
        assert_eq!(config.toc, TocConfig::default());
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let config = PlayerConfig {
            idle_timeout_ms: Some(1),
            volume: Some(4.0),
            keyboard_seek_step_secs: None,
            ..PlayerConfig::default()
        };
        let settings = config.settings();
        assert_eq!(settings.idle_timeout.as_millis(), MIN_IDLE_TIMEOUT_MS);
        assert_eq!(settings.initial_volume.value(), MAX_VOLUME);
        assert_eq!(settings.seek_step.value(), DEFAULT_KEYBOARD_SEEK_STEP_SECS);
    }

    #[test]
    fn toc_options_use_configured_offset() {
        let toc = TocConfig {
            top_offset_px: Some(114.0),
            show_intro: Some(true),
        };
        let options = toc.options();
        assert_eq!(options.top_offset.value(), 114.0);
        assert!(options.show_intro);
    }
}
