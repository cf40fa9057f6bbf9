// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gesture]` - Long-press threshold and movement tolerance
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PEEK_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use peek_gallery::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//!
//! if warning.is_none() {
//!     println!("hold for {:?}", config.gesture.settings().hold);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::gallery::GestureSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Press-and-hold tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Hold duration in milliseconds before the preview opens.
    #[serde(
        default = "default_long_press_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub long_press_ms: Option<u64>,

    /// Pointer travel in logical pixels that still counts as holding still.
    #[serde(
        default = "default_movement_tolerance",
        skip_serializing_if = "Option::is_none"
    )]
    pub movement_tolerance: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_ms: default_long_press_ms(),
            movement_tolerance: default_movement_tolerance(),
        }
    }
}

impl GestureConfig {
    /// Recognizer settings with every value clamped to its allowed range.
    #[must_use]
    pub fn settings(&self) -> GestureSettings {
        let hold_ms = self
            .long_press_ms
            .unwrap_or(DEFAULT_LONG_PRESS_MS)
            .clamp(MIN_LONG_PRESS_MS, MAX_LONG_PRESS_MS);
        let tolerance = self
            .movement_tolerance
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_MOVEMENT_TOLERANCE)
            .clamp(MIN_MOVEMENT_TOLERANCE, MAX_MOVEMENT_TOLERANCE);

        GestureSettings {
            hold: Duration::from_millis(hold_ms),
            movement_tolerance: tolerance,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gesture: GestureConfig,
}

// =============================================================================
// Serde Default Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_long_press_ms() -> Option<u64> {
    Some(DEFAULT_LONG_PRESS_MS)
}

fn default_movement_tolerance() -> Option<f32> {
    Some(DEFAULT_MOVEMENT_TOLERANCE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns the default configuration plus the i18n key of a warning when
/// an existing file cannot be read.
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
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str::<Config>(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

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
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gesture: GestureConfig {
                long_press_ms: Some(800),
                movement_tolerance: Some(4.0),
            },
        };
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

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_reports_unreadable_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn saved_settings_file_is_found_through_the_override_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());

        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE))
            .expect("failed to save config");

        assert!(temp_dir.path().join(CONFIG_FILE).exists());
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[gesture]\nlong_press_ms = 300\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.gesture.long_press_ms, Some(300));
        assert_eq!(
            loaded.gesture.movement_tolerance,
            Some(DEFAULT_MOVEMENT_TOLERANCE)
        );
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn default_gesture_settings_match_recognizer_defaults() {
        assert_eq!(GestureConfig::default().settings(), GestureSettings::default());
    }

    #[test]
    fn gesture_settings_are_clamped() {
        let low = GestureConfig {
            long_press_ms: Some(10),
            movement_tolerance: Some(0.0),
        }
        .settings();
        assert_eq!(low.hold, Duration::from_millis(MIN_LONG_PRESS_MS));
        assert_abs_diff_eq!(low.movement_tolerance, MIN_MOVEMENT_TOLERANCE);

        let high = GestureConfig {
            long_press_ms: Some(60_000),
            movement_tolerance: Some(500.0),
        }
        .settings();
        assert_eq!(high.hold, Duration::from_millis(MAX_LONG_PRESS_MS));
        assert_abs_diff_eq!(high.movement_tolerance, MAX_MOVEMENT_TOLERANCE);
    }

    #[test]
    fn non_finite_tolerance_uses_default() {
        let settings = GestureConfig {
            long_press_ms: None,
            movement_tolerance: Some(f32::NAN),
        }
        .settings();
        assert_eq!(settings.hold, Duration::from_millis(DEFAULT_LONG_PRESS_MS));
        assert_abs_diff_eq!(settings.movement_tolerance, DEFAULT_MOVEMENT_TOLERANCE);
    }
}
