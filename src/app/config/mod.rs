// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notifications]` - Toast lifetime, exit transition and progress sampling
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TASKDECK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use taskdeck::app::config;
//!
//! let (mut config, _warning) = config::load_with_override(None);
//! config.notifications.default_duration_ms = Some(2_500);
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::notifications::Settings as NotificationSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning surfaced to the user when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "Settings could not be read; defaults are in use.";

/// Warning surfaced to the user when `settings.toml` cannot be written.
pub const CONFIG_SAVE_WARNING: &str = "Settings could not be saved.";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Lifetime of notifications that do not request one (milliseconds).
    #[serde(
        default = "default_notification_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Length of the exit transition (milliseconds).
    #[serde(
        default = "default_dismiss_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_transition_ms: Option<u64>,

    /// Number of progress samples across a lifetime.
    #[serde(
        default = "default_progress_samples",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_samples: Option<u32>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_notification_duration_ms(),
            dismiss_transition_ms: default_dismiss_transition_ms(),
            progress_samples: default_progress_samples(),
        }
    }
}

impl NotificationConfig {
    /// Resolves the section into provider settings, clamping every value
    /// into its supported range.
    #[must_use]
    pub fn settings(&self) -> NotificationSettings {
        let duration_ms = self
            .default_duration_ms
            .unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS)
            .clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS);
        let transition_ms = self
            .dismiss_transition_ms
            .unwrap_or(DEFAULT_DISMISS_TRANSITION_MS)
            .min(MAX_DISMISS_TRANSITION_MS);
        let samples = self
            .progress_samples
            .unwrap_or(DEFAULT_PROGRESS_SAMPLES)
            .clamp(MIN_PROGRESS_SAMPLES, MAX_PROGRESS_SAMPLES);

        NotificationSettings {
            default_duration: Duration::from_millis(duration_ms),
            dismiss_transition: Duration::from_millis(transition_ms),
            progress_samples: samples,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_notification_duration_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_DURATION_MS)
}

fn default_dismiss_transition_ms() -> Option<u64> {
    Some(DEFAULT_DISMISS_TRANSITION_MS)
}

fn default_progress_samples() -> Option<u32> {
    Some(DEFAULT_PROGRESS_SAMPLES)
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
// Load / Save
// =============================================================================

/// Loads the configuration from `base_dir`, or the resolved config directory.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning that can be shown as a notification.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    log::warn!("Failed to load {}: {error}", path.display());
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to `base_dir`, or the resolved config directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no config directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            notifications: NotificationConfig {
                default_duration_ms: Some(2_500),
                dismiss_transition_ms: Some(150),
                progress_samples: Some(50),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\ntheme_mode = \"light\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.notifications, NotificationConfig::default());
    }

    #[test]
    fn invalid_file_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
    }

    #[test]
    fn absent_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn settings_use_five_second_default() {
        let settings = NotificationConfig::default().settings();
        assert_eq!(settings.default_duration, Duration::from_millis(5_000));
        assert_eq!(settings.dismiss_transition, Duration::from_millis(300));
        assert_eq!(settings.progress_samples, 100);
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let config = NotificationConfig {
            default_duration_ms: Some(10),
            dismiss_transition_ms: Some(1_000_000),
            progress_samples: Some(0),
        };
        let settings = config.settings();
        assert_eq!(
            settings.default_duration,
            Duration::from_millis(MIN_NOTIFICATION_DURATION_MS)
        );
        assert_eq!(
            settings.dismiss_transition,
            Duration::from_millis(MAX_DISMISS_TRANSITION_MS)
        );
        assert_eq!(settings.progress_samples, MIN_PROGRESS_SAMPLES);
    }
}
