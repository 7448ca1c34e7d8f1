// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[swipe]` - Gesture thresholds, exit animation and deck exhaustion
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//!    (`save_to_path()` is also what writes a hand-tuned file from code)
//! 2. Set `SWIPE_SHOP_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use swipe_shop::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.swipe.commit_threshold = Some(150.0);
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::deck::{RefillPolicy, ReloadSource, StopWhenExhausted};
use crate::domain::swipe::{
    CommitThreshold, ExitDuration, ExitRotation, InvalidThresholds, PeekThreshold,
    SwipeThresholds,
};
use crate::error::{Error, Result};
use crate::swipe::{GestureAnchor, SwipeSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key shown when `settings.toml` cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

/// Warning key shown when the stored thresholds are out of order.
pub const INVALID_THRESHOLDS_KEY: &str = "notification-config-invalid-thresholds";

// =============================================================================
// Enums
// =============================================================================

/// What the deck does once every card has been swiped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ExhaustionMode {
    /// Start over with the same products.
    #[default]
    Reload,
    /// Show the empty state.
    Stop,
}

impl ExhaustionMode {
    #[must_use]
    pub fn into_policy(self) -> Box<dyn RefillPolicy> {
        match self {
            ExhaustionMode::Reload => Box::new(ReloadSource),
            ExhaustionMode::Stop => Box::new(StopWhenExhausted),
        }
    }
}

impl FromStr for ExhaustionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "reload" => Ok(ExhaustionMode::Reload),
            "stop" => Ok(ExhaustionMode::Stop),
            other => Err(Error::Config(format!(
                "unknown exhaustion mode '{other}' (expected 'reload' or 'stop')"
            ))),
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Swipe gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal distance at which the direction badge appears.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peek_threshold: Option<f32>,

    /// Horizontal distance past which a release commits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_threshold: Option<f32>,

    /// Exit animation length in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_duration_ms: Option<u64>,

    /// Card rotation at the end of the exit animation, in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_rotation_deg: Option<f32>,

    /// Deck behavior after the last card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhaustion: Option<ExhaustionMode>,

    /// Point the drag offset is measured from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<GestureAnchor>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            peek_threshold: Some(DEFAULT_PEEK_THRESHOLD),
            commit_threshold: Some(DEFAULT_COMMIT_THRESHOLD),
            exit_duration_ms: Some(DEFAULT_EXIT_DURATION_MS),
            exit_rotation_deg: Some(DEFAULT_EXIT_ROTATION_DEG),
            exhaustion: Some(ExhaustionMode::default()),
            anchor: Some(GestureAnchor::default()),
        }
    }
}

impl SwipeConfig {
    /// Builds engine settings, clamping each value into its valid range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Settings`] when the commit threshold is not larger
    /// than the peek threshold.
    pub fn to_settings(&self) -> Result<SwipeSettings> {
        Ok(self.settings_with(self.thresholds()?))
    }

    /// Like [`Self::to_settings`], but falls back to defaults and returns the
    /// rejected threshold pair instead of failing.
    #[must_use]
    pub fn to_settings_or_default(&self) -> (SwipeSettings, Option<InvalidThresholds>) {
        match self.thresholds() {
            Ok(thresholds) => (self.settings_with(thresholds), None),
            Err(invalid) => {
                tracing::warn!("{invalid}; using default swipe settings");
                (SwipeSettings::default(), Some(invalid))
            }
        }
    }

    fn thresholds(&self) -> std::result::Result<SwipeThresholds, InvalidThresholds> {
        let peek = PeekThreshold::new(self.peek_threshold.unwrap_or(DEFAULT_PEEK_THRESHOLD));
        let commit =
            CommitThreshold::new(self.commit_threshold.unwrap_or(DEFAULT_COMMIT_THRESHOLD));
        SwipeThresholds::new(peek, commit)
    }

    fn settings_with(&self, thresholds: SwipeThresholds) -> SwipeSettings {
        SwipeSettings {
            thresholds,
            exit_duration: ExitDuration::from_millis(
                self.exit_duration_ms.unwrap_or(DEFAULT_EXIT_DURATION_MS),
            ),
            exit_rotation: ExitRotation::from_degrees(
                self.exit_rotation_deg.unwrap_or(DEFAULT_EXIT_ROTATION_DEG),
            ),
            anchor: self.anchor.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn exhaustion_mode(&self) -> ExhaustionMode {
        self.exhaustion.unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with sectioned structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub swipe: SwipeConfig,
}

// =============================================================================
// Path Functions
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
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
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
