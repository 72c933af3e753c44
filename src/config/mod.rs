// SPDX-License-Identifier: MPL-2.0
//! This module handles the carousel's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[carousel]` - Autoplay, interval, transition and frame timings
//! - `[keyboard]` - Arrow-key binding and grace-period policy
//! - `[diagnostics]` - Event journal capacity
//!
//! Missing keys fall back to the values in [`defaults`]. Out-of-range values
//! are kept as written and clamped when converted into controller options.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `HERO_CAROUSEL_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use hero_carousel::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the rotation down
//! config.carousel.autoplay_interval_ms = Some(8_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

pub use crate::domain::carousel::ResumePolicy;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load_with_override`] when the file is unreadable.
pub const LOAD_ERROR_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Rotation timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Whether slides rotate on their own.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Time between automatic advances.
    #[serde(
        default = "default_autoplay_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_interval_ms: Option<u64>,

    /// How long navigation stays locked after a slide change.
    #[serde(
        default = "default_transition_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_duration_ms: Option<u64>,

    /// Progress sampling period.
    #[serde(
        default = "default_frame_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_interval_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            transition_duration_ms: default_transition_duration_ms(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

/// Keyboard navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyboardConfig {
    /// Whether the arrow keys navigate.
    #[serde(
        default = "default_keyboard_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<bool>,

    /// How overlapping grace periods after key presses combine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_policy: Option<ResumePolicy>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            enabled: default_keyboard_enabled(),
            resume_policy: None,
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Maximum number of events the journal keeps.
    #[serde(
        default = "default_journal_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub journal_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            journal_capacity: default_journal_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Complete settings file, one field per section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub keyboard: KeyboardConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_autoplay_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_transition_duration_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_DURATION_MS)
}

fn default_frame_interval_ms() -> Option<u64> {
    Some(DEFAULT_FRAME_INTERVAL_MS)
}

fn default_keyboard_enabled() -> Option<bool> {
    Some(true)
}

fn default_journal_capacity() -> Option<usize> {
    Some(DEFAULT_JOURNAL_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn settings_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads `settings.toml` from the resolved settings directory.
///
/// Never fails: a missing file yields defaults, an unreadable or invalid one
/// yields defaults plus [`LOAD_ERROR_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Like [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = settings_path(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "falling back to default settings"
                    );
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Parses the settings file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Writes `settings.toml` into the resolved settings directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Like [`save`], writing into `base_dir` when given.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = settings_path(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Writes `config` to `path`, creating parent directories.
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
