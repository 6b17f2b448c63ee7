// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Image host, item count, and image dimensions
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set `ICED_GALLERY_CONFIG_DIR` (or pass `--config-dir`)
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::theming::ThemeMode;

const CONFIG_FILE: &str = "settings.toml";

/// Localized warning shown when the settings file cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "config-load-warning";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
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

/// Gallery content settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GalleryConfig {
    /// Base URL of the seeded image service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_host: Option<String>,

    /// Number of rows in the list screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u32>,

    /// Edge length requested for list thumbnails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_size: Option<u32>,

    /// Seed of the fixed dialog image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_seed: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    #[must_use]
    pub fn image_host(&self) -> &str {
        self.gallery.image_host.as_deref().unwrap_or(DEFAULT_IMAGE_HOST)
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.gallery.item_count.unwrap_or(DEFAULT_ITEM_COUNT)
    }

    #[must_use]
    pub fn thumbnail_size(&self) -> u32 {
        self.gallery.thumbnail_size.unwrap_or(DEFAULT_THUMBNAIL_SIZE)
    }

    #[must_use]
    pub fn dialog_seed(&self) -> u32 {
        self.gallery.dialog_seed.unwrap_or(DEFAULT_DIALOG_SEED)
    }
}

/// Returns the settings file path, if a config directory can be resolved.
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    paths::config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration, falling back to defaults.
///
/// A missing file is normal (first launch) and yields plain defaults; an
/// unreadable or malformed file yields defaults plus a warning key the UI
/// surfaces once.
#[must_use]
pub fn load() -> (Config, Option<&'static str>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some(CONFIG_LOAD_WARNING_KEY)),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the resolved settings path.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = config_file_path() else {
        return Ok(());
    };
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string(config)?;
    fs::write(path, contents)?;
    Ok(())
}
