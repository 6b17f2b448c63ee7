// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! The settings file location is resolved in priority order:
//! 1. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 2. **Environment variable** (`ICED_GALLERY_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate
//!
//! The CLI override should be initialized once at startup, before any path
//! resolution happens.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "IcedGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory, if one can be resolved.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = cli_config_dir() {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut dir| {
        dir.push(APP_NAME);
        dir
    })
}

/// Lock shared by every test that touches `ICED_GALLERY_CONFIG_DIR`, so
/// parallel test modules cannot observe each other's temp directories.
#[cfg(test)]
pub(crate) fn test_env_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: OnceLock<std::sync::Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_variable_overrides_platform_default() {
        let _guard = test_env_lock().lock().expect("failed to lock mutex");
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/iced-gallery-test-config");

        assert_eq!(
            config_dir(),
            Some(PathBuf::from("/tmp/iced-gallery-test-config"))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_variable_falls_through() {
        let _guard = test_env_lock().lock().expect("failed to lock mutex");
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(dir) = config_dir() {
            assert!(dir.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
