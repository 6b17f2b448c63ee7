// SPDX-License-Identifier: MPL-2.0
//! Default values for user-configurable settings.

use crate::ui::theming::ThemeMode;

/// Seeded placeholder image service the gallery pulls from.
pub const DEFAULT_IMAGE_HOST: &str = "https://picsum.photos";

/// Number of rows in the list screen.
pub const DEFAULT_ITEM_COUNT: u32 = 40;

/// Edge length requested for list thumbnails.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 300;

/// Seed of the fixed image shown by the dialog screen.
pub const DEFAULT_DIALOG_SEED: u32 = 870;

/// Dimensions requested for the dialog image.
pub const DIALOG_IMAGE_WIDTH: u32 = 1200;
pub const DIALOG_IMAGE_HEIGHT: u32 = 800;

pub(crate) fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}
