// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::net::RemoteImage;
use crate::ui::dialog;
use crate::ui::home;
use crate::ui::list;
use crate::ui::overlay;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    List(list::Message),
    Dialog(dialog::Message),
    Overlay(overlay::Message),
    /// The root overlay button was pressed.
    OpenOverlay,
    /// Keyboard back (Escape): dismisses the overlay first, then pops.
    BackPressed,
    /// Result of a fire-and-forget thumbnail fetch.
    ThumbnailFetched {
        seed: u32,
        result: Result<RemoteImage, Error>,
    },
    /// Result of the dialog's showcase image fetch.
    DialogImageFetched(Result<RemoteImage, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional start route override (`home` or `list`).
    pub start: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_GALLERY_CONFIG_DIR` environment
    /// variable.
    pub config_dir: Option<String>,
}
