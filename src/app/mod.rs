// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the navigator, the list and dialog
//! screens, the chrome controller, and localization, and translates messages
//! into side effects like image fetches or scroll restoration. Policy
//! decisions (start route, window size, bar heights) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
mod navigator;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use navigator::{NavEvent, Navigator, OverlayState, Route};

use crate::chrome::{ChromeController, SystemBarAppearance};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::net::{self, ImageSpec};
use crate::ui::design_tokens::sizing;
use crate::ui::dialog;
use crate::ui::insets::WindowInsets;
use crate::ui::list;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging navigation, screens, localization,
/// and the simulated window chrome.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator,
    list: list::State,
    dialog: Option<dialog::State>,
    chrome: ChromeController,
    insets: WindowInsets,
    theme_mode: ThemeMode,
    image_host: String,
    dialog_spec: ImageSpec,
    config_warning: Option<&'static str>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.navigator.current())
            .field("overlay", &self.navigator.overlay())
            .field("dialog_open", &self.dialog.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Vertical space the list's scroll viewport gets before the first scroll
/// event reports the real value: the window minus the bars and the app bar.
fn initial_list_viewport(insets: WindowInsets) -> f32 {
    insets.content_height(WINDOW_DEFAULT_HEIGHT as f32) - sizing::APP_BAR_HEIGHT
}

/// Resolves the `--start` flag; List is the default, Home the alternate.
fn start_route(flag: Option<&str>) -> Route {
    match flag {
        Some(value) if value.eq_ignore_ascii_case("home") => Route::Home,
        _ => Route::List,
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let insets = WindowInsets::default();
        Self {
            i18n: I18n::default(),
            navigator: Navigator::new(Route::List),
            list: list::State::new(
                net::gallery_items(config::DEFAULT_ITEM_COUNT, config::DEFAULT_THUMBNAIL_SIZE),
                initial_list_viewport(insets),
            ),
            dialog: None,
            chrome: ChromeController::new(SystemBarAppearance::transparent(true)),
            insets,
            theme_mode: ThemeMode::System,
            image_host: config::DEFAULT_IMAGE_HOST.to_string(),
            dialog_spec: ImageSpec::new(
                config::DEFAULT_DIALOG_SEED,
                config::DIALOG_IMAGE_WIDTH,
                config::DIALOG_IMAGE_HEIGHT,
            ),
            config_warning: None,
        }
    }
}

impl App {
    /// Initializes application state from config and flags and kicks off the
    /// thumbnail fetches for the initially visible rows.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = config.general.theme_mode;
        let insets = WindowInsets::default();

        let items = net::gallery_items(config.item_count(), config.thumbnail_size());
        let mut list = list::State::new(items, initial_list_viewport(insets));
        let pending = list.request_visible();

        // Status icons are dark on a light theme, like the original demo.
        let dark_icons = !theme_mode.is_dark();

        let image_host = config.image_host().to_string();
        let task = update::fetch_thumbnails(&image_host, pending);

        let app = App {
            i18n,
            navigator: Navigator::new(start_route(flags.start.as_deref())),
            list,
            dialog: None,
            chrome: ChromeController::new(SystemBarAppearance::transparent(dark_icons)),
            insets,
            theme_mode,
            image_host,
            dialog_spec: ImageSpec::new(
                config.dialog_seed(),
                config::DIALOG_IMAGE_WIDTH,
                config::DIALOG_IMAGE_HEIGHT,
            ),
            config_warning,
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.navigator.current() {
            Route::Dialog => format!("{} - {}", self.i18n.tr("dialog-title"), app_name),
            Route::Home | Route::List => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            navigator: &mut self.navigator,
            list: &mut self.list,
            dialog: &mut self.dialog,
            chrome: &self.chrome,
            image_host: &self.image_host,
            dialog_spec: self.dialog_spec,
        };

        match message {
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::List(list_message) => update::handle_list_message(&mut ctx, list_message),
            Message::Dialog(dialog_message) => {
                update::handle_dialog_message(&mut ctx, dialog_message)
            }
            Message::Overlay(overlay_message) => {
                update::handle_overlay_message(&mut ctx, overlay_message)
            }
            Message::OpenOverlay => update::handle_open_overlay(&mut ctx),
            Message::BackPressed => update::handle_back_pressed(&mut ctx),
            Message::ThumbnailFetched { seed, result } => {
                update::handle_thumbnail_fetched(&mut ctx, seed, result)
            }
            Message::DialogImageFetched(result) => {
                update::handle_dialog_image_fetched(&mut ctx, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: self.navigator.current(),
            overlay: self.navigator.overlay(),
            list: &self.list,
            dialog: self.dialog.as_ref(),
            appearance: self.chrome.current(),
            insets: self.insets,
            config_warning: self.config_warning,
        })
    }
}
