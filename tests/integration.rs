// SPDX-License-Identifier: MPL-2.0
use iced_gallery::chrome::{ChromeController, ChromeOverride, SystemBarAppearance};
use iced_gallery::config::{self, Config};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::net::gallery_items;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_gallery_urls_follow_the_documented_template() {
    let config = Config::default();
    let items = gallery_items(config.item_count(), config.thumbnail_size());

    assert_eq!(items.len(), 40);
    assert_eq!(
        items[7].url(config.image_host()),
        "https://picsum.photos/seed/7/300/300"
    );

    // Seeds are unique within one list construction
    let mut seeds: Vec<u32> = items.iter().map(|item| item.seed).collect();
    seeds.dedup();
    assert_eq!(seeds.len(), items.len());
}

#[test]
fn test_chrome_override_survives_a_full_screen_lifecycle() {
    // The appearance a screen finds on mount is the one it must leave behind,
    // no matter how it exits or what it changed in between.
    let initial = SystemBarAppearance::transparent(false);
    let controller = ChromeController::new(initial);

    // Mount: dialog recolors the bars
    let over = ChromeOverride::acquire(&controller, SystemBarAppearance::opaque_dark());
    assert_eq!(controller.current(), SystemBarAppearance::opaque_dark());

    // A nested overlay recolors them again and leaves first
    let nested = ChromeOverride::acquire(
        &controller,
        SystemBarAppearance {
            background: iced::Color::from_rgb(0.0, 0.0, 0.2),
            dark_icons: false,
        },
    );
    drop(nested);
    assert_eq!(controller.current(), SystemBarAppearance::opaque_dark());

    // Unmount: the original appearance is back
    drop(over);
    assert_eq!(controller.current(), initial);
}
