// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced_gallery::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
    use iced_gallery::ui::theming::ThemeMode;

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::BLACK;
        let _ = palette::WHITE;
        let _ = palette::ERROR_500;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::SURFACE;

        // Sizing
        let _ = sizing::THUMBNAIL;

        // Radius
        let _ = radius::SM;
    }

    #[test]
    fn typography_keeps_a_readable_hierarchy() {
        assert!(typography::TITLE_MD > typography::BODY);
        assert!(typography::BODY > typography::CAPTION);
        assert!(typography::CAPTION >= 10.0);
    }

    #[test]
    fn bar_strips_fit_inside_the_minimum_window() {
        let reserved = sizing::STATUS_BAR_HEIGHT + sizing::NAVIGATION_BAR_HEIGHT + sizing::APP_BAR_HEIGHT;
        assert!(reserved < iced_gallery::app::MIN_WINDOW_HEIGHT as f32 / 2.0);
    }

    #[test]
    fn explicit_theme_modes_resolve_without_system_lookup() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }
}
