// SPDX-License-Identifier: MPL-2.0
//! Simulated window insets: status and navigation bar strips.
//!
//! Inset *computation* belongs to the host platform; these fixed heights
//! stand in for it. The strips are painted with whatever
//! [`SystemBarAppearance`] is current, so a screen that overrides the chrome
//! recolors both bars for as long as its override lives.

use crate::chrome::SystemBarAppearance;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{container, Column, Container, Row, Space, Text};
use iced::{Background, Element, Length, Theme};

/// Heights reserved for the simulated system bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowInsets {
    pub status_bar: f32,
    pub navigation_bar: f32,
}

impl Default for WindowInsets {
    fn default() -> Self {
        Self {
            status_bar: sizing::STATUS_BAR_HEIGHT,
            navigation_bar: sizing::NAVIGATION_BAR_HEIGHT,
        }
    }
}

impl WindowInsets {
    /// Vertical space left for screen content inside a window of `height`.
    #[must_use]
    pub fn content_height(&self, window_height: f32) -> f32 {
        (window_height - self.status_bar - self.navigation_bar).max(0.0)
    }
}

/// Wraps screen content between the status and navigation bar strips.
pub fn frame<'a, Message: 'a>(
    content: Element<'a, Message>,
    insets: WindowInsets,
    appearance: SystemBarAppearance,
) -> Element<'a, Message> {
    Column::new()
        .push(status_bar(insets.status_bar, appearance))
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(navigation_bar(insets.navigation_bar, appearance))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_bar<'a, Message: 'a>(
    height: f32,
    appearance: SystemBarAppearance,
) -> Element<'a, Message> {
    let icon_color = if appearance.dark_icons {
        palette::GRAY_900
    } else {
        palette::WHITE
    };

    // Stand-in status glyphs, tinted like real status icons would be.
    let indicators = Text::new("\u{25CF} \u{25CF} \u{25CF}")
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| iced::widget::text::Style {
            color: Some(icon_color),
        });

    let row = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(indicators)
        .push(Space::new().width(spacing::MD))
        .align_y(iced::alignment::Vertical::Center);

    bar_strip(height, appearance, row.into())
}

fn navigation_bar<'a, Message: 'a>(
    height: f32,
    appearance: SystemBarAppearance,
) -> Element<'a, Message> {
    let icon_color = if appearance.dark_icons {
        palette::GRAY_900
    } else {
        palette::WHITE
    };

    // Gesture pill, like the one at the bottom of a phone screen.
    let pill = Text::new("\u{2501}\u{2501}\u{2501}")
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| iced::widget::text::Style {
            color: Some(icon_color),
        });

    bar_strip(height, appearance, pill.into())
}

fn bar_strip<'a, Message: 'a>(
    height: f32,
    appearance: SystemBarAppearance,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let background = appearance.background;

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        })
        .into()
}
