// SPDX-License-Identifier: MPL-2.0
//! Standalone full-screen overlay stacked above the route content.
//!
//! Reports its own measured size, the way the original demo surfaced the
//! dialog's laid-out dimensions. Tapping anywhere dismisses it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, mouse_area, responsive, Column, Container, Text};
use iced::{Background, Element, Length, Size, Theme};

/// Messages emitted by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Dismissed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Dismissed,
}

/// Process an overlay message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Dismissed => Event::Dismissed,
    }
}

/// Render the overlay; the content reads back its measured size.
#[must_use]
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = i18n.tr("overlay-title");
    let width_label = i18n.tr("overlay-width-label");
    let height_label = i18n.tr("overlay-height-label");
    let hint = i18n.tr("overlay-dismiss-hint");

    let measured = responsive(move |size: Size| {
        let column = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(light_text(title.clone(), typography::TITLE_MD))
            .push(light_text(
                format!("{}: {:.0}", width_label, size.width),
                typography::BODY,
            ))
            .push(light_text(
                format!("{}: {:.0}", height_label, size.height),
                typography::BODY,
            ))
            .push(light_text(hint.clone(), typography::CAPTION));

        let centered: Element<'_, Message> = Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
        centered
    });

    let backdrop = Container::new(measured)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::BLACK)),
            ..Default::default()
        });

    mouse_area(backdrop).on_press(Message::Dismissed).into()
}

fn light_text<'a>(label: String, size: f32) -> Element<'a, Message> {
    Text::new(label)
        .size(size)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::WHITE),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissed_emits_event() {
        let event = update(&Message::Dismissed);
        assert_eq!(event, Event::Dismissed);
    }

    #[test]
    fn overlay_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }
}
