// SPDX-License-Identifier: MPL-2.0
//! Home screen: a single button that opens the dialog screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Container, Text};
use iced::{Element, Length};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    OpenDialog,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenDialog,
}

/// Process a home screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenDialog => Event::OpenDialog,
    }
}

/// Render the home screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let open_button = button(Text::new(ctx.i18n.tr("home-open-dialog-button")).size(typography::BODY))
        .on_press(Message::OpenDialog);

    Container::new(open_button)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_dialog_emits_event() {
        let event = update(&Message::OpenDialog);
        assert_eq!(event, Event::OpenDialog);
    }

    #[test]
    fn home_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n };
        let _element = view(ctx);
    }
}
