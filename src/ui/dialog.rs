// SPDX-License-Identifier: MPL-2.0
//! Dialog screen: a full-bleed image over a black background.
//!
//! The screen owns a [`ChromeOverride`] for its whole lifetime: mounting
//! recolors the simulated system bars to opaque black, and dropping the state
//! (tap, keyboard back, programmatic pop, teardown) restores whatever
//! appearance was current before the dialog opened.

use crate::chrome::{ChromeController, ChromeOverride, SystemBarAppearance};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::net::{ImageSpec, RemoteImage};
use crate::ui::design_tokens::{palette, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, mouse_area, Container, Image, Text};
use iced::{Background, ContentFit, Element, Length, Theme};

/// Contextual data needed to render the dialog screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the dialog screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// The image (or its placeholder) was tapped.
    Pressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Dismissed,
}

/// Lifecycle of the showcase image.
#[derive(Debug, Clone)]
enum Phase {
    Loading,
    Ready(RemoteImage),
    Failed,
}

#[derive(Debug)]
pub struct State {
    spec: ImageSpec,
    image: Phase,
    _chrome: ChromeOverride,
}

impl State {
    /// Mounts the dialog: acquires the bar override and records the spec the
    /// caller should fetch.
    #[must_use]
    pub fn mount(chrome: &ChromeController, spec: ImageSpec) -> Self {
        Self {
            spec,
            image: Phase::Loading,
            _chrome: ChromeOverride::acquire(chrome, SystemBarAppearance::opaque_dark()),
        }
    }

    /// The fixed spec this dialog displays.
    #[must_use]
    pub fn spec(&self) -> ImageSpec {
        self.spec
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.image, Phase::Loading)
    }

    /// Stores the fetch result.
    pub fn image_loaded(&mut self, result: Result<RemoteImage, Error>) {
        self.image = match result {
            Ok(image) => Phase::Ready(image),
            Err(_) => Phase::Failed,
        };
    }

    /// Process a dialog message and return the corresponding event.
    #[must_use]
    pub fn update(&self, message: &Message) -> Event {
        match message {
            Message::Pressed => Event::Dismissed,
        }
    }

    /// Render the dialog screen.
    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let content: Element<'_, Message> = match &self.image {
            Phase::Ready(image) => Image::new(image.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            Phase::Loading => status_text(ctx.i18n.tr("dialog-image-loading")),
            Phase::Failed => status_text(ctx.i18n.tr("dialog-image-failed")),
        };

        let backdrop = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(palette::BLACK)),
                ..Default::default()
            });

        mouse_area(backdrop).on_press(Message::Pressed).into()
    }
}

fn status_text<'a>(label: String) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::WHITE),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::ChromeController;

    fn controller() -> ChromeController {
        ChromeController::new(SystemBarAppearance::transparent(true))
    }

    #[test]
    fn mounting_applies_the_dark_bar_override() {
        let chrome = controller();
        let _state = State::mount(&chrome, ImageSpec::square(870, 300));
        assert_eq!(chrome.current(), SystemBarAppearance::opaque_dark());
    }

    #[test]
    fn dropping_the_state_restores_the_bars() {
        let chrome = controller();
        {
            let _state = State::mount(&chrome, ImageSpec::square(870, 300));
        }
        assert_eq!(chrome.current(), SystemBarAppearance::transparent(true));
    }

    #[test]
    fn press_dismisses() {
        let chrome = controller();
        let state = State::mount(&chrome, ImageSpec::square(870, 300));
        assert_eq!(state.update(&Message::Pressed), Event::Dismissed);
    }

    #[test]
    fn image_result_replaces_loading_phase() {
        let chrome = controller();
        let mut state = State::mount(&chrome, ImageSpec::square(870, 300));
        assert!(state.is_loading());

        state.image_loaded(Ok(RemoteImage::from_rgba(1, 1, vec![0; 4])));
        assert!(!state.is_loading());
        assert!(matches!(state.image, Phase::Ready(_)));
    }

    #[test]
    fn failed_fetch_marks_failed() {
        let chrome = controller();
        let mut state = State::mount(&chrome, ImageSpec::square(870, 300));
        state.image_loaded(Err(Error::Http("boom".into())));
        assert!(matches!(state.image, Phase::Failed));
    }

    #[test]
    fn dialog_view_renders_every_phase() {
        let i18n = I18n::default();
        let chrome = controller();
        let mut state = State::mount(&chrome, ImageSpec::square(870, 300));
        drop(state.view(ViewContext { i18n: &i18n }));

        state.image_loaded(Ok(RemoteImage::from_rgba(1, 1, vec![0; 4])));
        drop(state.view(ViewContext { i18n: &i18n }));

        state.image_loaded(Err(Error::Http("boom".into())));
        drop(state.view(ViewContext { i18n: &i18n }));
    }
}
