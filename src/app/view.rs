// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current route inside the inset frame, stacks the root overlay
//! button above it, and the full-screen overlay above everything when
//! visible.

use super::navigator::{OverlayState, Route};
use super::Message;
use crate::chrome::SystemBarAppearance;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::dialog;
use crate::ui::home;
use crate::ui::insets::{self, WindowInsets};
use crate::ui::list;
use crate::ui::overlay;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Container, Stack, Text};
use iced::{Background, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub overlay: OverlayState,
    pub list: &'a list::State,
    pub dialog: Option<&'a dialog::State>,
    pub appearance: SystemBarAppearance,
    pub insets: WindowInsets,
    pub config_warning: Option<&'static str>,
}

/// Renders the application view for the current navigation state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match ctx.route {
        Route::Home => home::view(home::ViewContext { i18n: ctx.i18n }).map(Message::Home),
        Route::List => ctx
            .list
            .view(list::ViewContext { i18n: ctx.i18n })
            .map(Message::List),
        Route::Dialog => view_dialog(ctx.dialog, ctx.i18n),
    };

    let screen = match ctx.config_warning {
        Some(key) => with_warning_banner(screen, ctx.i18n.tr(key)),
        None => screen,
    };

    let framed = insets::frame(screen, ctx.insets, ctx.appearance);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(framed);

    match ctx.overlay {
        OverlayState::Hidden => {
            layers = layers.push(overlay_button(ctx.i18n));
        }
        OverlayState::Visible => {
            layers = layers.push(overlay::view(ctx.i18n).map(Message::Overlay));
        }
    }

    layers.into()
}

fn view_dialog<'a>(state: Option<&'a dialog::State>, i18n: &'a I18n) -> Element<'a, Message> {
    if let Some(state) = state {
        state.view(dialog::ViewContext { i18n }).map(Message::Dialog)
    } else {
        // Fallback if the dialog state is missing
        Container::new(Text::new("Dialog error"))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Thin strip shown once when the settings file could not be read.
fn with_warning_banner(screen: Element<'_, Message>, label: String) -> Element<'_, Message> {
    let banner = Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .padding([spacing::XS / 2.0, spacing::MD])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(iced::Color {
                a: opacity::SURFACE,
                ..palette::WARNING_500
            })),
            ..Default::default()
        });

    Column::new()
        .push(banner)
        .push(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Root-owned button that toggles the full-screen overlay variant.
fn overlay_button(i18n: &I18n) -> Element<'_, Message> {
    let open = button(Text::new(i18n.tr("overlay-open-button")).size(typography::CAPTION))
        .on_press(Message::OpenOverlay);

    Container::new(open)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}
