// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Every navigation change funnels through [`apply_nav`], which is where the
//! dialog screen's state is mounted and unmounted. Dropping the dialog state
//! is what releases its chrome override, so the mount/unmount pairing lives
//! in exactly one place.

use super::navigator::{NavEvent, Navigator, OverlayState, Route};
use super::Message;
use crate::chrome::ChromeController;
use crate::error::Error;
use crate::net::{self, ImageSpec, RemoteImage};
use crate::ui::dialog;
use crate::ui::home;
use crate::ui::list;
use crate::ui::overlay;
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub navigator: &'a mut Navigator,
    pub list: &'a mut list::State,
    pub dialog: &'a mut Option<dialog::State>,
    pub chrome: &'a ChromeController,
    pub image_host: &'a str,
    pub dialog_spec: ImageSpec,
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match home::update(&message) {
        home::Event::OpenDialog => apply_nav(ctx, NavEvent::OpenDialog),
    }
}

pub fn handle_list_message(ctx: &mut UpdateContext<'_>, message: list::Message) -> Task<Message> {
    match ctx.list.update(message) {
        list::Event::None => Task::none(),
        list::Event::OpenDialog => apply_nav(ctx, NavEvent::OpenDialog),
        list::Event::Fetch(specs) => fetch_thumbnails(ctx.image_host, specs),
    }
}

pub fn handle_dialog_message(
    ctx: &mut UpdateContext<'_>,
    message: dialog::Message,
) -> Task<Message> {
    let Some(state) = ctx.dialog.as_ref() else {
        return Task::none();
    };
    match state.update(&message) {
        dialog::Event::Dismissed => apply_nav(ctx, NavEvent::Back),
    }
}

pub fn handle_overlay_message(
    ctx: &mut UpdateContext<'_>,
    message: overlay::Message,
) -> Task<Message> {
    match overlay::update(&message) {
        overlay::Event::Dismissed => apply_nav(ctx, NavEvent::DismissOverlay),
    }
}

pub fn handle_open_overlay(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    apply_nav(ctx, NavEvent::ShowOverlay)
}

/// Keyboard back: the overlay swallows it first, then the route stack pops.
pub fn handle_back_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.navigator.overlay() == OverlayState::Visible {
        return apply_nav(ctx, NavEvent::DismissOverlay);
    }
    if ctx.navigator.depth() > 1 {
        return apply_nav(ctx, NavEvent::Back);
    }
    Task::none()
}

pub fn handle_thumbnail_fetched(
    ctx: &mut UpdateContext<'_>,
    seed: u32,
    result: Result<RemoteImage, Error>,
) -> Task<Message> {
    ctx.list.thumbnail_loaded(seed, result);
    Task::none()
}

pub fn handle_dialog_image_fetched(
    ctx: &mut UpdateContext<'_>,
    result: Result<RemoteImage, Error>,
) -> Task<Message> {
    // The dialog may already have been dismissed; the late result is dropped.
    if let Some(state) = ctx.dialog.as_mut() {
        state.image_loaded(result);
    }
    Task::none()
}

/// Applies a navigation event and reconciles screen state with the new route:
/// entering the dialog mounts its state and starts the showcase fetch,
/// leaving it drops the state (restoring the chrome) and snaps the list back
/// to its tracked scroll offset.
pub fn apply_nav(ctx: &mut UpdateContext<'_>, event: NavEvent) -> Task<Message> {
    let before = ctx.navigator.current();
    *ctx.navigator = ctx.navigator.apply(event);
    let after = ctx.navigator.current();

    if before != Route::Dialog && after == Route::Dialog {
        let state = dialog::State::mount(ctx.chrome, ctx.dialog_spec);
        let url = state.spec().url(ctx.image_host);
        *ctx.dialog = Some(state);
        return Task::perform(net::fetch_image(url), Message::DialogImageFetched);
    }

    if before == Route::Dialog && after != Route::Dialog {
        *ctx.dialog = None;
        if after == Route::List {
            return ctx.list.snap_task();
        }
    }

    Task::none()
}

/// One fire-and-forget fetch task per newly visible row.
pub(crate) fn fetch_thumbnails(host: &str, specs: Vec<ImageSpec>) -> Task<Message> {
    Task::batch(specs.into_iter().map(|spec| {
        let url = spec.url(host);
        let seed = spec.seed;
        Task::perform(net::fetch_image(url), move |result| {
            Message::ThumbnailFetched { seed, result }
        })
    }))
}
