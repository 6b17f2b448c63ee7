// SPDX-License-Identifier: MPL-2.0
//! List screen: an app bar over a scrollable gallery of remote thumbnails.
//!
//! Thumbnail fetches are bound to viewport visibility. A row is requested the
//! first time it scrolls into view and never again for the lifetime of the
//! list, so scrolling back over loaded rows costs nothing. The scroll offset
//! is tracked from the scrollable's viewport and can be restored with a snap
//! task when the screen becomes current again.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::net::{ImageSpec, RemoteImage};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset, Viewport};
use iced::widget::{container, mouse_area, operation, Column, Container, Id, Image, Row, Scrollable, Space, Text};
use iced::{Background, Border, ContentFit, Element, Length, Rectangle, Task, Theme};
use std::collections::HashMap;
use std::ops::Range;

/// Identifier of the list scrollable, used for snap-back tasks.
pub const LIST_SCROLLABLE_ID: &str = "gallery-list";

/// Fixed row height; the visible-range math depends on it.
pub const ROW_HEIGHT: f32 = 80.0;

/// Contextual data needed to render the list screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the list screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A row was tapped. Row identity is deliberately not carried: every row
    /// opens the same fixed dialog image.
    RowPressed,
    Scrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
        relative: RelativeOffset,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenDialog,
    /// Newly visible rows whose thumbnails should be fetched.
    Fetch(Vec<ImageSpec>),
}

/// Lifecycle of one row's thumbnail.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(RemoteImage),
    Failed,
}

pub struct State {
    items: Vec<ImageSpec>,
    thumbnails: HashMap<u32, Thumbnail>,
    offset: AbsoluteOffset,
    relative: RelativeOffset,
    viewport_height: f32,
}

impl State {
    /// Creates the list state. `viewport_height` is an estimate until the
    /// first scroll event reports the real viewport.
    #[must_use]
    pub fn new(items: Vec<ImageSpec>, viewport_height: f32) -> Self {
        Self {
            items,
            thumbnails: HashMap::new(),
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            relative: RelativeOffset::START,
            viewport_height,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ImageSpec] {
        &self.items
    }

    #[must_use]
    pub fn offset(&self) -> AbsoluteOffset {
        self.offset
    }

    #[must_use]
    pub fn thumbnail(&self, seed: u32) -> Option<&Thumbnail> {
        self.thumbnails.get(&seed)
    }

    /// Number of rows ever requested.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.thumbnails.len()
    }

    /// Marks rows in the current visible range as loading and returns the
    /// specs that still need a fetch. Monotonic: a row is returned at most
    /// once per list lifetime.
    pub fn request_visible(&mut self) -> Vec<ImageSpec> {
        let range = self.visible_range();
        let mut pending = Vec::new();
        for spec in &self.items[range] {
            if !self.thumbnails.contains_key(&spec.seed) {
                self.thumbnails.insert(spec.seed, Thumbnail::Loading);
                pending.push(*spec);
            }
        }
        pending
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::RowPressed => Event::OpenDialog,
            Message::Scrolled {
                bounds,
                offset,
                relative,
            } => {
                self.offset = offset;
                self.relative = relative;
                self.viewport_height = bounds.height;

                let pending = self.request_visible();
                if pending.is_empty() {
                    Event::None
                } else {
                    Event::Fetch(pending)
                }
            }
        }
    }

    /// Stores a fetch result for a row.
    pub fn thumbnail_loaded(&mut self, seed: u32, result: Result<RemoteImage, Error>) {
        let thumbnail = match result {
            Ok(image) => Thumbnail::Ready(image),
            Err(_) => Thumbnail::Failed,
        };
        self.thumbnails.insert(seed, thumbnail);
    }

    /// Task that snaps the scrollable back to the tracked offset, used when
    /// returning to the list screen.
    #[must_use]
    pub fn snap_task<T>(&self) -> Task<T>
    where
        T: Send + 'static,
    {
        operation::snap_to(Id::new(LIST_SCROLLABLE_ID), self.relative)
    }

    /// Rows intersecting the current scroll viewport.
    fn visible_range(&self) -> Range<usize> {
        let len = self.items.len();
        let top = self.offset.y.max(0.0);
        let bottom = top + self.viewport_height.max(0.0);

        let start = (top / ROW_HEIGHT).floor() as usize;
        let end = (bottom / ROW_HEIGHT).ceil() as usize;

        start.min(len)..end.min(len)
    }

    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let mut rows = Column::new().width(Length::Fill);
        for spec in &self.items {
            rows = rows.push(self.row_view(spec, &ctx));
        }

        let list = Scrollable::new(rows)
            .id(Id::new(LIST_SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::Scrolled {
                bounds: viewport.bounds(),
                offset: viewport.absolute_offset(),
                relative: viewport.relative_offset(),
            });

        Column::new()
            .push(app_bar(&ctx))
            .push(list)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn row_view<'a>(&'a self, spec: &ImageSpec, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let label = Text::new(ctx.i18n.tr("list-item-label")).size(typography::BODY);

        let row = Row::new()
            .push(self.thumbnail_cell(spec.seed, ctx))
            .push(Space::new().width(spacing::MD))
            .push(label)
            .align_y(Vertical::Center);

        let content = Container::new(row)
            .width(Length::Fill)
            .height(Length::Fixed(ROW_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .align_y(Vertical::Center);

        mouse_area(content).on_press(Message::RowPressed).into()
    }

    fn thumbnail_cell<'a>(&'a self, seed: u32, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        match self.thumbnails.get(&seed) {
            Some(Thumbnail::Ready(image)) => Image::new(image.handle.clone())
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .content_fit(ContentFit::Cover)
                .into(),
            Some(Thumbnail::Failed) => {
                let label = Text::new(ctx.i18n.tr("list-thumbnail-failed"))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| iced::widget::text::Style {
                        color: Some(palette::ERROR_500),
                    });
                thumbnail_frame(label.into())
            }
            // Not yet requested, or still in flight: neutral placeholder.
            _ => thumbnail_frame(Space::new().into()),
        }
    }
}

fn thumbnail_frame(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn app_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("list-title")).size(typography::TITLE_MD);

    Container::new(title)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::APP_BAR_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .style(|theme: &Theme| {
            let surface = theme.extended_palette().background.weak.color;
            container::Style {
                background: Some(Background::Color(iced::Color {
                    a: opacity::SURFACE,
                    ..surface
                })),
                ..Default::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::gallery_items;

    fn viewport(height: f32, offset_y: f32) -> Message {
        Message::Scrolled {
            bounds: Rectangle {
                x: 0.0,
                y: 0.0,
                width: 360.0,
                height,
            },
            offset: AbsoluteOffset {
                x: 0.0,
                y: offset_y,
            },
            relative: RelativeOffset {
                x: 0.0,
                y: offset_y / (40.0 * ROW_HEIGHT),
            },
        }
    }

    fn seeds(specs: &[ImageSpec]) -> Vec<u32> {
        specs.iter().map(|spec| spec.seed).collect()
    }

    #[test]
    fn initial_request_covers_only_the_estimated_viewport() {
        let mut state = State::new(gallery_items(40, 300), 400.0);
        let pending = state.request_visible();
        assert_eq!(seeds(&pending), vec![0, 1, 2, 3, 4]);
        assert_eq!(state.requested(), 5);
    }

    #[test]
    fn repeated_request_is_monotonic() {
        let mut state = State::new(gallery_items(40, 300), 400.0);
        let first = state.request_visible();
        assert_eq!(first.len(), 5);
        assert!(state.request_visible().is_empty());
    }

    #[test]
    fn scrolling_requests_only_newly_exposed_rows() {
        let mut state = State::new(gallery_items(40, 300), 400.0);
        let _ = state.request_visible();

        let event = state.update(viewport(400.0, 160.0));
        // Rows 2..7 are visible; 0..5 were already requested.
        assert_eq!(event, Event::Fetch(vec![ImageSpec::square(5, 300), ImageSpec::square(6, 300)]));
    }

    #[test]
    fn scrolling_back_over_loaded_rows_fetches_nothing() {
        let mut state = State::new(gallery_items(40, 300), 400.0);
        let _ = state.request_visible();
        let _ = state.update(viewport(400.0, 160.0));

        let event = state.update(viewport(400.0, 0.0));
        assert_eq!(event, Event::None);
    }

    #[test]
    fn scroll_updates_tracked_offset() {
        let mut state = State::new(gallery_items(40, 300), 400.0);
        let _ = state.update(viewport(400.0, 240.0));
        assert_eq!(state.offset().y, 240.0);
    }

    #[test]
    fn range_is_clamped_at_the_end_of_the_list() {
        let mut state = State::new(gallery_items(5, 300), 400.0);
        let _ = state.update(viewport(400.0, 10_000.0));
        assert!(state.requested() <= 5);
    }

    #[test]
    fn row_press_opens_the_dialog() {
        let mut state = State::new(gallery_items(40, 300), 400.0);
        assert_eq!(state.update(Message::RowPressed), Event::OpenDialog);
    }

    #[test]
    fn thumbnail_results_replace_loading_state() {
        let mut state = State::new(gallery_items(40, 300), 400.0);
        let _ = state.request_visible();

        state.thumbnail_loaded(0, Ok(RemoteImage::from_rgba(1, 1, vec![255; 4])));
        assert!(matches!(state.thumbnail(0), Some(Thumbnail::Ready(_))));

        state.thumbnail_loaded(1, Err(Error::Http("boom".into())));
        assert!(matches!(state.thumbnail(1), Some(Thumbnail::Failed)));
    }

    #[test]
    fn list_view_renders() {
        let i18n = I18n::default();
        let mut state = State::new(gallery_items(40, 300), 400.0);
        state.thumbnail_loaded(0, Ok(RemoteImage::from_rgba(1, 1, vec![255; 4])));
        state.thumbnail_loaded(1, Err(Error::Http("boom".into())));
        let _element = state.view(ViewContext { i18n: &i18n });
    }
}
