// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only keyboard back (Escape) is routed; everything else the screens handle
//! through widget interactions.

use super::Message;
use iced::{event, keyboard, Subscription};

/// Maps Escape to the back message. The update loop decides whether it
/// dismisses the overlay or pops a navigation frame.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = &event
        {
            return match status {
                event::Status::Ignored => Some(Message::BackPressed),
                event::Status::Captured => None,
            };
        }
        None
    })
}
