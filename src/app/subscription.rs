// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window geometry and the pointer are tracked globally so the navbar can
//! tell an outside click from a click on one of its own regions.

use super::Message;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Routes resize, cursor and left-press events regardless of capture
/// status: a press on a button still counts as a press for the menu.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
