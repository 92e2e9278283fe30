// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window focus changes feed the toast manager's pause-on-focus-loss
//! behavior; a periodic tick drives toast auto-dismiss while any
//! notification is showing.

use super::Message;
use crate::config::defaults::TOAST_TICK_MS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window focus events to the application.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Focused) => Some(Message::FocusChanged(true)),
        event::Event::Window(window::Event::Unfocused) => Some(Message::FocusChanged(false)),
        _ => None,
    })
}

/// Creates a periodic tick subscription for toast auto-dismiss.
///
/// Only active while notifications are showing, so an idle application
/// schedules no wakeups.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TOAST_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
