// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts, drives the
//! auto-dismiss clock from the shared [`Options`], and suspends that clock
//! while paused (pointer hover or focus loss, when the options ask for it).

use super::notification::{Notification, ToastId};
use super::options::Options;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification via its close button.
    Dismiss(ToastId),
    /// The toast body was clicked.
    Clicked(ToastId),
    /// The pointer entered or left the toast stack.
    HoverChanged(bool),
}

/// A visible notification together with its accrued display time.
#[derive(Debug, Clone)]
struct Entry {
    notification: Notification,
    shown: Duration,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Presentation options, read once at construction.
    options: Options,
    /// Currently visible notifications (newest first).
    visible: VecDeque<Entry>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    /// Whether the pointer is over the toast stack.
    hovered: bool,
    /// Whether the application window has focus.
    focused: bool,
    /// Instant of the last processed tick.
    last_tick: Option<Instant>,
}

impl Manager {
    /// Creates an empty manager governed by the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            hovered: false,
            focused: true,
            last_tick: None,
        }
    }

    /// Returns the presentation options this manager was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than [`MAX_VISIBLE`] notifications are showing, it's
    /// displayed immediately. Otherwise, it's added to the queue and shown
    /// when space becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(Entry {
                notification,
                shown: Duration::ZERO,
            });
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.visible.iter().position(|e| e.notification.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Handles a click on a toast body, dismissing it when the options
    /// enable click-to-close.
    pub fn clicked(&mut self, id: ToastId) {
        if self.options.close_on_click {
            self.dismiss(id);
        }
    }

    /// Records whether the pointer is over the toast stack.
    ///
    /// Only pauses the dismiss clock when `pause_on_hover` is set.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Records whether the application window has focus.
    ///
    /// Only pauses the dismiss clock when `pause_on_focus_loss` is set.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the pointer is currently over the toast stack.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the auto-dismiss clock is currently suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        (self.options.pause_on_hover && self.hovered)
            || (self.options.pause_on_focus_loss && !self.focused)
    }

    /// Processes a tick, accruing display time and dismissing expired
    /// notifications.
    ///
    /// Should be called periodically (e.g., every 100ms) while notifications
    /// are showing. Time spent paused does not count against a toast's
    /// visible duration.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = match self.last_tick {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);

        if self.is_paused() {
            return;
        }

        for entry in &mut self.visible {
            entry.shown += elapsed;
        }

        let shared = self.options.timeout;
        let expired: Vec<ToastId> = self
            .visible
            .iter()
            .filter(|e| {
                e.notification
                    .effective_timeout(shared)
                    .duration()
                    .is_some_and(|limit| e.shown >= limit)
            })
            .map(|e| e.notification.id())
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Clicked(id) => self.clicked(*id),
            Message::HoverChanged(hovered) => self.set_hovered(*hovered),
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().map(|e| &e.notification)
    }

    /// Returns visible notifications with the fraction of display time left.
    ///
    /// The fraction is `None` when the effective timeout is disabled; the
    /// progress bar has nothing to count down in that case.
    pub fn visible_with_progress(&self) -> impl Iterator<Item = (&Notification, Option<f32>)> {
        let shared = self.options.timeout;
        self.visible.iter().map(move |e| {
            let remaining = e.notification.effective_timeout(shared).duration().map(|limit| {
                let used = e.shown.as_secs_f32() / limit.as_secs_f32();
                (1.0 - used).clamp(0.0, 1.0)
            });
            (&e.notification, remaining)
        })
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes notifications from the queue to visible while there's space.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_back(Entry {
                    notification,
                    shown: Duration::ZERO,
                });
            } else {
                break;
            }
        }
    }
}
