// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Routes top-level messages to the toast manager and mutates the viewport
//! for the navigation actions.

use super::{App, Message};
use crate::config::defaults::{MAX_MAP_ZOOM, MIN_MAP_ZOOM};
use crate::map::Viewport;
use crate::ui::toasts::Notification;
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => {
                self.toasts.handle_message(&toast_message);
            }
            Message::Tick(now) => {
                self.toasts.tick(now);
            }
            Message::FocusChanged(focused) => {
                self.toasts.set_focused(focused);
            }
            Message::Recenter => {
                self.viewport = self.map_client.viewport();
                self.toasts.push(Notification::info(format!(
                    "Centered on {:.4}, {:.4}",
                    self.viewport.lat, self.viewport.lon
                )));
            }
            Message::ZoomIn => {
                if self.viewport.zoom >= MAX_MAP_ZOOM {
                    self.toasts
                        .push(Notification::warning("Already at maximum zoom"));
                } else {
                    self.viewport = Viewport::new(
                        self.viewport.lon,
                        self.viewport.lat,
                        self.viewport.zoom + 1.0,
                    );
                }
            }
            Message::ZoomOut => {
                if self.viewport.zoom <= MIN_MAP_ZOOM {
                    self.toasts
                        .push(Notification::warning("Already at minimum zoom"));
                } else {
                    self.viewport = Viewport::new(
                        self.viewport.lon,
                        self.viewport.lat,
                        self.viewport.zoom - 1.0,
                    );
                }
            }
        }

        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toasts::Severity;
    use std::time::{Duration, Instant};

    #[test]
    fn zoom_in_raises_the_viewport_zoom() {
        let mut app = App::default();
        let before = app.viewport.zoom;

        let _ = app.update(Message::ZoomIn);
        assert_eq!(app.viewport.zoom, before + 1.0);
    }

    #[test]
    fn zoom_is_clamped_and_warns_at_the_bounds() {
        let mut app = App::default();
        app.viewport = Viewport::new(0.0, 0.0, MAX_MAP_ZOOM);

        let _ = app.update(Message::ZoomIn);
        assert_eq!(app.viewport.zoom, MAX_MAP_ZOOM);

        let warning = app
            .toasts
            .visible()
            .next()
            .expect("warning toast pushed at the zoom bound");
        assert_eq!(warning.severity(), Severity::Warning);
    }

    #[test]
    fn recenter_restores_the_configured_viewport_and_notifies() {
        let mut app = App::default();
        app.viewport = Viewport::new(100.0, 10.0, 3.0);

        let _ = app.update(Message::Recenter);

        assert_eq!(app.viewport, app.map_client.viewport());
        assert_eq!(app.toasts.visible_count(), 1);
    }

    #[test]
    fn ticks_expire_visible_toasts() {
        let mut app = App::default();
        let _ = app.update(Message::Recenter);
        assert_eq!(app.toasts.visible_count(), 1);

        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        let _ = app.update(Message::Tick(start + Duration::from_millis(3100)));

        assert_eq!(app.toasts.visible_count(), 0);
    }

    #[test]
    fn focus_changes_reach_the_toast_manager() {
        let mut app = App::default();
        let _ = app.update(Message::FocusChanged(false));
        // Default options don't pause on focus loss, so nothing stalls.
        assert!(!app.toasts.is_paused());
    }
}
