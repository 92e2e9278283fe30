// SPDX-License-Identifier: MPL-2.0
//! Application root state and startup wiring.
//!
//! The `App` struct owns the pieces the bootstrap assembles: the icon
//! registry, the shared style defaults, the toast manager, and the shared
//! map client handle. Assembly happens exactly once, in order — icons,
//! style defaults, toast options, map client — before control passes to the
//! Iced runtime. This file keeps the startup policy (window sizing, config
//! resolution, the once-only boot guard) close together so the sequence is
//! easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::icons::{Registry, StyleDefaults};
use crate::map::{self, SharedMapClient, Viewport};
use crate::ui::toasts;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Root Iced application state that bridges the icon registry, the toast
/// subsystem, and the shared map client.
pub struct App {
    /// Icon vocabulary, populated once at startup.
    icons: Registry,
    /// Default icon family/style for lookups without a variant.
    icon_defaults: StyleDefaults,
    /// Toast manager, governed by the persisted presentation options.
    toasts: toasts::Manager,
    /// Shared handle to the map tile backend.
    map_client: SharedMapClient,
    /// Current viewport; starts at the client's configured position.
    viewport: Viewport,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("icons", &self.icons.len())
            .field("toasts", &self.toasts.visible_count())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Wraps startup flags in a boot function the runtime may only invoke once.
///
/// Iced requires `Fn`, but the flags are consumed by the first call; a
/// second invocation is a framework contract violation and panics.
fn boot_once(flags: Flags) -> impl Fn() -> (App, Task<Message>) {
    use std::cell::RefCell;

    let boot_state = RefCell::new(Some(flags));
    move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(boot_once(flags), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` received from the
    /// launcher, resolving the persisted configuration first.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = match &flags.config_dir {
            Some(dir) => {
                config::load_from_path(&config::config_path_in(Path::new(dir))).unwrap_or_default()
            }
            None => config::load().unwrap_or_default(),
        };

        if flags.access_token.is_some() {
            config.map.access_token = flags.access_token;
        }

        (Self::from_config(config), Task::none())
    }

    /// Assembles the root state from resolved settings, in bootstrap order:
    /// icon registry, style defaults, toast options, map client.
    fn from_config(config: Config) -> Self {
        let icons = Registry::builtin();
        let icon_defaults = config.icons;
        let toasts = toasts::Manager::new(config.toasts);
        let map_client = map::create_map_client(&config.map);
        let viewport = map_client.viewport();

        Self {
            icons,
            icon_defaults,
            toasts,
            map_client,
            viewport,
        }
    }

    fn title(&self) -> String {
        format!("{} - Iced Atlas", self.map_client.style())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            icons: &self.icons,
            icon_defaults: &self.icon_defaults,
            toasts: &self.toasts,
            map_client: &self.map_client,
            viewport: self.viewport,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.toasts.has_notifications()),
        ])
    }
}
