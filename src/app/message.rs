// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::toasts;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toast stack interactions (dismiss, click, hover).
    Toast(toasts::ToastMessage),
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
    /// The window gained or lost focus.
    FocusChanged(bool),
    /// Reset the viewport to the configured start position.
    Recenter,
    /// Zoom the viewport in by one level.
    ZoomIn,
    /// Zoom the viewport out by one level.
    ZoomOut,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional tile provider access token, overriding the persisted one.
    pub access_token: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
