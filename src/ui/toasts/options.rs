// SPDX-License-Identifier: MPL-2.0
//! Shared toast presentation options.
//!
//! The options record is constructed once at startup (from `settings.toml`
//! or its defaults), handed to the [`Manager`](super::Manager), and never
//! mutated afterwards. Every later "show a toast" call inherits these
//! defaults.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::defaults::{DEFAULT_DRAGGABLE_PERCENT, DEFAULT_TOAST_TIMEOUT_MS};

/// Screen corner or edge where the toast stack is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// Whether toasts stack down from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }
}

/// Auto-dismiss timeout: a duration in milliseconds, or disabled.
///
/// Serialized as milliseconds; `0` means disabled so the TOML surface stays
/// a single integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// Never auto-dismiss; the toast stays until closed manually.
    Disabled,
    /// Auto-dismiss after the given visible duration.
    After(Duration),
}

impl Timeout {
    /// Builds a timeout from milliseconds, mapping `0` to `Disabled`.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Self::Disabled
        } else {
            Self::After(Duration::from_millis(ms))
        }
    }

    /// The visible duration, or `None` when disabled.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::Disabled => None,
            Self::After(d) => Some(d),
        }
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self::from_millis(DEFAULT_TOAST_TIMEOUT_MS)
    }
}

impl Serialize for Timeout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = match self {
            Self::Disabled => 0,
            Self::After(d) => d.as_millis() as u64,
        };
        serializer.serialize_u64(ms)
    }
}

impl<'de> Deserialize<'de> for Timeout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ms = u64::deserialize(deserializer)?;
        if ms > u64::from(u32::MAX) {
            return Err(de::Error::custom("toast timeout out of range"));
        }
        Ok(Self::from_millis(ms))
    }
}

/// How the close affordance is rendered on each toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseButton {
    /// A dedicated close button.
    #[default]
    Button,
    /// No close affordance; dismissal relies on click/timeout.
    Hidden,
}

/// Immutable toast presentation record.
///
/// `Options::default()` reproduces the configuration the application ships
/// with, field for field. The manager reads it at construction and treats
/// it as read-only from then on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Anchor corner/edge for the toast stack.
    pub position: Position,
    /// Auto-dismiss timeout shared by every toast.
    pub timeout: Timeout,
    /// Dismiss a toast when its body is clicked.
    pub close_on_click: bool,
    /// Suspend auto-dismiss clocks while the window is unfocused.
    pub pause_on_focus_loss: bool,
    /// Suspend auto-dismiss clocks while the pointer hovers the stack.
    pub pause_on_hover: bool,
    /// Allow dismissing a toast by dragging it away.
    pub draggable: bool,
    /// Fraction of the toast width a drag must cover to dismiss (0–1).
    pub draggable_percent: f32,
    /// Only reveal the close button while the toast is hovered.
    pub show_close_button_on_hover: bool,
    /// Hide the remaining-time progress bar.
    pub hide_progress_bar: bool,
    /// Close affordance style.
    pub close_button: CloseButton,
    /// Render the severity icon in front of the message.
    pub icon: bool,
    /// Lay toast content out right-to-left.
    pub rtl: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            position: Position::TopRight,
            timeout: Timeout::from_millis(DEFAULT_TOAST_TIMEOUT_MS),
            close_on_click: true,
            pause_on_focus_loss: false,
            pause_on_hover: false,
            draggable: false,
            draggable_percent: DEFAULT_DRAGGABLE_PERCENT,
            show_close_button_on_hover: false,
            hide_progress_bar: true,
            close_button: CloseButton::Button,
            icon: true,
            rtl: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_the_shipped_configuration() {
        let options = Options::default();

        assert_eq!(options.position, Position::TopRight);
        assert_eq!(options.timeout, Timeout::After(Duration::from_millis(3000)));
        assert!(options.close_on_click);
        assert!(!options.pause_on_focus_loss);
        assert!(!options.pause_on_hover);
        assert!(!options.draggable);
        assert!((options.draggable_percent - 0.6).abs() < f32::EPSILON);
        assert!(!options.show_close_button_on_hover);
        assert!(options.hide_progress_bar);
        assert_eq!(options.close_button, CloseButton::Button);
        assert!(options.icon);
        assert!(!options.rtl);
    }

    #[test]
    fn timeout_zero_means_disabled() {
        assert_eq!(Timeout::from_millis(0), Timeout::Disabled);
        assert_eq!(Timeout::Disabled.duration(), None);
    }

    #[test]
    fn timeout_round_trips_through_toml() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            timeout: Timeout,
        }

        let serialized = toml::to_string(&Wrapper {
            timeout: Timeout::from_millis(4500),
        })
        .expect("serialize timeout");
        assert!(serialized.contains("4500"));

        let parsed: Wrapper = toml::from_str("timeout = 0").expect("parse timeout");
        assert_eq!(parsed.timeout, Timeout::Disabled);
    }

    #[test]
    fn options_round_trip_through_toml_unmodified() {
        let options = Options {
            position: Position::BottomCenter,
            timeout: Timeout::Disabled,
            rtl: true,
            ..Options::default()
        };

        let serialized = toml::to_string(&options).expect("serialize options");
        let parsed: Options = toml::from_str(&serialized).expect("parse options");
        assert_eq!(parsed, options);
    }

    #[test]
    fn position_uses_kebab_case_names() {
        let serialized =
            toml::to_string(&Options::default()).expect("serialize options");
        assert!(serialized.contains("\"top-right\""));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Options =
            toml::from_str("position = \"bottom-left\"").expect("parse partial options");
        assert_eq!(parsed.position, Position::BottomLeft);
        assert_eq!(parsed.timeout, Options::default().timeout);
        assert!(parsed.close_on_click);
    }

    #[test]
    fn top_positions_are_detected() {
        assert!(Position::TopLeft.is_top());
        assert!(Position::TopCenter.is_top());
        assert!(Position::TopRight.is_top());
        assert!(!Position::BottomRight.is_top());
    }
}
