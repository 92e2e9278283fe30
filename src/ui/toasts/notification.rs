// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the toast system.

use super::options::Timeout;
use crate::ui::theme::palette;
use iced::Color;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling of a toast.
///
/// Display duration is governed by the shared [`Options`](super::Options)
/// timeout, not by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Registry name of the glyph rendered in front of the message.
    ///
    /// The built-in vocabulary carries no dedicated warning glyph, so
    /// warnings reuse the `question` mark.
    #[must_use]
    pub fn icon_name(&self) -> &'static str {
        match self {
            Severity::Success => "star",
            Severity::Info => "circle-info",
            Severity::Warning => "question",
            Severity::Error => "times",
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: ToastId,
    /// Severity level (determines accent color and icon).
    severity: Severity,
    /// Message text shown in the toast body.
    message: String,
    /// Per-notification timeout, overriding the shared options.
    timeout_override: Option<Timeout>,
}

impl Notification {
    /// Creates a new notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            severity,
            message: message.into(),
            timeout_override: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Overrides the shared auto-dismiss timeout for this notification.
    ///
    /// Useful for messages that need more time to read, or for pinning an
    /// error with [`Timeout::Disabled`].
    #[must_use]
    pub fn with_timeout(mut self, timeout: Timeout) -> Self {
        self.timeout_override = Some(timeout);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Resolves the effective timeout given the shared default.
    #[must_use]
    pub fn effective_timeout(&self, shared: Timeout) -> Timeout {
        self.timeout_override.unwrap_or(shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn severity_icons_are_in_the_builtin_vocabulary() {
        let registry = crate::icons::Registry::builtin();
        for severity in [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            assert!(
                registry.contains(severity.icon_name()),
                "unregistered severity icon: {}",
                severity.icon_name()
            );
        }
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn effective_timeout_prefers_the_override() {
        let shared = Timeout::After(Duration::from_secs(3));
        let plain = Notification::info("plain");
        let pinned = Notification::error("pinned").with_timeout(Timeout::Disabled);

        assert_eq!(plain.effective_timeout(shared), shared);
        assert_eq!(pinned.effective_timeout(shared), Timeout::Disabled);
    }
}
