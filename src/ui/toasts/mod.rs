// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (tile source changes, errors, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`options`] - Shared presentation [`Options`] read once at startup
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use iced_atlas::ui::toasts::{Manager, Notification, Options};
//!
//! // Create a manager from the shared presentation options
//! let mut manager = Manager::new(Options::default());
//!
//! // Push a notification
//! manager.push(Notification::info("Tile source changed"));
//!
//! // In your view function, render the overlay
//! let overlay = toasts::Toast::view_overlay(&manager, &registry).map(Message::Toast);
//! ```
//!
//! # Design Considerations
//!
//! - Display duration comes from the shared `Options.timeout`, with an
//!   optional per-notification override; a disabled timeout means manual
//!   dismissal only
//! - Max visible toasts: 3 (others are queued)
//! - Position: the corner/edge named by `Options.position`

mod manager;
mod notification;
mod options;
mod toast;

pub use manager::{Manager, Message as ToastMessage, MAX_VISIBLE};
pub use notification::{Notification, Severity, ToastId};
pub use options::{CloseButton, Options, Position, Timeout};
pub use toast::Toast;
