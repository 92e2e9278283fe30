// SPDX-License-Identifier: MPL-2.0
//! Icon vocabulary for the application.
//!
//! Icons are glyphs in an icon font, looked up by name through an explicit
//! [`Registry`] that is constructed once at startup and passed by reference
//! to the views that render icons. There is no process-wide icon table;
//! keeping the registry an owned value makes the lookup surface testable
//! and the set of available names auditable in one place.
//!
//! # Components
//!
//! - [`registry`] - Name-keyed glyph table and the built-in icon set
//! - [`style`] - Font family/style variants and the shared defaults
//!
//! # Usage
//!
//! ```ignore
//! use iced_atlas::icons::{Registry, StyleDefaults};
//!
//! let defaults = StyleDefaults::default();
//! let registry = Registry::builtin();
//!
//! assert!(registry.get("location-dot").is_some());
//! ```

mod registry;
mod style;

pub use registry::{Glyph, Registry, FALLBACK_GLYPH};
pub use style::{Family, Style, StyleDefaults};
