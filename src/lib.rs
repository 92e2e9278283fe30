// SPDX-License-Identifier: MPL-2.0
//! `iced_atlas` is a desktop map viewer built with the Iced GUI framework.
//!
//! The crate wires together an icon-font registry, a configurable toast
//! notification subsystem, and a shared map-client handle, then mounts the
//! assembled application on the Iced runtime. Registries and style defaults
//! are explicit values passed by reference, not ambient globals, so each
//! piece stays testable on its own.

#![doc(html_root_url = "https://docs.rs/iced_atlas/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod icon;
pub mod icons;
pub mod map;
pub mod ui;
