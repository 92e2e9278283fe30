// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, icon rendering, and toasts.

pub mod icon_text;
pub mod theme;
pub mod toasts;
