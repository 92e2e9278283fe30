// SPDX-License-Identifier: MPL-2.0
//! Icon font families, visual styles, and the shared style defaults.

use serde::{Deserialize, Serialize};

/// Icon font family.
///
/// The built-in set uses `Classic` for all but one glyph; `Duotone` covers
/// the remaining one. `Sharp` is accepted in configuration for forward
/// compatibility with icon packs that ship it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    #[default]
    Classic,
    Sharp,
    Duotone,
}

/// Icon visual style (stroke weight) within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Regular,
    Solid,
    Light,
}

/// Default (family, style) pair applied to icon registrations and lookups
/// that do not specify a variant of their own.
///
/// Modeled as an explicit value handed to the registry and the renderer
/// rather than a module-level static. Assignment is last-writer-wins and
/// no validation of the combination is performed here; an unavailable pair
/// simply renders with whatever font the platform resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDefaults {
    pub family: Family,
    pub style: Style,
}

impl StyleDefaults {
    /// Creates defaults with the given family and style.
    #[must_use]
    pub fn new(family: Family, style: Style) -> Self {
        Self { family, style }
    }

    /// Replaces both defaults at once.
    pub fn set(&mut self, family: Family, style: Style) {
        self.family = family;
        self.style = style;
    }
}
