// SPDX-License-Identifier: MPL-2.0
//! Name-keyed glyph table and the built-in icon set.
//!
//! The registry maps icon names to [`Glyph`] entries. Names follow the
//! upstream icon-font vocabulary (kebab-case). Duplicate registration
//! overwrites silently, so re-registering the built-in set is a no-op.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `times` not `close_dialog`).

use super::style::{Family, Style, StyleDefaults};
use std::collections::BTreeMap;

/// A renderable icon-font glyph: a codepoint plus its style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Codepoint in the icon font.
    pub codepoint: char,
    /// Font family the codepoint belongs to.
    pub family: Family,
    /// Visual style within the family.
    pub style: Style,
}

impl Glyph {
    /// Creates a glyph with an explicit variant.
    #[must_use]
    pub fn new(codepoint: char, family: Family, style: Style) -> Self {
        Self {
            codepoint,
            family,
            style,
        }
    }
}

/// Glyph rendered when a name is not present in the registry.
///
/// A visible placeholder (circled question mark) keeps layout stable and
/// makes a missing registration easy to spot without crashing the view.
pub const FALLBACK_GLYPH: Glyph = Glyph {
    codepoint: '\u{f059}',
    family: Family::Classic,
    style: Style::Regular,
};

/// Built-in vocabulary, classic/regular variant.
///
/// `adjust` is the legacy alias of `circle-half-stroke` and `file-text` the
/// legacy alias of `file-alt`; both names stay registered because existing
/// views reference either spelling.
const CLASSIC_REGULAR: &[(&str, char)] = &[
    ("search", '\u{f002}'),
    ("building", '\u{f1ad}'),
    ("user", '\u{f007}'),
    ("file-alt", '\u{f15c}'),
    ("database", '\u{f1c0}'),
    ("book", '\u{f02d}'),
    ("image", '\u{f03e}'),
    ("video", '\u{f03d}'),
    ("volume-high", '\u{f028}'),
    ("house", '\u{f015}'),
    ("question", '\u{3f}'),
    ("link", '\u{f0c1}'),
    ("times", '\u{f00d}'),
    ("church", '\u{f51d}'),
    ("location-dot", '\u{f3c5}'),
    ("industry", '\u{f275}'),
    ("store", '\u{f54e}'),
    ("circle-half-stroke", '\u{f042}'),
    ("adjust", '\u{f042}'),
    ("file-pdf", '\u{f1c1}'),
    ("file-word", '\u{f1c2}'),
    ("file-excel", '\u{f1c3}'),
    ("file-image", '\u{f1c5}'),
    ("file-video", '\u{f1c8}'),
    ("file-audio", '\u{f1c7}'),
    ("file-text", '\u{f15c}'),
    ("circle-info", '\u{f05a}'),
];

/// Built-in vocabulary, duotone/regular variant.
const DUOTONE_REGULAR: &[(&str, char)] = &[("star", '\u{f005}')];

/// Name → glyph lookup table.
///
/// Constructed once at startup and passed by reference to rendering code.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    glyphs: BTreeMap<String, Glyph>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with the built-in icon set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_all(CLASSIC_REGULAR, Family::Classic, Style::Regular);
        registry.register_all(DUOTONE_REGULAR, Family::Duotone, Style::Regular);
        registry
    }

    /// Inserts a glyph under `name`, silently overwriting any previous entry.
    pub fn register(&mut self, name: impl Into<String>, glyph: Glyph) {
        self.glyphs.insert(name.into(), glyph);
    }

    /// Inserts a codepoint under `name` using the shared style defaults.
    pub fn register_with_defaults(
        &mut self,
        name: impl Into<String>,
        codepoint: char,
        defaults: &StyleDefaults,
    ) {
        self.register(name, Glyph::new(codepoint, defaults.family, defaults.style));
    }

    /// Registers a batch of (name, codepoint) pairs under one variant.
    fn register_all(&mut self, entries: &[(&str, char)], family: Family, style: Style) {
        for &(name, codepoint) in entries {
            self.register(name, Glyph::new(codepoint, family, style));
        }
    }

    /// Looks up a glyph by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.get(name)
    }

    /// Looks up a glyph by name, substituting [`FALLBACK_GLYPH`] when absent.
    #[must_use]
    pub fn get_or_fallback(&self, name: &str) -> Glyph {
        self.get(name).copied().unwrap_or(FALLBACK_GLYPH)
    }

    /// Returns whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns whether the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterates over registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.glyphs.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every name the application references must be registered.
    const EXPECTED_NAMES: &[&str] = &[
        "search",
        "building",
        "user",
        "file-alt",
        "database",
        "book",
        "image",
        "video",
        "volume-high",
        "house",
        "question",
        "link",
        "times",
        "church",
        "location-dot",
        "industry",
        "store",
        "circle-half-stroke",
        "adjust",
        "file-pdf",
        "file-word",
        "file-excel",
        "file-image",
        "file-video",
        "file-audio",
        "file-text",
        "circle-info",
        "star",
    ];

    #[test]
    fn builtin_contains_every_expected_name() {
        let registry = Registry::builtin();
        for name in EXPECTED_NAMES {
            assert!(registry.contains(name), "missing icon: {name}");
        }
    }

    #[test]
    fn builtin_contains_exactly_the_expected_names() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), EXPECTED_NAMES.len());
        for name in registry.names() {
            assert!(EXPECTED_NAMES.contains(&name), "unexpected icon: {name}");
        }
    }

    #[test]
    fn star_is_the_only_duotone_glyph() {
        let registry = Registry::builtin();
        let duotone: Vec<&str> = registry
            .names()
            .filter(|name| registry.get(name).unwrap().family == Family::Duotone)
            .collect();
        assert_eq!(duotone, vec!["star"]);
    }

    #[test]
    fn legacy_aliases_share_codepoints() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.get("adjust").unwrap().codepoint,
            registry.get("circle-half-stroke").unwrap().codepoint
        );
        assert_eq!(
            registry.get("file-text").unwrap().codepoint,
            registry.get("file-alt").unwrap().codepoint
        );
    }

    #[test]
    fn duplicate_registration_overwrites_silently() {
        let mut registry = Registry::builtin();
        let replacement = Glyph::new('\u{f005}', Family::Classic, Style::Solid);
        registry.register("search", replacement);

        assert_eq!(registry.get("search"), Some(&replacement));
        assert_eq!(registry.len(), EXPECTED_NAMES.len());
    }

    #[test]
    fn reregistering_builtin_set_changes_nothing() {
        let mut registry = Registry::builtin();
        let before: Vec<(String, Glyph)> = registry
            .names()
            .map(|n| (n.to_string(), *registry.get(n).unwrap()))
            .collect();

        registry.register_all(CLASSIC_REGULAR, Family::Classic, Style::Regular);
        registry.register_all(DUOTONE_REGULAR, Family::Duotone, Style::Regular);

        let after: Vec<(String, Glyph)> = registry
            .names()
            .map(|n| (n.to_string(), *registry.get(n).unwrap()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_name_resolves_to_fallback() {
        let registry = Registry::builtin();
        assert_eq!(registry.get("does-not-exist"), None);
        assert_eq!(registry.get_or_fallback("does-not-exist"), FALLBACK_GLYPH);
    }

    #[test]
    fn register_with_defaults_uses_the_shared_pair() {
        let mut registry = Registry::new();
        let defaults = StyleDefaults::new(Family::Sharp, Style::Light);
        registry.register_with_defaults("compass", '\u{f14e}', &defaults);

        let glyph = registry.get("compass").expect("registered");
        assert_eq!(glyph.family, Family::Sharp);
        assert_eq!(glyph.style, Style::Light);
    }
}
