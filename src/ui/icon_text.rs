// SPDX-License-Identifier: MPL-2.0
//! Icon rendering as text widgets.
//!
//! Glyphs live in icon fonts, so an icon is a one-character [`Text`] widget
//! carrying the right font for its family/style variant. Lookups go through
//! the [`Registry`]; unknown names render the fallback glyph instead of
//! failing.

use crate::icons::{Family, Glyph, Registry, Style};
use iced::font;
use iced::widget::{text, Text};
use iced::Font;

/// Resolves the font for a family/style variant.
///
/// Styles map onto font weights the way icon-font releases ship them:
/// regular is the 400 weight, solid the 900, light the 300.
#[must_use]
pub fn font_for(family: Family, style: Style) -> Font {
    let family_name = match family {
        Family::Classic => "Font Awesome 6 Free",
        Family::Sharp => "Font Awesome 6 Sharp",
        Family::Duotone => "Font Awesome 6 Duotone",
    };
    let weight = match style {
        Style::Regular => font::Weight::Normal,
        Style::Solid => font::Weight::Black,
        Style::Light => font::Weight::Light,
    };

    Font {
        family: font::Family::Name(family_name),
        weight,
        ..Font::DEFAULT
    }
}

/// Renders a glyph as a text widget in its own variant's font.
#[must_use]
pub fn glyph_text<'a>(glyph: Glyph) -> Text<'a> {
    text(glyph.codepoint.to_string())
        .font(font_for(glyph.family, glyph.style))
        .shaping(text::Shaping::Advanced)
}

/// Renders the icon registered under `name`.
///
/// Unknown names render the registry's fallback placeholder; the view never
/// panics on a missing registration.
#[must_use]
pub fn icon<'a>(registry: &Registry, name: &str) -> Text<'a> {
    glyph_text(registry.get_or_fallback(name))
}

/// Renders the icon registered under `name` at a fixed size.
#[must_use]
pub fn icon_sized<'a>(registry: &Registry, name: &str, size: f32) -> Text<'a> {
    icon(registry, name).size(size)
}

/// Renders the icon under `name` with an explicit variant override,
/// ignoring the variant it was registered with.
#[must_use]
pub fn icon_with<'a>(registry: &Registry, name: &str, family: Family, style: Style) -> Text<'a> {
    let glyph = registry.get_or_fallback(name);
    glyph_text(Glyph::new(glyph.codepoint, family, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::FALLBACK_GLYPH;

    #[test]
    fn font_family_names_follow_the_icon_pack() {
        let classic = font_for(Family::Classic, Style::Regular);
        let sharp = font_for(Family::Sharp, Style::Regular);
        let duotone = font_for(Family::Duotone, Style::Regular);

        assert_eq!(classic.family, font::Family::Name("Font Awesome 6 Free"));
        assert_eq!(sharp.family, font::Family::Name("Font Awesome 6 Sharp"));
        assert_eq!(
            duotone.family,
            font::Family::Name("Font Awesome 6 Duotone")
        );
    }

    #[test]
    fn style_maps_to_font_weight() {
        assert_eq!(
            font_for(Family::Classic, Style::Regular).weight,
            font::Weight::Normal
        );
        assert_eq!(
            font_for(Family::Classic, Style::Solid).weight,
            font::Weight::Black
        );
        assert_eq!(
            font_for(Family::Classic, Style::Light).weight,
            font::Weight::Light
        );
    }

    #[test]
    fn unknown_name_renders_without_panicking() {
        let registry = Registry::builtin();
        let _ = icon(&registry, "no-such-icon");
        assert_eq!(registry.get_or_fallback("no-such-icon"), FALLBACK_GLYPH);
    }

    #[test]
    fn builtin_names_render_without_panicking() {
        let registry = Registry::builtin();
        for name in registry.names() {
            let _ = icon_sized(&registry, name, 24.0);
        }
    }
}
