//! Palette catalog: named categories of concrete four-color palettes.
//!
//! Each [`PaletteCategory`] owns a fixed list of [`Palette`] variants. The
//! generator first resolves a category, then picks one of its variants, so a
//! resolved palette always comes from its category's list.

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::error::LogoError;
use crate::style::ClosedSet;

/// Which palette slot a renderer paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
}

/// A concrete four-color palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Srgb,
    pub secondary: Srgb,
    pub accent: Srgb,
    pub background: Srgb,
    pub name: String,
}

impl Palette {
    /// Builds a palette from four hex strings.
    pub fn from_hex(
        name: &str,
        primary: &str,
        secondary: &str,
        accent: &str,
        background: &str,
    ) -> Result<Self, LogoError> {
        Ok(Self {
            primary: Srgb::from_hex(primary)?,
            secondary: Srgb::from_hex(secondary)?,
            accent: Srgb::from_hex(accent)?,
            background: Srgb::from_hex(background)?,
            name: name.to_string(),
        })
    }

    /// Returns the color in the given slot.
    pub fn color(&self, role: ColorRole) -> Srgb {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::Accent => self.accent,
            ColorRole::Background => self.background,
        }
    }
}

/// Named group of palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteCategory {
    Modern,
    Vibrant,
    Pastel,
    Dark,
    Neon,
    Earth,
    Ocean,
    Luxury,
}

/// (name, primary, secondary, accent, background)
type Swatch = (&'static str, &'static str, &'static str, &'static str, &'static str);

const MODERN: [Swatch; 4] = [
    ("Slate Tech", "#3a86ff", "#8338ec", "#00d4ff", "#0b132b"),
    ("Mint Pro", "#06d6a0", "#118ab2", "#ffd166", "#073b4c"),
    ("Graphite", "#e0e1dd", "#778da9", "#ff6b6b", "#1b263b"),
    ("Indigo Flow", "#6c63ff", "#3f3d56", "#f9a826", "#14142b"),
];

const VIBRANT: [Swatch; 4] = [
    ("Sunburst", "#ff006e", "#fb5607", "#ffbe0b", "#1a0a12"),
    ("Tropic", "#00f5d4", "#00bbf9", "#fee440", "#0d1b2a"),
    ("Candy", "#f15bb5", "#9b5de5", "#00f5d4", "#1b0f24"),
    ("Citrus", "#ff9f1c", "#ffbf69", "#2ec4b6", "#1c1c1c"),
];

const PASTEL: [Swatch; 4] = [
    ("Blush", "#ffafcc", "#cdb4db", "#a2d2ff", "#fdf6f9"),
    ("Meadow", "#b5e48c", "#99d98c", "#f4a261", "#f7fbf2"),
    ("Lavender", "#c8b6ff", "#b8c0ff", "#ffd6ff", "#f8f7ff"),
    ("Sorbet", "#ffc6a8", "#ff8fab", "#9de0ad", "#fffaf5"),
];

const DARK: [Swatch; 4] = [
    ("Midnight", "#e94560", "#0f3460", "#f5f5f5", "#1a1a2e"),
    ("Obsidian", "#c0c0c0", "#4a4e69", "#f2e9e4", "#0d0d0d"),
    ("Ember", "#ff4d00", "#8c1c13", "#ffd166", "#120d0d"),
    ("Abyss", "#00b4d8", "#023e8a", "#caf0f8", "#03045e"),
];

const NEON: [Swatch; 4] = [
    ("Cyber Pink", "#ff00ff", "#00ffff", "#ffff00", "#0a0014"),
    ("Laser Lime", "#39ff14", "#00e5ff", "#ff3131", "#050a05"),
    ("Synthwave", "#ff2a6d", "#05d9e8", "#d1f7ff", "#01012b"),
    ("Electric", "#7df9ff", "#bc13fe", "#fffb00", "#080018"),
];

const EARTH: [Swatch; 4] = [
    ("Terracotta", "#e07a5f", "#81b29a", "#f2cc8f", "#3d405b"),
    ("Forest", "#606c38", "#283618", "#dda15e", "#fefae0"),
    ("Clay", "#bc6c25", "#dda15e", "#606c38", "#fdf0d5"),
    ("Canyon", "#9c6644", "#7f5539", "#e6ccb2", "#2b1d14"),
];

const OCEAN: [Swatch; 4] = [
    ("Lagoon", "#0077b6", "#00b4d8", "#90e0ef", "#03045e"),
    ("Reef", "#2a9d8f", "#264653", "#e9c46a", "#0b1d26"),
    ("Tidal", "#48cae4", "#0096c7", "#ade8f4", "#012a4a"),
    ("Seafoam", "#64dfdf", "#5390d9", "#80ffdb", "#0b2545"),
];

const LUXURY: [Swatch; 4] = [
    ("Gold Leaf", "#d4af37", "#f5e6a8", "#ffffff", "#0c0c0c"),
    ("Royal", "#7b2cbf", "#c77dff", "#e0aaff", "#10002b"),
    ("Champagne", "#f7e7ce", "#c9a66b", "#8b6f47", "#1c1917"),
    ("Emerald", "#50c878", "#d4af37", "#f8f8ff", "#062a1e"),
];

impl ClosedSet for PaletteCategory {
    const ALL: &'static [Self] = &[
        PaletteCategory::Modern,
        PaletteCategory::Vibrant,
        PaletteCategory::Pastel,
        PaletteCategory::Dark,
        PaletteCategory::Neon,
        PaletteCategory::Earth,
        PaletteCategory::Ocean,
        PaletteCategory::Luxury,
    ];

    fn as_str(self) -> &'static str {
        match self {
            PaletteCategory::Modern => "modern",
            PaletteCategory::Vibrant => "vibrant",
            PaletteCategory::Pastel => "pastel",
            PaletteCategory::Dark => "dark",
            PaletteCategory::Neon => "neon",
            PaletteCategory::Earth => "earth",
            PaletteCategory::Ocean => "ocean",
            PaletteCategory::Luxury => "luxury",
        }
    }
}

impl PaletteCategory {
    /// Human-readable label shown in palette pickers.
    pub fn label(self) -> &'static str {
        match self {
            PaletteCategory::Modern => "Modern Tech",
            PaletteCategory::Vibrant => "Vibrant Pop",
            PaletteCategory::Pastel => "Soft Pastel",
            PaletteCategory::Dark => "Dark Mode",
            PaletteCategory::Neon => "Neon Nights",
            PaletteCategory::Earth => "Earth Tones",
            PaletteCategory::Ocean => "Ocean Depths",
            PaletteCategory::Luxury => "Luxury Gold",
        }
    }

    fn swatches(self) -> &'static [Swatch; 4] {
        match self {
            PaletteCategory::Modern => &MODERN,
            PaletteCategory::Vibrant => &VIBRANT,
            PaletteCategory::Pastel => &PASTEL,
            PaletteCategory::Dark => &DARK,
            PaletteCategory::Neon => &NEON,
            PaletteCategory::Earth => &EARTH,
            PaletteCategory::Ocean => &OCEAN,
            PaletteCategory::Luxury => &LUXURY,
        }
    }

    /// Number of concrete palettes in this category.
    pub fn variant_count(self) -> usize {
        self.swatches().len()
    }

    /// Returns the `index`-th palette of this category, wrapping around.
    pub fn variant(self, index: usize) -> Palette {
        let swatches = self.swatches();
        let (name, primary, secondary, accent, background) = swatches[index % swatches.len()];
        // Catalog hex literals are covered by `every_catalog_color_parses`.
        Palette::from_hex(name, primary, secondary, accent, background)
            .unwrap_or_else(|_| fallback_palette(name))
    }

    /// All palettes of this category.
    pub fn variants(self) -> Vec<Palette> {
        (0..self.variant_count()).map(|i| self.variant(i)).collect()
    }

    /// Representative palette shown in catalog previews (the first variant).
    pub fn preview(self) -> Palette {
        self.variant(0)
    }

    /// Returns true if `palette` is one of this category's variants.
    pub fn contains(self, palette: &Palette) -> bool {
        self.variants().iter().any(|p| p == palette)
    }
}

fn fallback_palette(name: &str) -> Palette {
    Palette {
        primary: Srgb::WHITE,
        secondary: Srgb::WHITE.darken(0.4),
        accent: Srgb::WHITE.darken(0.2),
        background: Srgb::BLACK,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_color_parses() {
        for &category in PaletteCategory::ALL {
            for (name, p, s, a, b) in category.swatches() {
                assert!(
                    Palette::from_hex(name, p, s, a, b).is_ok(),
                    "{category:?}/{name} has an invalid hex color"
                );
            }
        }
    }

    #[test]
    fn every_category_has_four_variants() {
        for &category in PaletteCategory::ALL {
            assert_eq!(category.variant_count(), 4, "{category:?}");
            assert_eq!(category.variants().len(), 4);
        }
    }

    #[test]
    fn variant_names_are_unique_across_catalog() {
        let mut names: Vec<String> = PaletteCategory::ALL
            .iter()
            .flat_map(|c| c.variants())
            .map(|p| p.name)
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn variant_index_wraps() {
        let neon = PaletteCategory::Neon;
        assert_eq!(neon.variant(4), neon.variant(0));
    }

    #[test]
    fn preview_is_first_variant() {
        assert_eq!(PaletteCategory::Ocean.preview().name, "Lagoon");
    }

    #[test]
    fn contains_rejects_palette_from_other_category() {
        let luxury = PaletteCategory::Luxury.variant(1);
        assert!(PaletteCategory::Luxury.contains(&luxury));
        assert!(!PaletteCategory::Pastel.contains(&luxury));
    }

    #[test]
    fn color_role_selects_slot() {
        let p = PaletteCategory::Neon.variant(0);
        assert_eq!(p.color(ColorRole::Primary).to_hex(), "#ff00ff");
        assert_eq!(p.color(ColorRole::Secondary).to_hex(), "#00ffff");
        assert_eq!(p.color(ColorRole::Accent).to_hex(), "#ffff00");
        assert_eq!(p.color(ColorRole::Background).to_hex(), "#0a0014");
    }

    #[test]
    fn category_wire_names_and_labels() {
        assert_eq!(
            PaletteCategory::names(),
            vec!["modern", "vibrant", "pastel", "dark", "neon", "earth", "ocean", "luxury"]
        );
        assert_eq!(PaletteCategory::Neon.label(), "Neon Nights");
        assert_eq!(
            serde_json::to_string(&PaletteCategory::Earth).unwrap(),
            "\"earth\""
        );
    }

    #[test]
    fn palette_serializes_colors_as_hex() {
        let json = serde_json::to_value(PaletteCategory::Dark.variant(0)).unwrap();
        assert_eq!(json["primary"], "#e94560");
        assert_eq!(json["background"], "#1a1a2e");
        assert_eq!(json["name"], "Midnight");
    }
}
