//! Effect-to-material mapping.
//!
//! Reads the shared [`EffectTreatment`] and expresses it as physically based
//! material parameters, so a glowing 2D logo becomes an emissive 3D mesh and
//! an outlined one becomes a wireframe.

use logo_forge_core::color::Srgb;
use logo_forge_core::contract::{EffectTreatment, FillStyle};
use logo_forge_core::palette::Palette;
use logo_forge_core::style::Effect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub base_color: Srgb,
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: Srgb,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub wireframe: bool,
}

impl Material {
    pub fn for_effect(effect: Effect, palette: &Palette) -> Self {
        let treatment = EffectTreatment::for_effect(effect);
        let base_color = match treatment.fill {
            FillStyle::Gradient => palette.primary.mix(palette.secondary, 0.5),
            FillStyle::None | FillStyle::Flat | FillStyle::Metallic => palette.primary,
        };
        let (emissive, emissive_intensity) = match treatment.glow {
            Some(glow) => (palette.color(glow.color), 0.6 * glow.strength as f32),
            None => (Srgb::BLACK, 0.0),
        };
        let (metalness, roughness) = match effect {
            Effect::Metallic => (0.95, 0.15),
            Effect::Glass => (0.1, 0.05),
            Effect::Emboss => (0.3, 0.6),
            Effect::Shadow => (0.1, 0.8),
            Effect::Neon | Effect::Glow => (0.2, 0.3),
            Effect::Gradient | Effect::Outline => (0.3, 0.4),
        };
        Self {
            base_color,
            metalness,
            roughness,
            emissive,
            emissive_intensity,
            opacity: if treatment.fill == FillStyle::None {
                1.0
            } else {
                treatment.fill_opacity.clamp(0.0, 1.0) as f32
            },
            wireframe: treatment.fill == FillStyle::None,
        }
    }

    /// Emissive accent material for particles and the ring.
    pub fn glowing(color: Srgb, intensity: f32) -> Self {
        Self {
            base_color: color,
            metalness: 0.0,
            roughness: 0.5,
            emissive: color,
            emissive_intensity: intensity,
            opacity: 1.0,
            wireframe: false,
        }
    }

    /// Approximate on-screen color: base plus emission, darkened by roughness
    /// for metals.
    pub fn apparent_color(&self) -> Srgb {
        let lit = self
            .base_color
            .mix(self.emissive, f64::from(self.emissive_intensity.min(1.0)) * 0.5);
        if self.metalness > 0.5 {
            lit.lighten(f64::from(1.0 - self.roughness) * 0.3)
        } else {
            lit
        }
    }
}

/// Whether `effect` benefits from a reflective environment backdrop.
pub fn needs_environment(effect: Effect) -> bool {
    matches!(effect, Effect::Metallic | Effect::Glass)
}
