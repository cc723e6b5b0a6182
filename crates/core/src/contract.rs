//! Rendering contract: what each effect, layout, and font style means,
//! independent of the medium that draws it.
//!
//! The 2D renderer and the 3D scene both read these tables and translate
//! them into their own parameters (blur pixels vs. emissive intensity, flat
//! fill vs. PBR roughness). Keeping the intent here is what makes the two
//! renderers agree on a logo's look without sharing any drawing code.

use crate::config::LogoConfiguration;
use crate::palette::ColorRole;
use crate::style::{Effect, FontStyle, Layout};

/// How the main shape's interior is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStyle {
    /// Interior left empty; only the stroke is drawn.
    None,
    /// Single primary color.
    Flat,
    /// Primary -> secondary gradient.
    Gradient,
    /// Multi-stop light/dark banding that reads as polished metal.
    Metallic,
}

/// A colored halo around the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: ColorRole,
    /// Multiplier applied to the configuration's `glowIntensity`.
    pub strength: f64,
}

/// An offset dark copy behind the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Offset as a fraction of `glowIntensity`.
    pub offset: f64,
    /// Blur as a fraction of `glowIntensity`.
    pub softness: f64,
    pub opacity: f64,
}

/// Semantic treatment of one [`Effect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectTreatment {
    pub fill: FillStyle,
    pub fill_opacity: f64,
    pub glow: Option<Glow>,
    pub shadow: Option<Shadow>,
    pub stroke: bool,
    /// Multiplier applied to the configuration's `strokeWidth`.
    pub stroke_scale: f64,
    /// Whether the stroke uses a light highlight instead of the accent color.
    pub highlight_stroke: bool,
}

impl EffectTreatment {
    /// The fixed treatment for `effect`.
    pub fn for_effect(effect: Effect) -> Self {
        let base = Self {
            fill: FillStyle::Flat,
            fill_opacity: 1.0,
            glow: None,
            shadow: None,
            stroke: true,
            stroke_scale: 1.0,
            highlight_stroke: false,
        };
        match effect {
            Effect::Glow => Self {
                fill: FillStyle::Gradient,
                glow: Some(Glow {
                    color: ColorRole::Primary,
                    strength: 1.0,
                }),
                ..base
            },
            Effect::Shadow => Self {
                shadow: Some(Shadow {
                    offset: 0.4,
                    softness: 0.6,
                    opacity: 0.55,
                }),
                stroke: false,
                ..base
            },
            Effect::Gradient => Self {
                fill: FillStyle::Gradient,
                stroke: false,
                ..base
            },
            Effect::Outline => Self {
                fill: FillStyle::None,
                fill_opacity: 0.0,
                stroke_scale: 2.0,
                ..base
            },
            Effect::Emboss => Self {
                shadow: Some(Shadow {
                    offset: 0.15,
                    softness: 0.2,
                    opacity: 0.45,
                }),
                highlight_stroke: true,
                ..base
            },
            Effect::Neon => Self {
                fill_opacity: 0.15,
                glow: Some(Glow {
                    color: ColorRole::Accent,
                    strength: 1.5,
                }),
                stroke_scale: 1.5,
                ..base
            },
            Effect::Metallic => Self {
                fill: FillStyle::Metallic,
                highlight_stroke: true,
                ..base
            },
            Effect::Glass => Self {
                fill_opacity: 0.35,
                glow: Some(Glow {
                    color: ColorRole::Secondary,
                    strength: 0.5,
                }),
                highlight_stroke: true,
                ..base
            },
        }
    }

    /// Whether the fill lets the background show through (glass, neon).
    pub fn is_translucent(&self) -> bool {
        self.fill_opacity < 1.0
    }
}

/// A line of text in a split layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitHalves {
    pub top: String,
    pub bottom: String,
}

/// Where and how the brand text goes, per [`Layout`].
#[derive(Debug, Clone, PartialEq)]
pub enum TextPlacement {
    /// Name on one centered line.
    Centered { text: String },
    /// One line per word, centered as a block.
    Stacked { lines: Vec<String> },
    /// Initials and name on a shared baseline.
    Inline { lead: String, text: String },
    /// Name on a baseline rotated by `angle_deg`.
    Diagonal { text: String, angle_deg: f64 },
    /// Characters spread along the upper semicircle, each rotated to follow it.
    Arc { text: String, sweep_deg: f64 },
    /// First half above the shape in primary, second half below in accent.
    Split(SplitHalves),
    /// Initials inside the shape, name on a banner underneath.
    Banner { initials: String, text: String },
    /// Initials alone at large scale; the full name is not drawn.
    Monogram { initials: String },
}

/// Rotation of the diagonal baseline.
pub const DIAGONAL_ANGLE_DEG: f64 = -20.0;

/// Angular extent of arc text.
pub const ARC_SWEEP_DEG: f64 = 180.0;

impl TextPlacement {
    /// Placement for a configuration's layout, name, and initials.
    pub fn for_config(config: &LogoConfiguration) -> Self {
        Self::resolve(config.layout(), config.name(), config.initials())
    }

    pub fn resolve(layout: Layout, name: &str, initials: &str) -> Self {
        match layout {
            Layout::Centered => TextPlacement::Centered {
                text: name.to_string(),
            },
            Layout::Stacked => TextPlacement::Stacked {
                lines: name.split_whitespace().map(str::to_string).collect(),
            },
            Layout::Horizontal => TextPlacement::Inline {
                lead: initials.to_string(),
                text: name.to_string(),
            },
            Layout::Diagonal => TextPlacement::Diagonal {
                text: name.to_string(),
                angle_deg: DIAGONAL_ANGLE_DEG,
            },
            Layout::Circular => TextPlacement::Arc {
                text: name.to_uppercase(),
                sweep_deg: ARC_SWEEP_DEG,
            },
            Layout::Split => TextPlacement::Split(split_halves(name)),
            Layout::Badge => TextPlacement::Banner {
                initials: initials.to_string(),
                text: name.to_uppercase(),
            },
            Layout::Monogram => TextPlacement::Monogram {
                initials: initials.to_string(),
            },
        }
    }
}

/// Single-line label for renderers that cannot lay text out per layout
/// (the 3D scene): initials for monogram and badge, the name otherwise.
pub fn flat_label(config: &LogoConfiguration) -> &str {
    match config.layout() {
        Layout::Monogram | Layout::Badge => config.initials(),
        _ => config.name(),
    }
}

/// Splits a name into two halves at the middle character.
///
/// Multi-word names split at the word boundary closest to the middle.
pub fn split_halves(name: &str) -> SplitHalves {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() > 1 {
        let total: usize = words.iter().map(|w| w.chars().count()).sum();
        let mut running = 0;
        let mut cut = 1;
        let mut best = usize::MAX;
        for (i, w) in words.iter().enumerate().take(words.len() - 1) {
            running += w.chars().count();
            let distance = (2 * running).abs_diff(total);
            if distance < best {
                best = distance;
                cut = i + 1;
            }
        }
        return SplitHalves {
            top: words[..cut].join(" "),
            bottom: words[cut..].join(" "),
        };
    }
    let chars: Vec<char> = name.chars().collect();
    let mid = chars.len().div_ceil(2);
    SplitHalves {
        top: chars[..mid].iter().collect(),
        bottom: chars[mid..].iter().collect(),
    }
}

/// Concrete typeface request for a [`FontStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFace {
    /// CSS-style family stack, most specific first.
    pub family: &'static str,
    pub weight: u16,
    pub italic: bool,
    /// Transform the text to uppercase before drawing.
    pub uppercase: bool,
}

impl FontFace {
    pub fn for_style(style: FontStyle) -> Self {
        let face = |family, weight, italic, uppercase| Self {
            family,
            weight,
            italic,
            uppercase,
        };
        match style {
            FontStyle::Serif => face("Georgia, 'Times New Roman', serif", 700, false, false),
            FontStyle::Sans => face("Helvetica, Arial, 'DejaVu Sans', sans-serif", 700, false, false),
            FontStyle::Mono => face("'Courier New', 'DejaVu Sans Mono', monospace", 600, false, false),
            FontStyle::Display => face("Impact, 'Arial Black', sans-serif", 900, false, true),
            FontStyle::Cursive => face("'Brush Script MT', 'Comic Sans MS', cursive", 400, true, false),
            FontStyle::Geometric => face("Futura, 'Century Gothic', sans-serif", 500, false, true),
            FontStyle::Rounded => face("Nunito, 'Arial Rounded MT Bold', sans-serif", 700, false, false),
            FontStyle::Sharp => face("'Bebas Neue', 'Arial Narrow', sans-serif", 800, false, true),
        }
    }

    /// Applies the face's case transform.
    pub fn apply_case(&self, text: &str) -> String {
        if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}
