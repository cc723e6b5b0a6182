//! The fully-resolved logo configuration passed from the generator to the
//! renderers and exporters.
//!
//! A [`LogoConfiguration`] is immutable once built: fields are private and
//! only readable through accessors. It carries everything a renderer needs,
//! so rendering is a pure function of `(configuration, size)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LogoError;
use crate::palette::{Palette, PaletteCategory};
use crate::style::{Effect, FontStyle, Layout, Pattern, Shape};

/// Maximum brand-name length in characters, after trimming.
pub const MAX_NAME_CHARS: usize = 50;

/// Maximum number of characters in derived initials.
pub const MAX_INITIALS: usize = 3;

/// Initials used when a name yields no usable characters.
const FALLBACK_INITIAL: &str = "L";

/// Control-point offsets for one decorative arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    pub cp1x: f64,
    pub cp1y: f64,
    pub cp2x: f64,
    pub cp2y: f64,
}

/// Numeric style parameters, each drawn independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleParams {
    /// Degrees in [0, 360).
    pub rotation: f64,
    /// In [0.7, 1.3].
    pub scale: f64,
    /// Pixels in [120, 200].
    pub shape_size: f64,
    /// Pixels in [24, 48].
    pub font_size: f64,
    /// Pixels in [-2, 6].
    pub letter_spacing: f64,
    /// Pixels in [0, 50].
    pub border_radius: f64,
    /// Pixels in [1, 5].
    pub stroke_width: f64,
    /// In [5, 25].
    pub glow_intensity: f64,
    /// Degrees in [-15, 15].
    pub inner_rotation: f64,
    /// Integer in [3, 10].
    pub decor_count: u32,
}

/// One generated logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoConfiguration {
    id: String,
    name: String,
    initials: String,
    palette_category: PaletteCategory,
    palette: Palette,
    shape: Shape,
    font_style: FontStyle,
    effect: Effect,
    layout: Layout,
    pattern: Pattern,
    #[serde(flatten)]
    params: StyleParams,
    bezier_curves: [BezierCurve; 2],
    hsl_shift: u16,
    timestamp: DateTime<Utc>,
}

/// Resolved enumerable choices for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub palette_category: PaletteCategory,
    pub palette: Palette,
    pub shape: Shape,
    pub font_style: FontStyle,
    pub effect: Effect,
    pub layout: Layout,
    pub pattern: Pattern,
}

impl LogoConfiguration {
    /// Assembles a configuration from already-resolved parts.
    ///
    /// Validates `name` (see [`validate_name`]), derives the initials, and
    /// stamps a fresh id and timestamp.
    pub fn new(
        name: &str,
        style: ResolvedStyle,
        params: StyleParams,
        bezier_curves: [BezierCurve; 2],
        hsl_shift: u16,
    ) -> Result<Self, LogoError> {
        let name = validate_name(name)?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            initials: initials(name),
            name: name.to_string(),
            palette_category: style.palette_category,
            palette: style.palette,
            shape: style.shape,
            font_style: style.font_style,
            effect: style.effect,
            layout: style.layout,
            pattern: style.pattern,
            params,
            bezier_curves,
            hsl_shift: hsl_shift % 360,
            timestamp: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initials(&self) -> &str {
        &self.initials
    }

    pub fn palette_category(&self) -> PaletteCategory {
        self.palette_category
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn params(&self) -> &StyleParams {
        &self.params
    }

    pub fn bezier_curves(&self) -> &[BezierCurve; 2] {
        &self.bezier_curves
    }

    /// Reserved hue rotation. Generated for every logo but not applied by
    /// any renderer.
    pub fn hsl_shift(&self) -> u16 {
        self.hsl_shift
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Trims `name` and checks it is 1..=50 characters.
///
/// Returns the trimmed slice, or `LogoError::InvalidInput`.
pub fn validate_name(name: &str) -> Result<&str, LogoError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(LogoError::InvalidInput("name is required".to_string()));
    }
    let chars = trimmed.chars().count();
    if chars > MAX_NAME_CHARS {
        return Err(LogoError::InvalidInput(format!(
            "name must be at most {MAX_NAME_CHARS} characters, got {chars}"
        )));
    }
    Ok(trimmed)
}

/// Trims `name` and cuts it to 50 characters, as a boundary layer does
/// before calling the generator.
pub fn normalize_name(name: &str) -> String {
    name.trim().chars().take(MAX_NAME_CHARS).collect::<String>().trim_end().to_string()
}

/// Derives up to three uppercase initials from a brand name.
///
/// Takes the first character of each whitespace-separated word. Falls back
/// to the first character of the raw name, then to `"L"`.
pub fn initials(name: &str) -> String {
    let from_words: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(MAX_INITIALS)
        .collect();
    if !from_words.is_empty() {
        return from_words;
    }
    name.chars()
        .next()
        .map(|c| c.to_uppercase().take(MAX_INITIALS).collect())
        .unwrap_or_else(|| FALLBACK_INITIAL.to_string())
}
