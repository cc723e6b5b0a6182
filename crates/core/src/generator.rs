//! Config generator: brand name + filter selection -> logo configurations.
//!
//! Generation is intentionally non-deterministic: [`generate`] and
//! [`generate_batch`] seed a fresh [`Xorshift64`] from OS entropy on every
//! call, so identical requests still produce varied logos. Callers that need
//! repeatable output inject their own source through [`generate_with`].

use tracing::debug;

use crate::config::{validate_name, BezierCurve, LogoConfiguration, ResolvedStyle, StyleParams};
use crate::error::LogoError;
use crate::filters::FilterSelection;
use crate::prng::{RandomSource, Xorshift64};

/// Number of logos generated when the caller does not say.
pub const DEFAULT_BATCH: usize = 9;
/// Smallest batch.
pub const MIN_BATCH: usize = 1;
/// Largest batch.
pub const MAX_BATCH: usize = 12;

/// Clamped batch size for one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize(usize);

impl BatchSize {
    /// Resolves a requested count: missing or 0 -> default (9), negative ->
    /// minimum (1), above 12 -> 12.
    pub fn resolve(requested: Option<i64>) -> Self {
        Self::resolve_with_default(requested, DEFAULT_BATCH)
    }

    /// Like [`BatchSize::resolve`] with a caller-chosen default (itself clamped).
    pub fn resolve_with_default(requested: Option<i64>, default: usize) -> Self {
        let default = default.clamp(MIN_BATCH, MAX_BATCH);
        let size = match requested {
            None | Some(0) => default,
            Some(n) if n < 0 => MIN_BATCH,
            Some(n) => usize::try_from(n).unwrap_or(MAX_BATCH).min(MAX_BATCH),
        };
        Self(size)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(DEFAULT_BATCH)
    }
}

/// Generates one configuration using a freshly entropy-seeded source.
pub fn generate(name: &str, filters: &FilterSelection) -> Result<LogoConfiguration, LogoError> {
    generate_with(name, filters, &mut Xorshift64::from_entropy())
}

/// Generates `count` independent configurations for the same name and filters.
pub fn generate_batch(
    name: &str,
    count: BatchSize,
    filters: &FilterSelection,
) -> Result<Vec<LogoConfiguration>, LogoError> {
    let mut rng = Xorshift64::from_entropy();
    (0..count.get())
        .map(|_| generate_with(name, filters, &mut rng))
        .collect()
}

/// Generates one configuration, drawing every random value from `rng`.
///
/// Returns `LogoError::InvalidInput` if `name` is empty after trimming or
/// longer than 50 characters.
pub fn generate_with<R: RandomSource + ?Sized>(
    name: &str,
    filters: &FilterSelection,
    rng: &mut R,
) -> Result<LogoConfiguration, LogoError> {
    let name = validate_name(name)?;

    let palette_category = filters.palette_category.resolve(rng);
    let palette = palette_category.variant(rng.next_index(palette_category.variant_count()));
    let style = ResolvedStyle {
        palette_category,
        palette,
        shape: filters.shape.resolve(rng),
        font_style: filters.font.resolve(rng),
        effect: filters.effect.resolve(rng),
        layout: filters.layout.resolve(rng),
        pattern: filters.pattern.resolve(rng),
    };

    let params = StyleParams {
        rotation: rng.next_range(0.0, 360.0),
        scale: rng.next_range(0.7, 1.3),
        shape_size: rng.next_range(120.0, 200.0),
        font_size: rng.next_range(24.0, 48.0),
        letter_spacing: rng.next_range(-2.0, 6.0),
        border_radius: rng.next_range(0.0, 50.0),
        stroke_width: rng.next_range(1.0, 5.0),
        glow_intensity: rng.next_range(5.0, 25.0),
        inner_rotation: rng.next_range(-15.0, 15.0),
        decor_count: rng.next_int_inclusive(3, 10) as u32,
    };

    let mut curve = || BezierCurve {
        cp1x: rng.next_range(-100.0, 100.0),
        cp1y: rng.next_range(-100.0, 100.0),
        cp2x: rng.next_range(-100.0, 100.0),
        cp2y: rng.next_range(-100.0, 100.0),
    };
    let bezier_curves = [curve(), curve()];

    let hsl_shift = rng.next_index(360) as u16;

    let config = LogoConfiguration::new(name, style, params, bezier_curves, hsl_shift)?;
    debug!(
        id = config.id(),
        shape = %config.shape(),
        effect = %config.effect(),
        layout = %config.layout(),
        "generated logo configuration"
    );
    Ok(config)
}
