//! Flat 2D logo composition.
//!
//! [`compose`] builds the draw list for one configuration on a square
//! logical canvas. Layers go back to front:
//!
//! 1. rounded-rect vignette (radial gradient, tinted center)
//! 2. background pattern
//! 3. glow pass (outline at 1.08·r, blurred)
//! 4. drop shadow and main shape fill + stroke
//! 5. inner copy at 0.72·r rotated by `innerRotation`
//! 6. `decorCount` dots on the 1.18·r circle
//! 7. the two Bezier arcs, pole to pole
//! 8. text per layout
//!
//! Every length is expressed against a 400-unit reference canvas and scaled
//! to the requested size, so the composition looks the same at any size.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

use logo_forge_core::color::Srgb;
use logo_forge_core::config::LogoConfiguration;
use logo_forge_core::contract::{EffectTreatment, FillStyle, FontFace, TextPlacement};
use logo_forge_core::geometry::{shape_outline, Outline};
use logo_forge_core::palette::{ColorRole, Palette};

use crate::draw::{DrawList, GradientStop, Paint, Primitive, Stroke, Style, TextAnchor, TextRun};
use crate::pattern::pattern_primitives;

/// Logical size all proportions are designed against.
pub const REFERENCE_SIZE: f64 = 400.0;

/// Glow outline radius relative to the shape radius.
pub const GLOW_RADIUS_RATIO: f64 = 1.08;

/// Inner copy radius relative to the shape radius.
pub const INNER_RADIUS_RATIO: f64 = 0.72;

/// Radius of the decoration circle relative to the shape radius.
pub const DECOR_RADIUS_RATIO: f64 = 1.18;

/// Opacity of each Bezier arc, front to back.
const ARC_OPACITY: [f64; 2] = [0.5, 0.28];

/// Shape radius as a fraction of `shapeSize · scale` on the reference canvas.
const RADIUS_FACTOR: f64 = 0.38;

/// Shape center and text anchors for one layout.
struct Frame {
    center: DVec2,
    /// Vertical position of the first text baseline.
    text_y: f64,
}

/// Builds the draw list for `config` on a `size` x `size` logical canvas.
pub fn compose(config: &LogoConfiguration, size: f64) -> DrawList {
    let k = size / REFERENCE_SIZE;
    let params = config.params();
    let palette = config.palette();
    let placement = TextPlacement::for_config(config);
    let treatment = EffectTreatment::for_effect(config.effect());

    let radius = params.shape_size * params.scale * RADIUS_FACTOR * k;
    let frame = frame_for(&placement, size, radius);

    let mut list = DrawList::new(size, size);
    list.push(vignette(palette, size, params.border_radius * k));
    list.extend(pattern_primitives(
        config.pattern(),
        size,
        palette.accent,
        config.id(),
    ));

    let outline = shape_outline(config.shape(), frame.center, radius, params.rotation);

    if let Some(glow) = treatment.glow {
        let glow_outline = shape_outline(
            config.shape(),
            frame.center,
            radius * GLOW_RADIUS_RATIO,
            params.rotation,
        );
        list.push(Primitive::Path {
            outline: glow_outline,
            style: Style::stroke(Stroke::solid(
                palette.color(glow.color),
                params.stroke_width * 2.0 * k,
            ))
            .with_opacity(0.85)
            .with_blur(params.glow_intensity * glow.strength * 0.5 * k),
        });
    }

    if let Some(shadow) = treatment.shadow {
        let offset = DVec2::splat(params.glow_intensity * shadow.offset * k);
        list.push(Primitive::Path {
            outline: outline.map_points(|p| p + offset),
            style: Style::fill(Paint::Solid(Srgb::BLACK))
                .with_opacity(shadow.opacity)
                .with_blur(params.glow_intensity * shadow.softness * k),
        });
    }

    list.push(Primitive::Path {
        outline: outline.clone(),
        style: main_style(&treatment, palette, frame.center, radius, params.stroke_width * k),
    });

    list.push(Primitive::Path {
        outline: shape_outline(
            config.shape(),
            frame.center,
            radius * INNER_RADIUS_RATIO,
            params.rotation + params.inner_rotation,
        ),
        style: Style::stroke(Stroke::solid(palette.secondary, params.stroke_width * 0.6 * k))
            .with_opacity(0.65),
    });

    list.extend(decor_dots(
        frame.center,
        radius * DECOR_RADIUS_RATIO,
        params.decor_count,
        params.rotation.to_radians(),
        palette,
        k,
    ));

    for (curve, opacity) in config.bezier_curves().iter().zip(ARC_OPACITY) {
        let top = frame.center - DVec2::new(0.0, radius * DECOR_RADIUS_RATIO);
        let bottom = frame.center + DVec2::new(0.0, radius * DECOR_RADIUS_RATIO);
        let mut arc = Outline::new();
        arc.move_to(top).cubic_to(
            frame.center + DVec2::new(curve.cp1x, curve.cp1y) * k,
            frame.center + DVec2::new(curve.cp2x, curve.cp2y) * k,
            bottom,
        );
        list.push(Primitive::Path {
            outline: arc,
            style: Style::stroke(Stroke::solid(palette.accent, 1.5 * k)).with_opacity(opacity),
        });
    }

    let text = TextStyle {
        face: FontFace::for_style(config.font_style()),
        size: params.font_size * k,
        spacing: params.letter_spacing * k,
        on_shape: if treatment.fill == FillStyle::None || treatment.is_translucent() {
            palette.primary
        } else {
            palette.background
        },
    };
    list.extend(text_primitives(&placement, &frame, &text, palette, radius, size));
    list
}

fn frame_for(placement: &TextPlacement, size: f64, radius: f64) -> Frame {
    let at = |cy: f64, ty: f64| Frame {
        center: DVec2::new(size * 0.5, size * cy),
        text_y: size * ty,
    };
    match placement {
        TextPlacement::Centered { .. } | TextPlacement::Inline { .. } => at(0.42, 0.86),
        TextPlacement::Stacked { lines } => {
            let frame = at(0.38, 0.76);
            // lift the shape so the text block fits
            let lift = (lines.len().saturating_sub(2) as f64) * size * 0.04;
            Frame {
                center: frame.center - DVec2::new(0.0, lift),
                text_y: frame.text_y - lift,
            }
        }
        TextPlacement::Diagonal { .. } => at(0.45, 0.5),
        TextPlacement::Arc { .. } => Frame {
            center: DVec2::new(size * 0.5, size * 0.56),
            text_y: size * 0.56 - radius * 1.35,
        },
        TextPlacement::Split(_) => at(0.5, 0.13),
        TextPlacement::Banner { .. } => at(0.42, 0.84),
        TextPlacement::Monogram { .. } => at(0.5, 0.5),
    }
}

fn vignette(palette: &Palette, size: f64, corner: f64) -> Primitive {
    let center = DVec2::splat(size * 0.5);
    Primitive::Rect {
        origin: DVec2::ZERO,
        size: DVec2::splat(size),
        radius: corner,
        style: Style::fill(Paint::Radial {
            center,
            radius: size * 0.75,
            stops: vec![
                GradientStop::new(0.0, palette.background.mix(palette.primary, 0.12)),
                GradientStop::new(1.0, palette.background.darken(0.25)),
            ],
        }),
    }
}

fn main_style(
    treatment: &EffectTreatment,
    palette: &Palette,
    center: DVec2,
    radius: f64,
    stroke_width: f64,
) -> Style {
    let diagonal = DVec2::splat(radius);
    let fill = match treatment.fill {
        FillStyle::None => None,
        FillStyle::Flat => Some(Paint::Solid(palette.primary)),
        FillStyle::Gradient => Some(Paint::Linear {
            from: center - diagonal,
            to: center + diagonal,
            stops: vec![
                GradientStop::new(0.0, palette.primary),
                GradientStop::new(1.0, palette.secondary),
            ],
        }),
        FillStyle::Metallic => Some(Paint::Linear {
            from: center - diagonal,
            to: center + diagonal,
            stops: vec![
                GradientStop::new(0.0, palette.primary.lighten(0.45)),
                GradientStop::new(0.35, palette.primary),
                GradientStop::new(0.5, palette.primary.darken(0.35)),
                GradientStop::new(0.65, palette.primary.lighten(0.25)),
                GradientStop::new(1.0, palette.secondary.darken(0.2)),
            ],
        }),
    };
    let stroke = treatment.stroke.then(|| {
        let color = if treatment.highlight_stroke {
            palette.primary.mix(Srgb::WHITE, 0.6)
        } else {
            palette.color(ColorRole::Accent)
        };
        Stroke::solid(color, stroke_width * treatment.stroke_scale)
    });

    Style {
        fill,
        stroke,
        fill_opacity: treatment.fill_opacity,
        opacity: 1.0,
        blur: 0.0,
    }
}

fn decor_dots(
    center: DVec2,
    ring: f64,
    count: u32,
    rotation: f64,
    palette: &Palette,
    k: f64,
) -> impl Iterator<Item = Primitive> + '_ {
    (0..count).map(move |i| {
        let angle = TAU * f64::from(i) / f64::from(count) - FRAC_PI_2 + rotation;
        let color = if i % 2 == 0 {
            palette.accent
        } else {
            palette.secondary
        };
        Primitive::Circle {
            center: center + ring * DVec2::new(angle.cos(), angle.sin()),
            radius: 3.5 * k,
            style: Style::fill(Paint::Solid(color)),
        }
    })
}

struct TextStyle {
    face: FontFace,
    size: f64,
    spacing: f64,
    /// Color for text drawn on top of the shape.
    on_shape: Srgb,
}

impl TextStyle {
    fn run(&self, text: &str, position: DVec2, size: f64, fill: Srgb, anchor: TextAnchor) -> TextRun {
        TextRun {
            text: text.to_string(),
            position,
            face: self.face,
            size,
            letter_spacing: self.spacing,
            fill,
            anchor,
            rotation_deg: 0.0,
            opacity: 1.0,
        }
    }
}

fn text_primitives(
    placement: &TextPlacement,
    frame: &Frame,
    style: &TextStyle,
    palette: &Palette,
    radius: f64,
    size: f64,
) -> Vec<Primitive> {
    let mid_x = size * 0.5;
    let main = |text: &str, y: f64| {
        Primitive::Text(style.run(
            text,
            DVec2::new(mid_x, y),
            style.size,
            palette.primary,
            TextAnchor::Middle,
        ))
    };

    match placement {
        TextPlacement::Centered { text } => vec![main(text, frame.text_y)],
        TextPlacement::Stacked { lines } => lines
            .iter()
            .enumerate()
            .map(|(i, line)| main(line, frame.text_y + i as f64 * style.size * 1.1))
            .collect(),
        TextPlacement::Inline { lead, text } => {
            let gap = style.size * 0.3;
            vec![
                Primitive::Text(style.run(
                    lead,
                    DVec2::new(mid_x - gap, frame.text_y),
                    style.size,
                    palette.accent,
                    TextAnchor::End,
                )),
                Primitive::Text(style.run(
                    text,
                    DVec2::new(mid_x + gap, frame.text_y),
                    style.size,
                    palette.primary,
                    TextAnchor::Start,
                )),
            ]
        }
        TextPlacement::Diagonal { text, angle_deg } => {
            let mut run = style.run(
                text,
                DVec2::new(mid_x, frame.text_y),
                style.size,
                palette.primary.mix(Srgb::WHITE, 0.2),
                TextAnchor::Middle,
            );
            run.rotation_deg = *angle_deg;
            vec![Primitive::Text(run)]
        }
        TextPlacement::Arc { text, sweep_deg } => {
            let chars: Vec<char> = text.chars().collect();
            let arc_radius = frame.center.y - frame.text_y;
            let sweep = sweep_deg.to_radians();
            let n = chars.len();
            chars
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    // spread from left (-π) to right (0) across the upper half
                    let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.5 };
                    let angle = -FRAC_PI_2 - sweep / 2.0 + t * sweep;
                    let position = frame.center + arc_radius * DVec2::new(angle.cos(), angle.sin());
                    let mut run = style.run(
                        &c.to_string(),
                        position,
                        style.size * 0.8,
                        palette.primary,
                        TextAnchor::Middle,
                    );
                    run.rotation_deg = (angle + FRAC_PI_2).to_degrees();
                    run.letter_spacing = 0.0;
                    Primitive::Text(run)
                })
                .collect()
        }
        TextPlacement::Split(halves) => vec![
            Primitive::Text(style.run(
                &halves.top,
                DVec2::new(mid_x, frame.text_y),
                style.size,
                palette.primary,
                TextAnchor::Middle,
            )),
            Primitive::Text(style.run(
                &halves.bottom,
                DVec2::new(mid_x, size - frame.text_y + style.size * 0.6),
                style.size,
                palette.accent,
                TextAnchor::Middle,
            )),
        ],
        TextPlacement::Banner { initials, text } => {
            let banner_h = style.size * 1.5;
            let banner_w = (radius * 2.4).min(size * 0.9);
            vec![
                Primitive::Text(style.run(
                    initials,
                    frame.center + DVec2::new(0.0, radius * 0.2),
                    radius * 0.55,
                    style.on_shape,
                    TextAnchor::Middle,
                )),
                Primitive::Rect {
                    origin: DVec2::new(mid_x - banner_w / 2.0, frame.text_y - banner_h * 0.7),
                    size: DVec2::new(banner_w, banner_h),
                    radius: banner_h * 0.25,
                    style: Style::fill(Paint::Solid(palette.primary)),
                },
                Primitive::Text(style.run(
                    text,
                    DVec2::new(mid_x, frame.text_y),
                    style.size * 0.7,
                    palette.background,
                    TextAnchor::Middle,
                )),
            ]
        }
        TextPlacement::Monogram { initials } => vec![Primitive::Text(style.run(
            initials,
            frame.center + DVec2::new(0.0, radius * 0.3),
            radius * 0.9,
            style.on_shape,
            TextAnchor::Middle,
        ))],
    }
}
