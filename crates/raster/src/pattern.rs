//! Faint background patterns.
//!
//! Every pattern is drawn in a single color at opacity no higher than
//! [`MAX_PATTERN_OPACITY`]. Circuit traces vary per logo, so they draw from a
//! [`Xorshift64`] seeded from the configuration id rather than from entropy;
//! rendering the same configuration twice yields the same traces.

use glam::DVec2;
use logo_forge_core::color::Srgb;
use logo_forge_core::geometry::{polygon_vertices, Outline};
use logo_forge_core::prng::{RandomSource, Xorshift64};
use logo_forge_core::style::Pattern;

use crate::draw::{Paint, Primitive, Stroke, Style};

/// Upper bound on pattern opacity.
pub const MAX_PATTERN_OPACITY: f64 = 0.08;

/// Number of circuit traces.
const CIRCUIT_TRACES: usize = 14;

/// Primitives for `pattern` covering a `size` x `size` canvas.
///
/// `seed_label` seeds the patterns that need variation (the configuration id).
pub fn pattern_primitives(pattern: Pattern, size: f64, color: Srgb, seed_label: &str) -> Vec<Primitive> {
    let spacing = (size / 16.0).max(4.0);
    let line = (size / 400.0).max(0.5);
    let stroke_style = || Style::stroke(Stroke::solid(color, line)).with_opacity(MAX_PATTERN_OPACITY);

    match pattern {
        Pattern::None => Vec::new(),
        Pattern::Dots => grid_points(size, spacing)
            .map(|center| Primitive::Circle {
                center,
                radius: spacing * 0.12,
                style: Style::fill(Paint::Solid(color)).with_opacity(MAX_PATTERN_OPACITY),
            })
            .collect(),
        Pattern::Lines => {
            let mut o = Outline::new();
            let mut offset = -size;
            while offset < size {
                o.move_to(DVec2::new(offset, size)).line_to(DVec2::new(offset + size, 0.0));
                offset += spacing;
            }
            vec![Primitive::Path {
                outline: o,
                style: stroke_style(),
            }]
        }
        Pattern::Grid => {
            let mut o = Outline::new();
            let mut at = spacing;
            while at < size {
                o.move_to(DVec2::new(at, 0.0)).line_to(DVec2::new(at, size));
                o.move_to(DVec2::new(0.0, at)).line_to(DVec2::new(size, at));
                at += spacing;
            }
            vec![Primitive::Path {
                outline: o,
                style: stroke_style(),
            }]
        }
        Pattern::Waves => {
            let mut o = Outline::new();
            let amplitude = spacing * 0.35;
            let mut y = spacing;
            while y < size {
                o.move_to(DVec2::new(0.0, y));
                let mut x = 0.0;
                while x < size {
                    let half = spacing;
                    o.cubic_to(
                        DVec2::new(x + half * 0.5, y - amplitude),
                        DVec2::new(x + half * 1.5, y + amplitude),
                        DVec2::new(x + half * 2.0, y),
                    );
                    x += half * 2.0;
                }
                y += spacing;
            }
            vec![Primitive::Path {
                outline: o,
                style: stroke_style(),
            }]
        }
        Pattern::Hexagons => {
            let r = spacing * 0.6;
            let dx = r * 3f64.sqrt();
            let dy = r * 1.5;
            let mut o = Outline::new();
            let mut row = 0;
            let mut y = 0.0;
            while y < size + r {
                let shift = if row % 2 == 1 { dx / 2.0 } else { 0.0 };
                let mut x = shift;
                while x < size + r {
                    append_closed(&mut o, &polygon_vertices(DVec2::new(x, y), r, 6, 0.0));
                    x += dx;
                }
                y += dy;
                row += 1;
            }
            vec![Primitive::Path {
                outline: o,
                style: stroke_style(),
            }]
        }
        Pattern::Triangles => {
            let side = spacing * 1.5;
            let h = side * 3f64.sqrt() / 2.0;
            let mut o = Outline::new();
            let mut y = 0.0;
            let mut row = 0;
            while y < size {
                let shift = if row % 2 == 1 { side / 2.0 } else { 0.0 };
                let mut x = -side + shift;
                while x < size {
                    append_closed(
                        &mut o,
                        &[
                            DVec2::new(x, y + h),
                            DVec2::new(x + side / 2.0, y),
                            DVec2::new(x + side, y + h),
                        ],
                    );
                    x += side;
                }
                y += h;
                row += 1;
            }
            vec![Primitive::Path {
                outline: o,
                style: stroke_style(),
            }]
        }
        Pattern::Circuits => circuits(size, spacing, color, line, seed_label),
    }
}

fn grid_points(size: f64, spacing: f64) -> impl Iterator<Item = DVec2> {
    let n = (size / spacing).floor() as usize;
    (0..n).flat_map(move |i| {
        (0..n).map(move |j| DVec2::new((i as f64 + 0.5) * spacing, (j as f64 + 0.5) * spacing))
    })
}

fn append_closed(o: &mut Outline, points: &[DVec2]) {
    if let Some((first, rest)) = points.split_first() {
        o.move_to(*first);
        for p in rest {
            o.line_to(*p);
        }
        o.close();
    }
}

/// Orthogonal traces snapped to the spacing grid, each ending in a pad.
fn circuits(size: f64, spacing: f64, color: Srgb, line: f64, seed_label: &str) -> Vec<Primitive> {
    let mut rng = Xorshift64::from_label(seed_label);
    let cells = ((size / spacing).floor() as i64).max(2);
    let snap = |i: i64| (i as f64 + 0.5) * spacing;

    let mut traces = Outline::new();
    let mut pads = Vec::with_capacity(CIRCUIT_TRACES);
    for _ in 0..CIRCUIT_TRACES {
        let mut cx = rng.next_int_inclusive(0, cells - 1);
        let mut cy = rng.next_int_inclusive(0, cells - 1);
        traces.move_to(DVec2::new(snap(cx), snap(cy)));
        let legs = rng.next_int_inclusive(2, 4);
        for leg in 0..legs {
            let step = rng.next_int_inclusive(1, 4) * if rng.next_f64() < 0.5 { -1 } else { 1 };
            if leg % 2 == 0 {
                cx = (cx + step).clamp(0, cells - 1);
            } else {
                cy = (cy + step).clamp(0, cells - 1);
            }
            traces.line_to(DVec2::new(snap(cx), snap(cy)));
        }
        pads.push(DVec2::new(snap(cx), snap(cy)));
    }

    let mut out = vec![Primitive::Path {
        outline: traces,
        style: Style::stroke(Stroke::solid(color, line * 1.5)).with_opacity(MAX_PATTERN_OPACITY),
    }];
    out.extend(pads.into_iter().map(|center| Primitive::Circle {
        center,
        radius: spacing * 0.15,
        style: Style::fill(Paint::Solid(color)).with_opacity(MAX_PATTERN_OPACITY),
    }));
    out
}
